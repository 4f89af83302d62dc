//! Choice collections with separator-aware indexing.
//!
//! This module exposes the `Choices` collection plus its supporting types:
//! - `Entry`: what a collection stores, either a `Choice` or a `Separator`
//! - `AttrValue`: a typed choice attribute (text, integer or flag)
//! - `Selector`: any value that may address an entry by index
//! - `WhereClause`: attribute constraints for `Choices::filter_where`
//! - `RenderOptions`, `ChoiceStyles` and `list`: render wiring
//!
//! ## Two index spaces
//!
//! A prompt lays out every entry, separators included, but its cursor only
//! ever lands on choices. A collection therefore answers lookups in two
//! coordinate systems:
//!
//! - **raw index** (`get`, `iter`, `for_each`, `filter`): all entries
//! - **real index** (`get_choice`, `real_iter`, `filter_where`, `pluck`):
//!   selectable entries only
//!
//! The selectable view is derived from the entries and rebuilt from scratch
//! after every mutation (`push`, `truncate`, `grow`, `set_len`). Its length
//! cannot be assigned directly; `set_real_len` always fails.
//!
//! ## Rendering
//!
//! `Choices::render(pointer, args)` runs the render function installed with
//! `set_render`, handing it `args` unchanged, optionally through the circular
//! [`Paginator`](crate::paginator::Paginator) window, and falls back to the
//! default `list` renderer.
//!
//! # Examples
//!
//! ```
//! use bubbletea_choices::choices::{Choices, Entry, Separator, WhereClause};
//!
//! let mut choices = Choices::new(vec![
//!     Entry::from("Espresso"),
//!     Entry::from("Latte"),
//!     Separator::default().into(),
//!     Entry::from("Tea"),
//! ]);
//! choices.push(["Water"]);
//!
//! assert_eq!(choices.len(), 5);
//! assert_eq!(choices.real_len(), 4);
//! assert_eq!(choices.get_choice(2).unwrap().name(), "Tea");
//! assert_eq!(choices.filter_where(&WhereClause::new("name", "Water")).len(), 1);
//! ```

mod model;
mod query;
mod render;
mod types;

#[cfg(test)]
mod tests;

pub use model::Choices;
pub use query::WhereClause;
pub use render::{list, ChoiceStyles, RenderFn, RenderOptions};
pub use types::{
    Attr, AttrValue, Choice, Entry, Selector, Separator, SEPARATOR_CHAR, SEPARATOR_WIDTH,
};
