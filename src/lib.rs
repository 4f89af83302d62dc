#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-choices/")]

//! # bubbletea-choices
//!
//! Choice collections for interactive terminal prompts: an ordered list of
//! selectable entries and inert separators, indexed two ways, plus a circular
//! pagination window for long renderings.
//!
//! ## Overview
//!
//! A list prompt draws every entry, separators included, while its cursor only
//! ever stops on selectable choices. [`Choices`] keeps both views consistent:
//!
//! - **raw index**: position among all entries (layout, rendering)
//! - **real index**: position among selectable entries (cursor movement)
//!
//! The selectable view is derived from the entries and recomputed after every
//! mutation, so the two never drift apart.
//!
//! Rendering goes through a caller-supplied function. When pagination is
//! enabled the output is cut to a fixed-height [`Paginator`] window whose
//! content wraps around, so the list appears endless while scrolling.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `Choices` | Entry collection with raw and real indexing |
//! | `Choice` / `Separator` / `Entry` | Values stored in a collection |
//! | `AttrValue` / `Attr` | Typed choice attributes, owned and borrowed |
//! | `WhereClause` | Attribute query over selectable entries |
//! | `Paginator` | Stateless circular window over rendered output |
//! | `ChoiceStyles` | Styles for the default list renderer |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_choices::prelude::*;
//!
//! let mut choices = Choices::new(vec![
//!     Entry::from("Pepperoni"),
//!     Entry::from("Hawaiian"),
//!     Separator::new("= Vegetarian =").into(),
//!     Entry::from("Margherita"),
//! ]);
//!
//! // The cursor moves in real indices: 2 is "Margherita", not the separator.
//! assert_eq!(choices.get_choice(2).map(Choice::name), Some("Margherita"));
//!
//! choices.set_render(
//!     |choices: &Choices, pointer: isize, _: ()| list(choices, pointer, &ChoiceStyles::default()),
//!     RenderOptions { paginated: true },
//! );
//! let frame = choices.render(0, ());
//! assert_eq!(frame.lines().count(), 4); // fits, so nothing is cut
//! ```
//!
//! ## Logging
//!
//! Construction, mutation and pagination emit `tracing` events at `debug` and
//! `trace` level. Install any `tracing` subscriber to see them.

pub mod choices;
pub mod error;
pub mod paginator;

pub use choices::{
    list, Attr, AttrValue, Choice, ChoiceStyles, Choices, Entry, RenderFn, RenderOptions, Selector,
    Separator, WhereClause,
};
pub use error::{ChoicesError, Result};
pub use paginator::{paginate, Paginator, DEFAULT_PAGE_SIZE};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_choices::prelude::*;
///
/// let choices = Choices::new(["a", "b"]);
/// assert_eq!(choices.real_len(), 2);
/// ```
pub mod prelude {
    pub use crate::choices::{
        list, Attr, AttrValue, Choice, ChoiceStyles, Choices, Entry, RenderOptions, Selector,
        Separator, WhereClause,
    };
    pub use crate::error::ChoicesError;
    pub use crate::paginator::{paginate, Paginator};
}
