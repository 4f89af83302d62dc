//! Core value types stored in a choice collection.
//!
//! This module contains the entry types and the selector trait:
//! - `Choice`: a selectable entry with `name`, `value`, `short` and extra attributes
//! - `AttrValue` / `Attr`: typed attribute values, owned and borrowed
//! - `Separator`: an inert divider line, never selectable
//! - `Entry`: the tagged variant a collection stores
//! - `Selector`: anything that may resolve to a collection index

use lipgloss_extras::prelude::*;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Character used to draw the default separator line.
pub const SEPARATOR_CHAR: char = '─';

/// Number of characters in the default separator line.
pub const SEPARATOR_WIDTH: usize = 14;

/// The value of a choice attribute.
///
/// Attribute queries compare values structurally, so `Int(12)` never equals
/// `Text("12")` and `Bool(true)` never equals `Text("true")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    /// A string value.
    Text(String),
    /// An integer value.
    Int(i64),
    /// A flag, e.g. `disabled`.
    Bool(bool),
}

impl AttrValue {
    /// Borrows the value.
    pub fn as_attr(&self) -> Attr<'_> {
        match self {
            AttrValue::Text(text) => Attr::Text(text),
            AttrValue::Int(number) => Attr::Int(*number),
            AttrValue::Bool(flag) => Attr::Bool(*flag),
        }
    }

    fn into_text(self) -> String {
        match self {
            AttrValue::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_attr(), f)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<&String> for AttrValue {
    fn from(text: &String) -> Self {
        AttrValue::Text(text.clone())
    }
}

impl From<i64> for AttrValue {
    fn from(number: i64) -> Self {
        AttrValue::Int(number)
    }
}

impl From<i32> for AttrValue {
    fn from(number: i32) -> Self {
        AttrValue::Int(i64::from(number))
    }
}

impl From<u32> for AttrValue {
    fn from(number: u32) -> Self {
        AttrValue::Int(i64::from(number))
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        AttrValue::Bool(flag)
    }
}

/// A borrowed attribute value, as returned by [`Choice::attr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr<'a> {
    /// A string value.
    Text(&'a str),
    /// An integer value.
    Int(i64),
    /// A flag.
    Bool(bool),
}

impl<'a> Attr<'a> {
    /// Returns the text, or `None` for numbers and flags.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Attr::Text(text) => Some(*text),
            Attr::Int(_) | Attr::Bool(_) => None,
        }
    }
}

impl Display for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Text(text) => f.write_str(text),
            Attr::Int(number) => write!(f, "{}", number),
            Attr::Bool(flag) => write!(f, "{}", flag),
        }
    }
}

/// A selectable entry.
///
/// A choice always has a `name` (what the prompt displays), a `value` (what
/// the prompt answers with) and a `short` form (what the prompt echoes once
/// answered). Both `value` and `short` default to the name. Any other
/// attribute can be attached with [`Choice::with_attr`] and is visible to
/// [`Choices::filter_where`](super::Choices::filter_where) and
/// [`Choices::pluck`](super::Choices::pluck).
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::{Attr, Choice};
///
/// let choice = Choice::new("Large pizza")
///     .with_value("large")
///     .with_attr("price", 12)
///     .with_attr("disabled", true);
///
/// assert_eq!(choice.name(), "Large pizza");
/// assert_eq!(choice.value(), "large");
/// assert_eq!(choice.short(), "Large pizza");
/// assert_eq!(choice.attr("price"), Some(Attr::Int(12)));
/// assert_eq!(choice.attr("disabled"), Some(Attr::Bool(true)));
/// assert_eq!(choice.attr("size"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    name: String,
    value: String,
    short: String,
    attrs: BTreeMap<String, AttrValue>,
}

impl Choice {
    /// Creates a choice whose value and short form equal its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            short: name.clone(),
            name,
            attrs: BTreeMap::new(),
        }
    }

    /// Sets the answered value (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the short form echoed after answering (builder pattern).
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Attaches an extra attribute (builder pattern).
    ///
    /// The keys `name`, `value` and `short` address the built-in fields and
    /// overwrite them instead of creating a shadowed extra attribute. Those
    /// fields are always text, so numbers and flags are stored formatted.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "name" => self.name = value.into_text(),
            "value" => self.value = value.into_text(),
            "short" => self.short = value.into_text(),
            _ => {
                self.attrs.insert(key, value);
            }
        }
        self
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the answered value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the short form.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Looks up an attribute by name, built-in fields first.
    pub fn attr(&self, key: &str) -> Option<Attr<'_>> {
        match key {
            "name" => Some(Attr::Text(&self.name)),
            "value" => Some(Attr::Text(&self.value)),
            "short" => Some(Attr::Text(&self.short)),
            _ => self.attrs.get(key).map(AttrValue::as_attr),
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Choice {
    fn from(name: &str) -> Self {
        Choice::new(name)
    }
}

impl From<String> for Choice {
    fn from(name: String) -> Self {
        Choice::new(name)
    }
}

impl From<&String> for Choice {
    fn from(name: &String) -> Self {
        Choice::new(name.as_str())
    }
}

/// An inert divider between groups of choices.
///
/// Separators only carry the text they display. They are skipped by every
/// real-index operation and can never be selected.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::Separator;
///
/// assert_eq!(Separator::default().line(), "──────────────");
/// assert_eq!(Separator::new("= Drinks =").line(), "= Drinks =");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    line: String,
}

impl Separator {
    /// Creates a separator displaying the given line.
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Returns the unstyled line.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new(SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH))
    }
}

impl Display for Separator {
    /// Writes the line dimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Style::new().faint(true).render(&self.line))
    }
}

/// One element of a choice collection.
///
/// Modelled as a tagged variant rather than a trait object so the selectable
/// filter is a plain predicate ([`Entry::is_separator`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A divider line; never selectable.
    Separator(Separator),
    /// A selectable choice.
    Choice(Choice),
}

impl Entry {
    /// Returns true for separators.
    pub fn is_separator(&self) -> bool {
        matches!(self, Entry::Separator(_))
    }

    /// Returns the choice, or `None` for a separator.
    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            Entry::Choice(choice) => Some(choice),
            Entry::Separator(_) => None,
        }
    }

    /// Returns the separator, or `None` for a choice.
    pub fn as_separator(&self) -> Option<&Separator> {
        match self {
            Entry::Separator(separator) => Some(separator),
            Entry::Choice(_) => None,
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Separator(separator) => Display::fmt(separator, f),
            Entry::Choice(choice) => Display::fmt(choice, f),
        }
    }
}

impl From<Choice> for Entry {
    fn from(choice: Choice) -> Self {
        Entry::Choice(choice)
    }
}

impl From<Separator> for Entry {
    fn from(separator: Separator) -> Self {
        Entry::Separator(separator)
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Entry::Choice(Choice::new(name))
    }
}

impl From<String> for Entry {
    fn from(name: String) -> Self {
        Entry::Choice(Choice::new(name))
    }
}

impl From<&String> for Entry {
    fn from(name: &String) -> Self {
        Entry::Choice(Choice::new(name.as_str()))
    }
}

/// A value that may select an entry by index.
///
/// Integers resolve when non-negative, floats only when they are integral and
/// non-negative, and strings never resolve. Resolution does not check bounds;
/// the collection does that and answers `None` when the index is out of range.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::Selector;
///
/// assert_eq!(3usize.to_index(), Some(3));
/// assert_eq!((-1i32).to_index(), None);
/// assert_eq!(2.0f64.to_index(), Some(2));
/// assert_eq!(1.5f64.to_index(), None);
/// assert_eq!("1".to_index(), None);
/// ```
pub trait Selector {
    /// Returns the index this selector designates, if any.
    fn to_index(&self) -> Option<usize>;
}

macro_rules! integer_selector {
    ($($t:ty),*) => {$(
        impl Selector for $t {
            fn to_index(&self) -> Option<usize> {
                usize::try_from(*self).ok()
            }
        }
    )*};
}

integer_selector!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

impl Selector for f64 {
    fn to_index(&self) -> Option<usize> {
        if self.is_finite() && *self >= 0.0 && self.fract() == 0.0 && *self <= usize::MAX as f64 {
            Some(*self as usize)
        } else {
            None
        }
    }
}

impl Selector for f32 {
    fn to_index(&self) -> Option<usize> {
        f64::from(*self).to_index()
    }
}

impl Selector for &str {
    fn to_index(&self) -> Option<usize> {
        None
    }
}

impl Selector for String {
    fn to_index(&self) -> Option<usize> {
        None
    }
}

impl<S: Selector> Selector for Option<S> {
    fn to_index(&self) -> Option<usize> {
        self.as_ref().and_then(Selector::to_index)
    }
}
