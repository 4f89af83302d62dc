//! Main `Choices` struct: construction, dual indexing and mutation.
//!
//! A collection stores every entry in insertion order and keeps a derived
//! list of the raw positions of its selectable entries. The derived list is
//! rebuilt from scratch after every mutation and never patched in place.

use super::render::Renderer;
use super::types::{Choice, Entry, Selector, Separator};
use crate::error::{ChoicesError, Result};
use std::fmt;

/// An ordered collection of choices and separators with two index spaces.
///
/// - The **raw index** addresses every entry, separators included. Layout and
///   rendering work in raw indices.
/// - The **real index** addresses selectable entries only. A prompt cursor
///   moves in real indices.
///
/// A real index `j` always maps to exactly one raw index `i >= j`, while a raw
/// index pointing at a separator has no real index at all.
///
/// `A` is the type of the extra arguments passed through
/// [`render`](Self::render) to the installed render function; it defaults to
/// `()` for render functions that need nothing beyond the pointer.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::{Choices, Entry, Separator};
///
/// let choices = Choices::new(vec![
///     Entry::from("Pepperoni"),
///     Separator::new("= Vegetarian =").into(),
///     Entry::from("Margherita"),
///     Entry::from("Funghi"),
/// ]);
///
/// assert_eq!(choices.len(), 4);
/// assert_eq!(choices.real_len(), 3);
///
/// // Raw index 1 is the separator; real index 1 skips it.
/// assert!(choices.get(1).unwrap().is_separator());
/// assert_eq!(choices.get_choice(1).unwrap().name(), "Margherita");
/// assert_eq!(choices.raw_index_of(1), Some(2));
/// ```
pub struct Choices<A = ()> {
    pub(super) choices: Vec<Entry>,
    /// Raw positions of the selectable entries, ascending.
    pub(super) real_indices: Vec<usize>,
    pub(super) renderer: Option<Renderer<A>>,
}

impl Choices {
    /// Creates a collection from raw values.
    ///
    /// Values convertible into [`Entry`] are accepted: strings and [`Choice`]
    /// values become choices while [`Separator`] values stay separators.
    /// Empty input yields an empty collection.
    ///
    /// The collection renders without extra arguments; use
    /// [`from_values`](Self::from_values) to pick another argument type.
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Entry>,
    {
        Self::from_values(values)
    }
}

impl<A> Choices<A> {
    /// Creates a collection from raw values, rendering with arguments of type `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::Choices;
    ///
    /// let choices = Choices::<String>::from_values(["a", "b"]);
    /// assert_eq!(choices.real_len(), 2);
    /// ```
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Entry>,
    {
        let mut collection = Self {
            choices: values.into_iter().map(Into::into).collect(),
            real_indices: Vec::new(),
            renderer: None,
        };
        collection.refresh();
        tracing::debug!(
            len = collection.len(),
            real_len = collection.real_len(),
            "created choices"
        );
        collection
    }

    /// Rebuilds the selectable view from the entries.
    fn refresh(&mut self) {
        self.real_indices = self
            .choices
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_separator())
            .map(|(index, _)| index)
            .collect();
    }

    /// Returns the number of entries, separators included.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if the collection holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Returns the number of selectable entries.
    pub fn real_len(&self) -> usize {
        self.real_indices.len()
    }

    /// Always fails: the selectable count is derived from the entries.
    ///
    /// Change the entries with [`push`](Self::push), [`truncate`](Self::truncate)
    /// or [`grow`](Self::grow) instead.
    ///
    /// # Errors
    ///
    /// Returns [`ChoicesError::InvariantViolation`] for every input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::Choices;
    /// use bubbletea_choices::ChoicesError;
    ///
    /// let mut choices = Choices::new(["a", "b"]);
    /// assert!(matches!(
    ///     choices.set_real_len(1),
    ///     Err(ChoicesError::InvariantViolation { field: "real_len", attempted: 1 })
    /// ));
    /// assert_eq!(choices.real_len(), 2);
    /// ```
    pub fn set_real_len(&mut self, len: usize) -> Result<()> {
        Err(ChoicesError::InvariantViolation {
            field: "real_len",
            attempted: len,
        })
    }

    /// Returns the entry at a raw index, or `None` when the selector is out
    /// of range or not an integer index.
    pub fn get<S: Selector>(&self, selector: S) -> Option<&Entry> {
        selector
            .to_index()
            .and_then(|index| self.choices.get(index))
    }

    /// Returns the selectable entry at a real index, or `None` when the
    /// selector is out of range or not an integer index.
    pub fn get_choice<S: Selector>(&self, selector: S) -> Option<&Choice> {
        selector
            .to_index()
            .and_then(|index| self.raw_index_of(index))
            .and_then(|raw| self.choices.get(raw))
            .and_then(Entry::as_choice)
    }

    /// Translates a real index into the raw index of the same entry.
    pub fn raw_index_of(&self, real: usize) -> Option<usize> {
        self.real_indices.get(real).copied()
    }

    /// Translates a raw index into a real index.
    ///
    /// Returns `None` for separators and out-of-range indices.
    pub fn real_index_of(&self, raw: usize) -> Option<usize> {
        self.real_indices.binary_search(&raw).ok()
    }

    /// Appends values as choices and returns the updated entries.
    ///
    /// Every value is wrapped into a [`Choice`]; this path never creates a
    /// separator, so both [`len`](Self::len) and [`real_len`](Self::real_len)
    /// grow by the number of values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::{Choices, Entry, Separator};
    ///
    /// let mut choices = Choices::new(vec![Entry::from("a"), Separator::default().into()]);
    /// let entries = choices.push(["b", "c"]);
    /// assert_eq!(entries.len(), 4);
    /// assert_eq!(choices.real_len(), 3);
    /// ```
    pub fn push<I, T>(&mut self, values: I) -> &[Entry]
    where
        I: IntoIterator<Item = T>,
        T: Into<Choice>,
    {
        let before = self.choices.len();
        self.choices
            .extend(values.into_iter().map(|value| Entry::Choice(value.into())));
        self.refresh();
        tracing::debug!(
            added = self.choices.len() - before,
            len = self.len(),
            real_len = self.real_len(),
            "pushed choices"
        );
        &self.choices
    }

    /// Shortens the collection to `len` entries.
    ///
    /// Has no effect when `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.choices.len() {
            return;
        }
        self.choices.truncate(len);
        self.refresh();
        tracing::debug!(len, real_len = self.real_len(), "truncated choices");
    }

    /// Extends the collection to `len` entries with blank separators.
    ///
    /// Padding is never selectable, so the selectable count is unchanged.
    /// Has no effect when `len` is not larger than the current length.
    pub fn grow(&mut self, len: usize) {
        if len <= self.choices.len() {
            return;
        }
        self.choices
            .resize_with(len, || Entry::Separator(Separator::new("")));
        self.refresh();
        tracing::debug!(len, real_len = self.real_len(), "grew choices");
    }

    /// Sets the number of entries, truncating or padding as needed.
    pub fn set_len(&mut self, len: usize) {
        if len < self.choices.len() {
            self.truncate(len);
        } else {
            self.grow(len);
        }
    }
}

impl<A> Clone for Choices<A> {
    fn clone(&self) -> Self {
        Self {
            choices: self.choices.clone(),
            real_indices: self.real_indices.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<A> Default for Choices<A> {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            real_indices: Vec::new(),
            renderer: None,
        }
    }
}

impl<A> fmt::Debug for Choices<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choices")
            .field("choices", &self.choices)
            .field("real_indices", &self.real_indices)
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl<A, T: Into<Entry>> FromIterator<T> for Choices<A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
