//! Iteration and attribute queries over a collection.
//!
//! Attribute queries (`filter_where`, `pluck`) only ever see selectable
//! entries. The plain iteration primitives (`iter`, `for_each`, `filter`)
//! walk every entry in raw order, separators included.

use super::model::Choices;
use super::types::{Attr, AttrValue, Choice, Entry};

/// A non-empty set of attribute constraints for [`Choices::filter_where`].
///
/// A clause starts with one constraint and can be extended with
/// [`and`](Self::and). A choice matches when every listed attribute exists
/// and equals the given value, type included.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::{Choice, WhereClause};
///
/// let clause = WhereClause::new("value", "large").and("price", 12);
/// let choice = Choice::new("Large").with_value("large").with_attr("price", 12);
///
/// assert!(clause.matches(&choice));
/// assert!(!clause.matches(&Choice::new("large")));
/// assert!(!clause.matches(&choice.clone().with_attr("price", "12")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    constraints: Vec<(String, AttrValue)>,
}

impl WhereClause {
    /// Creates a clause requiring `key` to equal `value`.
    pub fn new(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            constraints: vec![(key.into(), value.into())],
        }
    }

    /// Adds another required attribute (builder pattern).
    pub fn and(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.constraints.push((key.into(), value.into()));
        self
    }

    /// Returns true if `choice` satisfies every constraint.
    pub fn matches(&self, choice: &Choice) -> bool {
        self.constraints
            .iter()
            .all(|(key, value)| choice.attr(key) == Some(value.as_attr()))
    }
}

impl<A> Choices<A> {
    /// Iterates over every entry in raw order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.choices.iter()
    }

    /// Iterates over the selectable entries in real order.
    pub fn real_iter(&self) -> impl Iterator<Item = &Choice> + '_ {
        self.real_indices
            .iter()
            .filter_map(move |&raw| self.choices.get(raw).and_then(Entry::as_choice))
    }

    /// Calls `f` with the raw index and entry of every entry, in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &Entry),
    {
        for (index, entry) in self.choices.iter().enumerate() {
            f(index, entry);
        }
    }

    /// Returns the entries accepted by `predicate`, separators included, in
    /// raw order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Entry>
    where
        P: FnMut(&Entry) -> bool,
    {
        self.choices.iter().filter(|entry| predicate(entry)).collect()
    }

    /// Returns the selectable entries matching every attribute of `clause`.
    ///
    /// Separators never match, whatever they display.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::{Choices, Entry, Separator, WhereClause};
    ///
    /// let choices = Choices::new(vec![
    ///     Entry::from("x"),
    ///     Separator::new("x").into(),
    ///     Entry::from("y"),
    ///     Entry::from("x"),
    /// ]);
    ///
    /// let found = choices.filter_where(&WhereClause::new("value", "x"));
    /// assert_eq!(found.len(), 2);
    /// ```
    pub fn filter_where(&self, clause: &WhereClause) -> Vec<&Choice> {
        self.real_iter()
            .filter(|choice| clause.matches(choice))
            .collect()
    }

    /// Returns one attribute of every selectable entry, in real order.
    ///
    /// Entries lacking the attribute contribute `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::{Attr, Choice, Choices, Entry, Separator};
    ///
    /// let choices = Choices::new(vec![
    ///     Entry::from(Choice::new("Small").with_attr("price", 8)),
    ///     Separator::default().into(),
    ///     Entry::from("Medium"),
    /// ]);
    ///
    /// assert_eq!(
    ///     choices.pluck("name"),
    ///     vec![Some(Attr::Text("Small")), Some(Attr::Text("Medium"))]
    /// );
    /// assert_eq!(choices.pluck("price"), vec![Some(Attr::Int(8)), None]);
    /// ```
    pub fn pluck(&self, attr: &str) -> Vec<Option<Attr<'_>>> {
        self.real_iter().map(|choice| choice.attr(attr)).collect()
    }
}

impl<'a, A> IntoIterator for &'a Choices<A> {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
