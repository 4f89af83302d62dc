//! Render wiring for choice collections.
//!
//! This module handles turning a collection into text:
//! - `set_render` installs a caller render function, optionally paginated
//! - `render` dispatches to it, or to the default list renderer
//! - `list` is the default renderer, styled by `ChoiceStyles`

use super::model::Choices;
use super::types::Entry;
use crate::paginator::Paginator;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::Arc;

/// A function rendering a collection at a pointer (a real index), given
/// the extra arguments passed to [`Choices::render`].
pub type RenderFn<A = ()> = Arc<dyn Fn(&Choices<A>, isize, A) -> String + Send + Sync>;

/// Options accepted by [`Choices::set_render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pass the output through a circular [`Paginator`] window.
    pub paginated: bool,
}

/// The installed render function and the window cutting its output.
pub(crate) struct Renderer<A> {
    render: RenderFn<A>,
    paginator: Option<Paginator>,
}

impl<A> Renderer<A> {
    fn render(&self, choices: &Choices<A>, pointer: isize, args: A) -> String {
        let render = |pointer: isize, args: A| (self.render)(choices, pointer, args);
        match self.paginator {
            Some(paginator) => paginator.wrap(render)(pointer, args),
            None => render(pointer, args),
        }
    }
}

impl<A> Clone for Renderer<A> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
            paginator: self.paginator,
        }
    }
}

impl<A> fmt::Debug for Renderer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("paginator", &self.paginator)
            .finish_non_exhaustive()
    }
}

/// Styles used by the default list renderer.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::{list, ChoiceStyles, Choices};
///
/// let mut styles = ChoiceStyles::default();
/// styles.pointer = ">".to_string();
///
/// let choices = Choices::new(["a", "b"]);
/// let output = list(&choices, 1, &styles);
/// assert!(output.contains("> b"));
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceStyles {
    /// Glyph drawn in front of the selected choice.
    pub pointer: String,
    /// Style of unselected choices.
    pub normal: Style,
    /// Style of the selected choice, pointer included.
    pub selected: Style,
    /// Style of separator lines.
    pub separator: Style,
}

impl Default for ChoiceStyles {
    fn default() -> Self {
        Self {
            pointer: "❯".to_string(),
            normal: Style::new(),
            selected: Style::new().foreground(Color::from("6")),
            separator: Style::new().faint(true),
        }
    }
}

/// Renders every entry on its own line.
///
/// Separators are indented by two columns. Choices are prefixed by the
/// pointer glyph when their real index equals `pointer` and by two spaces
/// otherwise. No trailing newline is written.
///
/// # Examples
///
/// ```
/// use bubbletea_choices::choices::{list, ChoiceStyles, Choices, Entry, Separator};
/// use lipgloss_extras::lipgloss;
///
/// let choices = Choices::new(vec![
///     Entry::from("Tea"),
///     Separator::new("--").into(),
///     Entry::from("Coffee"),
/// ]);
///
/// let output = lipgloss::strip_ansi(&list(&choices, 1, &ChoiceStyles::default()));
/// assert_eq!(output, "  Tea\n  --\n❯ Coffee");
/// ```
pub fn list<A>(choices: &Choices<A>, pointer: isize, styles: &ChoiceStyles) -> String {
    let selected = usize::try_from(pointer).ok();
    let mut real = 0;
    choices
        .iter()
        .map(|entry| match entry {
            Entry::Separator(separator) => {
                format!("  {}", styles.separator.render(separator.line()))
            }
            Entry::Choice(choice) => {
                let line = if Some(real) == selected {
                    styles
                        .selected
                        .render(&format!("{} {}", styles.pointer, choice.name()))
                } else {
                    format!("  {}", styles.normal.render(choice.name()))
                };
                real += 1;
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl<A> Choices<A> {
    /// Installs the function used by [`render`](Self::render).
    ///
    /// With `paginated` set, the output is cut to a circular window of
    /// [`DEFAULT_PAGE_SIZE`](crate::paginator::DEFAULT_PAGE_SIZE) lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::{Choices, RenderOptions};
    ///
    /// let mut choices = Choices::new((0..10).map(|i| format!("L{}", i)));
    /// choices.set_render(
    ///     |choices: &Choices, _pointer: isize, _: ()| {
    ///         choices.iter().map(|entry| entry.to_string()).collect::<Vec<_>>().join("\n")
    ///     },
    ///     RenderOptions { paginated: true },
    /// );
    ///
    /// assert_eq!(choices.render(0, ()), "L7\nL8\nL9\nL0\nL1\nL2\nL3");
    /// ```
    pub fn set_render<F>(&mut self, render: F, options: RenderOptions)
    where
        F: Fn(&Choices<A>, isize, A) -> String + Send + Sync + 'static,
    {
        self.set_render_fn(Arc::new(render), options);
    }

    /// Installs an already shared render function.
    ///
    /// The same [`RenderFn`] can back several collections.
    pub fn set_render_fn(&mut self, render: RenderFn<A>, options: RenderOptions) {
        tracing::debug!(paginated = options.paginated, "set choices renderer");
        self.renderer = Some(Renderer {
            render,
            paginator: options.paginated.then(Paginator::new),
        });
    }

    /// Returns true if the installed renderer paginates its output.
    pub fn is_paginated(&self) -> bool {
        self.renderer
            .as_ref()
            .is_some_and(|renderer| renderer.paginator.is_some())
    }

    /// Renders the collection with the selected choice at real index `pointer`.
    ///
    /// `args` is handed to the installed render function unchanged. Without
    /// an installed renderer the unpaginated default [`list`] renderer is
    /// used and `args` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_choices::choices::{Choices, RenderOptions};
    ///
    /// let mut choices = Choices::<&'static str>::from_values(["a", "b"]);
    /// choices.set_render(
    ///     |choices: &Choices<&'static str>, pointer: isize, title: &'static str| {
    ///         let name = choices.get_choice(pointer).map(|c| c.name()).unwrap_or("-");
    ///         format!("{}: {}", title, name)
    ///     },
    ///     RenderOptions::default(),
    /// );
    ///
    /// assert_eq!(choices.render(1, "Pick"), "Pick: b");
    /// ```
    pub fn render(&self, pointer: isize, args: A) -> String {
        match &self.renderer {
            Some(renderer) => renderer.render(self, pointer, args),
            None => list(self, pointer, &ChoiceStyles::default()),
        }
    }
}
