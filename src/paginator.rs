//! Circular pagination for rendered choice lists.
//!
//! This component cuts a long, newline-delimited rendering down to a fixed
//! number of lines around the cursor. The rendering is repeated three times
//! back to back so that the window never runs off either end, which gives
//! the list an endless, wrap-around look when scrolling.
//!
//! The paginator keeps no scroll state: every call re-renders and slices
//! from scratch, so the window can never drift away from the data it shows.

/// Number of lines shown by a paginated list unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Distance, in lines, between the window top and the cursor row.
const POINTER_OFFSET: isize = 3;

/// How many copies of the rendering the window slides over.
const COPIES: usize = 3;

/// A stateless circular window over rendered output.
///
/// # Examples
///
/// ```rust
/// use bubbletea_choices::paginator::Paginator;
///
/// let output = (0..10).map(|i| format!("L{}", i)).collect::<Vec<_>>().join("\n");
/// let paginator = Paginator::new();
///
/// assert_eq!(paginator.window(output.clone(), 0), "L7\nL8\nL9\nL0\nL1\nL2\nL3");
/// assert_eq!(paginator.window(output, 5), "L2\nL3\nL4\nL5\nL6\nL7\nL8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// The maximum number of lines in the window.
    pub page_size: usize,
}

impl Default for Paginator {
    /// Creates a paginator showing [`DEFAULT_PAGE_SIZE`] lines.
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    /// Creates a paginator with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern).
    ///
    /// The minimum value is 1; any value less than 1 will be clamped to 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_choices::paginator::Paginator;
    ///
    /// assert_eq!(Paginator::new().with_page_size(4).page_size, 4);
    /// assert_eq!(Paginator::new().with_page_size(0).page_size, 1);
    /// ```
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Sets the page size (mutable version), clamped to at least 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Returns the index of the first visible line in the tripled rendering.
    ///
    /// The cursor row sits `POINTER_OFFSET` lines below the window top once
    /// the list is long enough; the result never goes below zero.
    fn top_index(pointer: isize, line_count: usize) -> usize {
        let line_count = isize::try_from(line_count).unwrap_or(isize::MAX);
        let top = pointer
            .saturating_add(line_count)
            .saturating_sub(POINTER_OFFSET)
            .max(0);
        usize::try_from(top).unwrap_or(0)
    }

    /// Slices `output` down to the window for `pointer`.
    ///
    /// Output that already fits within the page size is returned unchanged,
    /// including empty output. Otherwise exactly `page_size` lines are
    /// returned, unless the page is taller than three full copies of the
    /// output or the pointer lies far past the end, in which case whatever
    /// remains of the tripled lines is returned.
    pub fn window(&self, output: String, pointer: isize) -> String {
        if output.split('\n').count() <= self.page_size {
            return output;
        }

        let lines: Vec<&str> = output.split('\n').collect();
        let top = Self::top_index(pointer, lines.len());
        tracing::trace!(
            pointer,
            lines = lines.len(),
            top,
            page_size = self.page_size,
            "paginating output"
        );

        lines
            .iter()
            .cycle()
            .take(lines.len() * COPIES)
            .skip(top)
            .take(self.page_size)
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Wraps a render function so its output is paginated.
    ///
    /// The returned function forwards the pointer and any extra arguments
    /// to `render` unchanged on every call and slices the result with
    /// [`Paginator::window`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_choices::paginator::Paginator;
    ///
    /// let render = |pointer: isize, prefix: &str| {
    ///     (0..10)
    ///         .map(|i| if i == pointer { format!("{}L{}", prefix, i) } else { format!("L{}", i) })
    ///         .collect::<Vec<_>>()
    ///         .join("\n")
    /// };
    ///
    /// let paginated = Paginator::new().with_page_size(5).wrap(render);
    /// assert_eq!(paginated(1, "> "), "L8\nL9\nL0\n> L1\nL2");
    /// assert_eq!(paginated(4, "> "), "L1\nL2\nL3\n> L4\nL5");
    /// ```
    pub fn wrap<F, A>(self, render: F) -> impl Fn(isize, A) -> String
    where
        F: Fn(isize, A) -> String,
    {
        move |pointer: isize, args: A| self.window(render(pointer, args), pointer)
    }
}

/// Wraps `render` in a [`Paginator`] showing `page_size` lines.
///
/// Shorthand for `Paginator::new().with_page_size(page_size).wrap(render)`.
pub fn paginate<F, A>(render: F, page_size: usize) -> impl Fn(isize, A) -> String
where
    F: Fn(isize, A) -> String,
{
    Paginator::new().with_page_size(page_size).wrap(render)
}
