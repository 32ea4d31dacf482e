//! Configuration options for HTML table rendering.
//!
//! The presentation (borders, colors, padding) is fixed; see [`crate::markup`].
//! The only tunable is how deep nested structs may go.
//!
//! ## Examples
//!
//! ```rust
//! use serde_html_table::{to_string_with_options, TableOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let options = TableOptions::new().with_max_depth(4);
//! let html = to_string_with_options(&Data { x: 1, y: 2 }, options).unwrap();
//! assert!(html.starts_with("<table"));
//! ```

/// Default limit on nested tables below the outer table.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration options for HTML table rendering.
///
/// # Examples
///
/// ```rust
/// use serde_html_table::TableOptions;
///
/// let options = TableOptions::new();
/// assert_eq!(options.max_depth, 32);
///
/// let options = TableOptions::new().with_max_depth(2);
/// assert_eq!(options.max_depth, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum number of tables nested below the outer table.
    pub max_depth: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TableOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    ///
    /// A struct field holding a struct counts as one level. With a limit of `0`
    /// only flat structs can be rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html_table::TableOptions;
    ///
    /// let flat_only = TableOptions::new().with_max_depth(0);
    /// assert_eq!(flat_only.max_depth, 0);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
