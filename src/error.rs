//! Error types for HTML table rendering.
//!
//! Rendering either produces the complete markup or one of the errors below;
//! there is no partial output.
//!
//! ## Error Categories
//!
//! - **Unsupported shape**: the top-level value is neither a struct nor a sequence of structs
//! - **Null element**: a `None` element inside the top-level sequence
//! - **Unsupported field**: a field holds a collection, a map, or an enum variant with data
//! - **Nesting too deep**: nested structs exceed [`TableOptions::max_depth`](crate::TableOptions)
//! - **I/O errors**: writing the rendered table to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_html_table::{to_string, Error};
//!
//! let result = to_string(&42);
//! assert!(matches!(result, Err(Error::UnsupportedShape { .. })));
//!
//! if let Err(err) = result {
//!     assert_eq!(
//!         err.to_string(),
//!         "expected a struct or a slice of structs but got integer"
//!     );
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The shape of a value as seen by the renderer.
///
/// Used in error messages to name what was found where a struct was expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Bool,
    Integer,
    Float,
    Char,
    String,
    Bytes,
    Null,
    Unit,
    /// An `Option` inside an `Option`.
    NestedOption,
    Sequence,
    Tuple,
    Map,
    /// An enum variant carrying data (newtype, tuple or struct variant).
    Variant,
    /// A sequence whose elements have the given shape.
    SequenceOf(Box<Shape>),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => f.write_str("bool"),
            Shape::Integer => f.write_str("integer"),
            Shape::Float => f.write_str("float"),
            Shape::Char => f.write_str("char"),
            Shape::String => f.write_str("string"),
            Shape::Bytes => f.write_str("bytes"),
            Shape::Null => f.write_str("null"),
            Shape::Unit => f.write_str("unit"),
            Shape::NestedOption => f.write_str("nested option"),
            Shape::Sequence => f.write_str("sequence"),
            Shape::Tuple => f.write_str("tuple"),
            Shape::Map => f.write_str("map"),
            Shape::Variant => f.write_str("enum variant"),
            Shape::SequenceOf(inner) => write!(f, "sequence of {}", inner),
        }
    }
}

/// Represents all possible errors that can occur while rendering an HTML table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The top-level value is not a struct or a sequence of structs
    #[error("expected a struct or a slice of structs but got {shape}")]
    UnsupportedShape { shape: Shape },

    /// An element of the top-level sequence is `None`
    #[error("element {index} of the sequence is null, expected a struct")]
    NullElement { index: usize },

    /// A field holds a value the renderer does not lay out as a table cell
    #[error("field `{field}` holds a {shape}, which cannot be rendered as a table cell")]
    UnsupportedField { field: &'static str, shape: Shape },

    /// Nested structs go deeper than the configured limit
    #[error("nesting too deep: more than {limit} nested tables")]
    NestingTooDeep { limit: usize },

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the top-level classification error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html_table::{Error, Shape};
    ///
    /// let err = Error::unsupported_shape(Shape::Map);
    /// assert!(err.to_string().ends_with("got map"));
    /// ```
    pub fn unsupported_shape(shape: Shape) -> Self {
        tracing::debug!(%shape, "rejecting top-level value");
        Error::UnsupportedShape { shape }
    }

    /// Creates an error for a field whose value is a collection, a map or a data-carrying variant.
    pub fn unsupported_field(field: &'static str, shape: Shape) -> Self {
        Error::UnsupportedField { field, shape }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
