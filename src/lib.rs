//! # serde_html_table
//!
//! A Serde-compatible serializer that renders structs, and slices of structs, as
//! HTML tables ready to paste into an email body or any other rich-text document.
//!
//! ## Key Features
//!
//! - **Email-friendly**: Inline presentation attributes only, full-width tables, no stylesheet
//! - **Nested records**: Struct fields and `Option<Struct>` fields render as nested tables
//! - **Always escaped**: Field names and values are HTML-escaped before emission
//! - **Serde Compatible**: Works with any type deriving `Serialize`; field order is declaration order
//! - **Strict**: Shapes that cannot be laid out as a table are rejected, never approximated
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_html_table = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### A Single Struct
//!
//! ```rust
//! use serde::Serialize;
//! use serde_html_table::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     email: String,
//! }
//!
//! let user = User {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! };
//!
//! let html = to_string(&user).unwrap();
//! assert!(html.contains(">name</th>"));
//! assert!(html.contains(">alice@example.com</td>"));
//! ```
//!
//! ### A Slice of Structs
//!
//! Every element gets its own header row followed by its data row:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_html_table::to_string;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     sku: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { sku: "W-1".to_string(), price: 9.99 },
//!     Product { sku: "G-2".to_string(), price: 14.99 },
//! ];
//!
//! let html = to_string(&products).unwrap();
//! assert_eq!(html.matches(">sku</th>").count(), 2);
//! ```
//!
//! ### Rejected Input
//!
//! ```rust
//! use serde_html_table::to_string;
//!
//! let err = to_string(&42).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "expected a struct or a slice of structs but got integer"
//! );
//! ```
//!
//! ## What Goes Where
//!
//! | Field value | Cell content |
//! |-------------|--------------|
//! | bool, number, char, string, unit variant | escaped text |
//! | struct | nested table |
//! | `Some(struct)` | nested table |
//! | `None`, `()` | empty cell |
//! | `Vec`, tuple, map, bytes, data-carrying variant | error |
//!
//! At the top level, a sequence is checked element by element. An empty
//! sequence has no elements to check, so it renders as an empty outer table
//! whatever its element type: `Vec::<i32>::new()` is accepted just like
//! `Vec::<User>::new()`.
//!
//! See [`layout`] for the exact markup.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting depth is bounded by [`TableOptions::max_depth`]
//! - No partial output: a failed render returns an error and nothing else, and
//!   leaves a [`Serializer`]'s buffer as it was before the call
//! - Empty sequences are not type-checked (see above)

pub mod error;
pub mod layout;
pub mod markup;
pub mod options;
pub mod ser;

pub use error::{Error, Result, Shape};
pub use options::TableOptions;
pub use ser::Serializer;

use serde::Serialize;
use std::io;

/// Render a struct, or a sequence of structs, as an HTML table.
///
/// # Examples
///
/// ```rust
/// use serde_html_table::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let html = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert!(html.starts_with("<table"));
/// ```
///
/// # Errors
///
/// Returns an error if the value is not a struct or a sequence of structs, or if
/// one of its fields holds a shape that cannot be rendered as a cell.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, TableOptions::default())
}

/// Render a value as an HTML table with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_html_table::{to_string_with_options, Error, TableOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Address { city: String }
///
/// #[derive(Serialize)]
/// struct Customer { name: String, address: Address }
///
/// let customer = Customer {
///     name: "Alice".to_string(),
///     address: Address { city: "Lisbon".to_string() },
/// };
///
/// let options = TableOptions::new().with_max_depth(0);
/// let result = to_string_with_options(&customer, options);
/// assert!(matches!(result, Err(Error::NestingTooDeep { limit: 0 })));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: TableOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Render a value as an HTML table into a writer.
///
/// Nothing is written when rendering fails.
///
/// # Examples
///
/// ```rust
/// use serde_html_table::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert!(buffer.starts_with(b"<table"));
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, TableOptions::default())
}

/// Render a value as an HTML table into a writer with custom options.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: TableOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let html = to_string_with_options(value, options)?;
    writer
        .write_all(html.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
