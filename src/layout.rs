//! HTML Table Layout
//!
//! This module documents the markup produced by this library. The layout is
//! fixed; byte-for-byte stable output is part of the public contract, so that
//! rendered tables can be compared, cached and diffed.
//!
//! # Overview
//!
//! One call produces exactly one outer `<table>`. Each struct rendered into it
//! contributes a *row pair*: a header row naming the fields, then a data row
//! holding their values.
//!
//! ## Design Philosophy
//!
//! - **Email first**: styling is inline, because many mail clients drop `<style>` blocks
//! - **Self-describing rows**: the header row is repeated for every struct, so a
//!   row pair can be read on its own
//! - **No guessing**: values that have no obvious cell representation are errors
//!
//! # Outer Table
//!
//! ```text
//! <table border="0" cellpadding="5" cellspacing="0" style="border-collapse: collapse; width: 100%;">
//! ...row pairs...
//! </table>
//! ```
//!
//! The opening tag is followed by a newline. The closing tag is the last thing
//! in the output, with no trailing newline.
//!
//! # Row Pairs
//!
//! For `struct User { name: String, email: String }`:
//!
//! ```text
//! <tr style="background-color: #f8f8f8;">
//! <th style="border: 1px solid #ddd; padding: 5px;">name</th><th style="border: 1px solid #ddd; padding: 5px;">email</th></tr>
//! <tr style="background-color: #ffffff;">
//! <td style="border: 1px solid #ddd; padding: 5px;">Alice</td><td style="border: 1px solid #ddd; padding: 5px;">alice@example.com</td></tr>
//! ```
//!
//! **Rules**:
//! - Each row opening tag is followed by a newline; cells follow each other with
//!   no separator; each `</tr>` is followed by a newline
//! - Header cells hold the field names as the `Serialize` impl reports them, in
//!   declaration order. `#[serde(rename)]` changes the name, `#[serde(skip_serializing)]`
//!   hides the field
//! - Headers are computed per struct value. A field under
//!   `#[serde(skip_serializing_if = "...")]` appears only in the row pairs of
//!   the elements where it was serialized
//! - A struct without fields produces an empty header row and an empty data row
//!
//! # Top-Level Input
//!
//! | Input | Output |
//! |-------|--------|
//! | struct | outer table with one row pair |
//! | unit struct | outer table with one empty row pair |
//! | `Vec`, slice or array of structs | outer table with one row pair per element, in order |
//! | empty `Vec` (any element type) | outer table with no rows |
//! | `Some(x)` | same as `x` (one level only) |
//! | `None` | error |
//! | sequence containing `None` | error naming the element index |
//! | anything else | error: `expected a struct or a slice of structs but got <shape>` |
//!
//! # Cells
//!
//! | Field value | Cell content |
//! |-------------|--------------|
//! | `bool` | `true` / `false` |
//! | integers, floats | `Display` form (`42`, `2.5`, `1`) |
//! | `char`, `String`, `&str` | the text |
//! | unit enum variant | the variant name |
//! | `None`, `()` | nothing |
//! | `Some(x)` | same as `x` |
//! | struct, `Some(struct)` | nested table |
//! | `Vec`, slice, tuple, map, bytes | error |
//! | enum variant with data | error |
//!
//! All text (field names and values) is escaped:
//!
//! | Character | Escaped |
//! |-----------|---------|
//! | `&` | `&amp;` |
//! | `<` | `&lt;` |
//! | `>` | `&gt;` |
//! | `'` | `&#39;` |
//! | `"` | `&#34;` |
//!
//! # Nested Tables
//!
//! A nested table uses the same opening tag as the outer table, without the
//! newline after it, and holds exactly one row pair:
//!
//! ```text
//! <td style="border: 1px solid #ddd; padding: 5px;"><table border="0" ...><tr ...>
//! ...
//! </tr>
//! </table></td>
//! ```
//!
//! Nesting is limited by [`TableOptions::max_depth`](crate::TableOptions), 32 by default.
