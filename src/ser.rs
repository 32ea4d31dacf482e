//! HTML table serialization.
//!
//! This module provides the [`Serializer`] implementation that renders Rust
//! structs, and sequences of structs, as HTML tables.
//!
//! ## Overview
//!
//! Serialization happens at three levels, each with its own serde serializer:
//!
//! - **Top level** ([`Serializer`]): accepts a struct or a sequence of structs,
//!   possibly behind one `Option`, and writes the outer table
//! - **Sequence elements**: each element must be a struct; it becomes one
//!   header row plus one data row
//! - **Field values**: scalars become escaped text, structs become nested
//!   tables, `None` becomes an empty cell
//!
//! Anything the renderer cannot lay out (maps, collections inside fields, enum
//! variants with data) is rejected with an [`Error`] rather than rendered
//! approximately.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_html_table::{Serializer, TableOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut serializer = Serializer::new(TableOptions::new());
//! Point { x: 1, y: 2 }.serialize(&mut serializer).unwrap();
//!
//! let html = serializer.into_inner();
//! assert!(html.ends_with("</table>"));
//! ```

use crate::markup::{self, escape_html, TABLE_CLOSE, TABLE_OPEN};
use crate::{Error, Result, Shape, TableOptions};
use serde::ser::{self, Impossible, Serialize};
use std::fmt::Display;

/// The top-level HTML table serializer.
///
/// Writes the outer table for a struct or a sequence of structs. Created via
/// [`Serializer::new`]; the markup is taken out with [`Serializer::into_inner`].
///
/// Rows are buffered until the value has been fully serialized, so a failed
/// value leaves nothing behind in the output.
pub struct Serializer {
    output: String,
    options: TableOptions,
    resolved_option: bool,
}

impl Serializer {
    pub fn new(options: TableOptions) -> Self {
        Serializer {
            output: String::with_capacity(1024),
            options,
            resolved_option: false,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_table(&mut self, rows: &str) {
        self.output.reserve(TABLE_OPEN.len() + rows.len() + TABLE_CLOSE.len() + 1);
        self.output.push_str(TABLE_OPEN);
        self.output.push('\n');
        self.output.push_str(rows);
        self.output.push_str(TABLE_CLOSE);
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Bool))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Integer))
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Integer))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Integer))
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Integer))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Float))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Char))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::String))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Bytes))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Null))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        // Only one level of `Option` is looked through
        if self.resolved_option {
            return Err(Error::unsupported_shape(Shape::NestedOption));
        }
        self.resolved_option = true;
        let result = value.serialize(&mut *self);
        self.resolved_option = false;
        result
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Unit))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        let mut rows = String::new();
        markup::write_rows(&mut rows, &[], &[]);
        self.write_table(&rows);
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::unsupported_shape(Shape::Variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_shape(Shape::Variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer {
            ser: self,
            rows: String::new(),
            index: 0,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_shape(Shape::Variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_shape(Shape::Map))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        let record = RecordSerializer::new(self.options, 0, len);
        Ok(StructSerializer { ser: self, record })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_shape(Shape::Variant))
    }
}

/// Writes one row pair per element of a top-level sequence.
pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    rows: String,
    index: usize,
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let rows = value.serialize(ElementSerializer {
            options: self.ser.options,
            index: self.index,
            resolved_option: false,
        })?;
        self.rows.push_str(&rows);
        self.index += 1;
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        tracing::trace!(elements = self.index, "rendered sequence of structs");
        self.ser.write_table(&self.rows);
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

impl<'a> ser::SerializeTupleStruct for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        ser::SerializeSeq::end(self)
    }
}

/// Writes the single row pair of a top-level struct into the outer table.
pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
    record: RecordSerializer,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.record, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let rows = ser::SerializeStruct::end(self.record)?;
        self.ser.write_table(&rows);
        Ok(())
    }
}

/// Renders one element of a top-level sequence into its row pair.
///
/// The element must be a struct, optionally behind one `Option`. A `None`
/// element is an error, not an empty row.
struct ElementSerializer {
    options: TableOptions,
    index: usize,
    resolved_option: bool,
}

impl ElementSerializer {
    fn reject(&self, shape: Shape) -> Error {
        Error::unsupported_shape(Shape::SequenceOf(Box::new(shape)))
    }
}

impl ser::Serializer for ElementSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = RecordSerializer;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(self.reject(Shape::Bool))
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(self.reject(Shape::Integer))
    }

    fn serialize_i128(self, _v: i128) -> Result<String> {
        Err(self.reject(Shape::Integer))
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(self.reject(Shape::Integer))
    }

    fn serialize_u128(self, _v: u128) -> Result<String> {
        Err(self.reject(Shape::Integer))
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(self.reject(Shape::Float))
    }

    fn serialize_char(self, _v: char) -> Result<String> {
        Err(self.reject(Shape::Char))
    }

    fn serialize_str(self, _v: &str) -> Result<String> {
        Err(self.reject(Shape::String))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(self.reject(Shape::Bytes))
    }

    fn serialize_none(self) -> Result<String> {
        tracing::debug!(index = self.index, "null element in sequence");
        Err(Error::NullElement { index: self.index })
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        if self.resolved_option {
            return Err(self.reject(Shape::NestedOption));
        }
        value.serialize(ElementSerializer {
            resolved_option: true,
            ..self
        })
    }

    fn serialize_unit(self) -> Result<String> {
        Err(self.reject(Shape::Unit))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        let mut rows = String::new();
        markup::write_rows(&mut rows, &[], &[]);
        Ok(rows)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<String> {
        Err(self.reject(Shape::Variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(self.reject(Shape::Variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(self.reject(Shape::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(self.reject(Shape::Tuple))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.reject(Shape::Tuple))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.reject(Shape::Variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(self.reject(Shape::Map))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(RecordSerializer::new(self.options, 0, len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.reject(Shape::Variant))
    }
}

/// Collects the field names and rendered cells of one struct.
///
/// Ends with the header row and data row of that struct, without a
/// surrounding table.
struct RecordSerializer {
    options: TableOptions,
    depth: usize,
    headers: Vec<&'static str>,
    cells: Vec<String>,
}

impl RecordSerializer {
    fn new(options: TableOptions, depth: usize, len: usize) -> Self {
        RecordSerializer {
            options,
            depth,
            headers: Vec::with_capacity(len),
            cells: Vec::with_capacity(len),
        }
    }
}

impl ser::SerializeStruct for RecordSerializer {
    type Ok = String;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let cell = value.serialize(CellSerializer {
            options: self.options,
            depth: self.depth,
            field: key,
        })?;
        self.headers.push(key);
        self.cells.push(cell);
        Ok(())
    }

    fn end(self) -> Result<String> {
        let capacity = self.cells.iter().map(String::len).sum::<usize>() + 128 * self.cells.len();
        let mut rows = String::with_capacity(capacity);
        markup::write_rows(&mut rows, &self.headers, &self.cells);
        Ok(rows)
    }
}

/// Renders a struct-valued field as a complete nested table.
struct NestedTableSerializer {
    record: RecordSerializer,
}

impl ser::SerializeStruct for NestedTableSerializer {
    type Ok = String;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.record, key, value)
    }

    fn end(self) -> Result<String> {
        let rows = ser::SerializeStruct::end(self.record)?;
        let mut table = String::with_capacity(TABLE_OPEN.len() + rows.len() + TABLE_CLOSE.len());
        markup::write_nested_table(&mut table, &rows);
        Ok(table)
    }
}

/// Renders the contents of one data cell.
struct CellSerializer {
    options: TableOptions,
    depth: usize,
    field: &'static str,
}

impl CellSerializer {
    fn scalar<T: Display>(v: T) -> String {
        escape_html(&v.to_string()).into_owned()
    }

    fn nested(&self, len: usize) -> Result<RecordSerializer> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        tracing::trace!(field = self.field, depth, "opening nested table");
        Ok(RecordSerializer::new(self.options, depth, len))
    }

    fn reject(&self, shape: Shape) -> Error {
        Error::unsupported_field(self.field, shape)
    }
}

impl ser::Serializer for CellSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = NestedTableSerializer;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(Self::scalar(v))
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(escape_html(v).into_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(self.reject(Shape::Bytes))
    }

    fn serialize_none(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        let record = self.nested(0)?;
        ser::SerializeStruct::end(NestedTableSerializer { record })
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(escape_html(variant).into_owned())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(self.reject(Shape::Variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(self.reject(Shape::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(self.reject(Shape::Tuple))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.reject(Shape::Tuple))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.reject(Shape::Variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(self.reject(Shape::Map))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        let record = self.nested(len)?;
        Ok(NestedTableSerializer { record })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.reject(Shape::Variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn render<T: Serialize>(value: &T) -> Result<String> {
        let mut serializer = Serializer::new(TableOptions::new());
        value.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }

    fn cell<T: Serialize>(value: &T) -> Result<String> {
        value.serialize(CellSerializer {
            options: TableOptions::new(),
            depth: 0,
            field: "value",
        })
    }

    #[derive(Serialize)]
    struct Inner {
        a: u8,
    }

    #[test]
    fn test_cell_scalars() {
        assert_eq!(cell(&true).unwrap(), "true");
        assert_eq!(cell(&-7i32).unwrap(), "-7");
        assert_eq!(cell(&u128::MAX).unwrap(), u128::MAX.to_string());
        assert_eq!(cell(&2.5f64).unwrap(), "2.5");
        assert_eq!(cell(&1.0f64).unwrap(), "1");
        assert_eq!(cell(&'<').unwrap(), "&lt;");
        assert_eq!(cell(&"a & b").unwrap(), "a &amp; b");
        assert_eq!(cell(&()).unwrap(), "");
    }

    #[test]
    fn test_cell_options() {
        assert_eq!(cell(&None::<i32>).unwrap(), "");
        assert_eq!(cell(&Some(5)).unwrap(), "5");
        assert_eq!(cell(&None::<Inner>).unwrap(), "");
        assert!(cell(&Some(Inner { a: 1 })).unwrap().starts_with(TABLE_OPEN));
    }

    #[test]
    fn test_cell_nested_struct_is_complete_table() {
        let html = cell(&Inner { a: 9 }).unwrap();
        assert!(html.starts_with(TABLE_OPEN));
        assert!(html.ends_with(TABLE_CLOSE));
        // No newline directly after a nested table's opening tag
        assert!(!html.starts_with(&format!("{TABLE_OPEN}\n")));
        assert!(html.contains(">a</th>"));
        assert!(html.contains(">9</td>"));
    }

    #[test]
    fn test_cell_rejects_collections() {
        assert_eq!(
            cell(&vec![1, 2]).unwrap_err(),
            Error::unsupported_field("value", Shape::Sequence)
        );
        assert_eq!(
            cell(&(1, 2)).unwrap_err(),
            Error::unsupported_field("value", Shape::Tuple)
        );
        let map: std::collections::BTreeMap<String, i32> = Default::default();
        assert_eq!(
            cell(&map).unwrap_err(),
            Error::unsupported_field("value", Shape::Map)
        );
    }

    #[test]
    fn test_cell_enum_variants() {
        #[derive(Serialize)]
        enum Status {
            Active,
            Suspended(String),
        }

        assert_eq!(cell(&Status::Active).unwrap(), "Active");
        assert_eq!(
            cell(&Status::Suspended("spam".to_string())).unwrap_err(),
            Error::unsupported_field("value", Shape::Variant)
        );
    }

    #[test]
    fn test_top_level_nested_option_rejected() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
        }

        let value = Some(Some(Point { x: 1 }));
        assert_eq!(
            render(&value).unwrap_err(),
            Error::UnsupportedShape {
                shape: Shape::NestedOption
            }
        );
        assert!(render(&Some(Point { x: 1 })).is_ok());
    }

    #[test]
    fn test_sequence_element_shapes() {
        assert_eq!(
            render(&vec!["a", "b"]).unwrap_err(),
            Error::UnsupportedShape {
                shape: Shape::SequenceOf(Box::new(Shape::String))
            }
        );
        assert_eq!(
            render(&vec![vec![Inner { a: 1 }]]).unwrap_err(),
            Error::UnsupportedShape {
                shape: Shape::SequenceOf(Box::new(Shape::Sequence))
            }
        );
        assert_eq!(
            render(&vec![Some(Inner { a: 1 }), None]).unwrap_err(),
            Error::NullElement { index: 1 }
        );
    }

    #[test]
    fn test_depth_counter() {
        #[derive(Serialize)]
        struct Outer {
            inner: Inner,
        }

        let value = Outer {
            inner: Inner { a: 1 },
        };

        let mut serializer = Serializer::new(TableOptions::new().with_max_depth(0));
        assert_eq!(
            value.serialize(&mut serializer).unwrap_err(),
            Error::NestingTooDeep { limit: 0 }
        );

        let mut serializer = Serializer::new(TableOptions::new().with_max_depth(1));
        assert!(value.serialize(&mut serializer).is_ok());
    }

    #[test]
    fn test_failed_value_leaves_no_output() {
        let values = vec![Some(Inner { a: 1 }), None];

        let mut serializer = Serializer::new(TableOptions::new());
        assert_eq!(
            values.serialize(&mut serializer).unwrap_err(),
            Error::NullElement { index: 1 }
        );
        assert_eq!(serializer.into_inner(), "");
    }

    #[test]
    fn test_failed_struct_field_leaves_no_output() {
        #[derive(Serialize)]
        struct Tagged {
            a: u8,
            tags: Vec<u8>,
        }

        let mut serializer = Serializer::new(TableOptions::new());
        let value = Tagged { a: 1, tags: vec![2] };
        assert!(value.serialize(&mut serializer).is_err());
        assert_eq!(serializer.into_inner(), "");
    }

    #[test]
    fn test_serializer_reused_for_optional_values() {
        let first = Some(Inner { a: 1 });
        let second = Some(Inner { a: 2 });

        let mut serializer = Serializer::new(TableOptions::new());
        first.serialize(&mut serializer).unwrap();
        second.serialize(&mut serializer).unwrap();

        let html = serializer.into_inner();
        assert_eq!(html.matches(TABLE_OPEN).count(), 2);
        assert!(html.contains(">1</td>"));
        assert!(html.contains(">2</td>"));
    }

    #[test]
    fn test_error_does_not_poison_serializer() {
        let mut serializer = Serializer::new(TableOptions::new());
        assert!(Some(Some(Inner { a: 1 })).serialize(&mut serializer).is_err());
        Some(Inner { a: 3 }).serialize(&mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), render(&Inner { a: 3 }).unwrap());
    }
}
