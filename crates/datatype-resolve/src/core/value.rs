//! Scalar values for literal rendering and value-based type lookup.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::traits::Dialect;

/// Scalar value handed to a resolved type for SQL literal rendering, or to
/// the resolver for value-based type lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// NULL; carries no type information.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 16-bit signed integer (smallint).
    I16(i16),

    /// 32-bit signed integer (int).
    I32(i32),

    /// 64-bit signed integer (bigint).
    I64(i64),

    /// 32-bit floating point (float/real).
    F32(f32),

    /// 64-bit floating point (double precision).
    F64(f64),

    /// Exact decimal value.
    Decimal(Decimal),

    /// Text/string data.
    Text(String),

    /// Binary data.
    Bytes(Vec<u8>),

    /// UUID/GUID value.
    Uuid(Uuid),

    /// Date only.
    Date(NaiveDate),

    /// Time only.
    Time(NaiveTime),

    /// Date and time without timezone.
    DateTime(NaiveDateTime),
}

impl ScalarValue {
    /// Canonical type name this value resolves under.
    ///
    /// `Null` maps to a name no implementation registers, so it degrades to
    /// the fallback representation.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "unknown",
            ScalarValue::Bool(_) => "boolean",
            ScalarValue::I16(_) => "smallint",
            ScalarValue::I32(_) => "int",
            ScalarValue::I64(_) => "bigint",
            ScalarValue::F32(_) => "float",
            ScalarValue::F64(_) => "double",
            ScalarValue::Decimal(_) => "decimal",
            ScalarValue::Text(_) => "varchar",
            ScalarValue::Bytes(_) => "blob",
            ScalarValue::Uuid(_) => "uuid",
            ScalarValue::Date(_) => "date",
            ScalarValue::Time(_) => "time",
            ScalarValue::DateTime(_) => "datetime",
        }
    }

    /// Default SQL literal rendering, delegating boolean and string forms to
    /// the dialect.
    pub fn render(&self, dialect: &dyn Dialect) -> String {
        match self {
            ScalarValue::Null => "NULL".to_string(),
            ScalarValue::Bool(value) => dialect.boolean_literal(*value),
            ScalarValue::I16(value) => value.to_string(),
            ScalarValue::I32(value) => value.to_string(),
            ScalarValue::I64(value) => value.to_string(),
            ScalarValue::F32(value) => value.to_string(),
            ScalarValue::F64(value) => value.to_string(),
            ScalarValue::Decimal(value) => value.to_string(),
            ScalarValue::Text(value) => dialect.quote_literal(value),
            ScalarValue::Bytes(value) => {
                let mut out = String::with_capacity(value.len() * 2 + 3);
                out.push_str("X'");
                for byte in value {
                    out.push_str(&format!("{:02X}", byte));
                }
                out.push('\'');
                out
            }
            ScalarValue::Uuid(value) => format!("'{}'", value),
            ScalarValue::Date(value) => format!("'{}'", value.format("%Y-%m-%d")),
            ScalarValue::Time(value) => format!("'{}'", value.format("%H:%M:%S")),
            ScalarValue::DateTime(value) => {
                format!("'{}'", value.format("%Y-%m-%d %H:%M:%S"))
            }
        }
    }
}
