use std::fmt;

use crate::analysis::AnalysisError;
use crate::wire::{TPrimitiveType, TScalarType, TTypeDesc};

pub const MAX_CHAR_LENGTH: u32 = 255;
pub const MAX_VARCHAR_LENGTH: u32 = 65533;
pub const MAX_DECIMAL_PRECISION: u32 = 27;

/// Logical SQL scalar type.
///
/// Equality is structural: `Varchar { len: 64 }` equals another
/// `Varchar { len: 64 }` and differs from `Varchar { len: 16 }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Null,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    LargeInt,
    Float,
    Double,
    Date,
    DateTime,
    Decimal { precision: u32, scale: u32 },
    Char { len: u32 },
    Varchar { len: u32 },
    Hll,
}

impl ScalarType {
    pub fn varchar(len: u32) -> Self {
        ScalarType::Varchar { len }
    }

    pub fn char(len: u32) -> Self {
        ScalarType::Char { len }
    }

    pub fn decimal(precision: u32, scale: u32) -> Self {
        ScalarType::Decimal { precision, scale }
    }

    /// Check the type parameters against the engine limits.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        match *self {
            ScalarType::Char { len } if len == 0 || len > MAX_CHAR_LENGTH => Err(AnalysisError::InvalidType(
                format!("CHAR length must be in 1..={MAX_CHAR_LENGTH}, got {len}"),
            )),
            ScalarType::Varchar { len } if len == 0 || len > MAX_VARCHAR_LENGTH => Err(AnalysisError::InvalidType(
                format!("VARCHAR length must be in 1..={MAX_VARCHAR_LENGTH}, got {len}"),
            )),
            ScalarType::Decimal { precision, scale } => {
                if precision == 0 || precision > MAX_DECIMAL_PRECISION {
                    Err(AnalysisError::InvalidType(format!(
                        "DECIMAL precision must be in 1..={MAX_DECIMAL_PRECISION}, got {precision}"
                    )))
                } else if scale > precision {
                    Err(AnalysisError::InvalidType(format!(
                        "DECIMAL scale {scale} exceeds precision {precision}"
                    )))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    pub fn primitive_type(&self) -> TPrimitiveType {
        match self {
            ScalarType::Null => TPrimitiveType::NullType,
            ScalarType::Boolean => TPrimitiveType::Boolean,
            ScalarType::TinyInt => TPrimitiveType::Tinyint,
            ScalarType::SmallInt => TPrimitiveType::Smallint,
            ScalarType::Int => TPrimitiveType::Int,
            ScalarType::BigInt => TPrimitiveType::Bigint,
            ScalarType::LargeInt => TPrimitiveType::Largeint,
            ScalarType::Float => TPrimitiveType::Float,
            ScalarType::Double => TPrimitiveType::Double,
            ScalarType::Date => TPrimitiveType::Date,
            ScalarType::DateTime => TPrimitiveType::Datetime,
            ScalarType::Decimal { .. } => TPrimitiveType::Decimal,
            ScalarType::Char { .. } => TPrimitiveType::Char,
            ScalarType::Varchar { .. } => TPrimitiveType::Varchar,
            ScalarType::Hll => TPrimitiveType::Hll,
        }
    }

    /// Wire description. Parameters saturate at `i32::MAX`, so an unvalidated
    /// type never produces a negative length, precision or scale.
    pub fn to_wire(&self) -> TTypeDesc {
        let mut scalar = TScalarType::of(self.primitive_type());
        match *self {
            ScalarType::Char { len } | ScalarType::Varchar { len } => scalar.len = Some(wire_param(len)),
            ScalarType::Decimal { precision, scale } => {
                scalar.precision = Some(wire_param(precision));
                scalar.scale = Some(wire_param(scale));
            }
            _ => {}
        }
        TTypeDesc::scalar(scalar)
    }
}

fn wire_param(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Null => write!(f, "NULL_TYPE"),
            ScalarType::Boolean => write!(f, "BOOLEAN"),
            ScalarType::TinyInt => write!(f, "TINYINT"),
            ScalarType::SmallInt => write!(f, "SMALLINT"),
            ScalarType::Int => write!(f, "INT"),
            ScalarType::BigInt => write!(f, "BIGINT"),
            ScalarType::LargeInt => write!(f, "LARGEINT"),
            ScalarType::Float => write!(f, "FLOAT"),
            ScalarType::Double => write!(f, "DOUBLE"),
            ScalarType::Date => write!(f, "DATE"),
            ScalarType::DateTime => write!(f, "DATETIME"),
            ScalarType::Decimal { precision, scale } => write!(f, "DECIMAL({precision},{scale})"),
            ScalarType::Char { len } => write!(f, "CHAR({len})"),
            ScalarType::Varchar { len } => write!(f, "VARCHAR({len})"),
            ScalarType::Hll => write!(f, "HLL"),
        }
    }
}
