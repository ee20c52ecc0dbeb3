use serde::{Deserialize, Serialize};

/// Primitive type tags as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TPrimitiveType {
    InvalidType,
    NullType,
    Boolean,
    Tinyint,
    Smallint,
    Int,
    Bigint,
    Float,
    Double,
    Date,
    Datetime,
    Binary,
    Decimal,
    Char,
    Largeint,
    Varchar,
    Hll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TScalarType {
    #[serde(rename = "type")]
    pub ty: TPrimitiveType,
    /// Only set for CHAR / VARCHAR / HLL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<i32>,
    /// Only set for DECIMAL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<i32>,
}

impl TScalarType {
    pub fn of(ty: TPrimitiveType) -> Self {
        Self { ty, len: None, precision: None, scale: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TTypeNodeType {
    Scalar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TTypeNode {
    #[serde(rename = "type")]
    pub node_type: TTypeNodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar_type: Option<TScalarType>,
}

/// Flattened, pre-order type description. Scalars are a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TTypeDesc {
    pub types: Vec<TTypeNode>,
}

impl TTypeDesc {
    pub fn scalar(scalar: TScalarType) -> Self {
        Self {
            types: vec![TTypeNode { node_type: TTypeNodeType::Scalar, scalar_type: Some(scalar) }],
        }
    }

    /// The scalar carried by a single-node description, if that is what this is.
    pub fn as_scalar(&self) -> Option<&TScalarType> {
        match self.types.as_slice() {
            [TTypeNode { node_type: TTypeNodeType::Scalar, scalar_type: Some(s) }] => Some(s),
            _ => None,
        }
    }
}
