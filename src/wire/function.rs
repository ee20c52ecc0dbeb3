use serde::{Deserialize, Serialize};

use crate::wire::TTypeDesc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TFunctionName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    pub function_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TFunctionBinaryType {
    Builtin,
    Hive,
    Native,
    Ir,
}

/// Aggregate-specific payload attached to a [`TFunction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TAggregateFunction {
    pub intermediate_type: TTypeDesc,
}

/// A function as shipped to the execution backend inside a plan fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TFunction {
    pub name: TFunctionName,
    pub binary_type: TFunctionBinaryType,
    pub arg_types: Vec<TTypeDesc>,
    pub ret_type: TTypeDesc,
    pub has_var_args: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_fn: Option<TAggregateFunction>,
}
