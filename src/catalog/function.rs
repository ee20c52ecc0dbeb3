use crate::catalog::{FunctionName, ScalarType};
use crate::wire::{TFunction, TFunctionBinaryType};

/// Where a function's implementation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionBinaryType {
    /// Compiled into the executor.
    Builtin,
    Hive,
    #[default]
    Native,
    Ir,
}

impl FunctionBinaryType {
    pub fn to_wire(self) -> TFunctionBinaryType {
        match self {
            FunctionBinaryType::Builtin => TFunctionBinaryType::Builtin,
            FunctionBinaryType::Hive => TFunctionBinaryType::Hive,
            FunctionBinaryType::Native => TFunctionBinaryType::Native,
            FunctionBinaryType::Ir => TFunctionBinaryType::Ir,
        }
    }
}

/// Operator-independent part of a function descriptor: name, signature and
/// binary kind. Specialized descriptors embed one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: FunctionName,
    arg_types: Vec<ScalarType>,
    ret_type: ScalarType,
    has_var_args: bool,
    binary_type: FunctionBinaryType,
}

impl Function {
    pub fn new(name: FunctionName, arg_types: Vec<ScalarType>, ret_type: ScalarType, has_var_args: bool) -> Self {
        Self { name, arg_types, ret_type, has_var_args, binary_type: FunctionBinaryType::default() }
    }

    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    pub fn arg_types(&self) -> &[ScalarType] {
        &self.arg_types
    }

    pub fn ret_type(&self) -> &ScalarType {
        &self.ret_type
    }

    pub fn has_var_args(&self) -> bool {
        self.has_var_args
    }

    pub fn binary_type(&self) -> FunctionBinaryType {
        self.binary_type
    }

    pub fn set_binary_type(&mut self, binary_type: FunctionBinaryType) {
        self.binary_type = binary_type;
    }

    /// Base projection; `id` and `aggregate_fn` are left for specializations.
    pub fn to_wire(&self) -> TFunction {
        TFunction {
            name: self.name.to_wire(),
            binary_type: self.binary_type.to_wire(),
            arg_types: self.arg_types.iter().map(ScalarType::to_wire).collect(),
            ret_type: self.ret_type.to_wire(),
            has_var_args: self.has_var_args,
            id: None,
            aggregate_fn: None,
        }
    }
}
