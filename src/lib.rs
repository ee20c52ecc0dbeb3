pub mod catalog;
pub use catalog::{Function, FunctionBinaryType, FunctionName, ScalarType};

pub mod wire;
pub use wire::{TFunction, WireCodec, WireConfig, WireError};

pub mod analysis;
pub use analysis::{AggregateOp, AggregateOpInfo, AggregateRegistry, AnalysisError, BuiltinAggregateFunction};
