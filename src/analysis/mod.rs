pub mod analysis_error;
pub use analysis_error::*;

pub mod aggregate_op;
pub use aggregate_op::*;

pub mod aggregate_registry;
pub use aggregate_registry::*;

pub mod builtin_aggregate_function;
pub use builtin_aggregate_function::*;
