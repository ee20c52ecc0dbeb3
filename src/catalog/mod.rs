pub mod scalar_type;
pub use scalar_type::*;

pub mod function_name;
pub use function_name::*;

pub mod function;
pub use function::*;
