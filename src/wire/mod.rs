pub mod opcodes;
pub use opcodes::*;

pub mod types;
pub use types::*;

pub mod function;
pub use function::*;

pub mod wire_config;
pub use wire_config::*;

pub mod wire_error;
pub use wire_error::*;

pub mod wire_codec;
pub use wire_codec::*;
