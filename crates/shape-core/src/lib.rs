#[macro_use]
pub mod macros;

pub mod builtins;
pub mod config;
pub mod error;
pub mod node;
pub mod span;

// Re-export commonly used items for convenience
pub use tracing;

pub use builtins::{BuiltinType, ExceptionKind};
pub use config::{ShapeConfig, TextModel};
pub use node::{ConstantRefFactory, ConstantValue, ExprConstantRef, ValueNodeFactory};
pub use span::SourceRef;

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
