//! Capability oracle for expressions with an exact built-in shape.
//!
//! - catalog: shape kinds and their representative instances
//! - query: the questions every shape answers, with shape-independent defaults
//! - variants: one realization per shape
//! - bridge: placeholders for shapes that are never hashable
//! - shape: the closed union the optimizer dispatches on
//! - answers: whole-shape snapshots

#[macro_use]
extern crate shape_core;

#[macro_use]
mod macros;

pub mod answers;
pub mod bridge;
pub mod catalog;
pub mod query;
pub mod shape;
pub mod variants;

pub use answers::{AttributeAnswer, CapabilityAnswers};
pub use bridge::{UnhashableDiagnostic, UnhashableShape};
pub use catalog::{AttributeValue, Hashability, Representative, ShapeCatalog, ShapeKind};
pub use query::ShapeCapabilities;
pub use shape::Shape;
pub use variants::{
    BoolShape, ByteArrayShape, BytesShape, DictShape, FrozenSetShape, ListShape, SetShape,
    StrOrUnicodeShape, StrShape, TupleShape, UnicodeShape,
};
