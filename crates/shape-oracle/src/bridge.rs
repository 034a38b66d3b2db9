//! Diagnostic placeholders for shapes that can never be hashed.
//!
//! Only the variants whose verdict is [`Hashability::Never`](crate::Hashability::Never) implement
//! [`UnhashableDiagnostic`], so asking any other shape for the placeholder does
//! not type-check. [`UnhashableShape`] is the closed set of those variants.

use crate::query::ShapeCapabilities;
use crate::variants::{ByteArrayShape, DictShape, ListShape, SetShape};
use shape_core::{BuiltinType, SourceRef, ValueNodeFactory};

pub trait UnhashableDiagnostic: ShapeCapabilities {
    /// The type to blame when hashing a value of this shape fails.
    fn unhashable_type(&self) -> BuiltinType;

    /// Asks `factory` for a constant node referencing [`Self::unhashable_type`].
    fn extract_unhashable_node_type<F>(&self, source_ref: SourceRef, factory: &F) -> F::Node
    where
        F: ValueNodeFactory + ?Sized,
    {
        let ty = self.unhashable_type();
        debug!("{} is never hashable, placeholder at {}", ty, source_ref);
        factory.make_placeholder_for_type(ty, source_ref)
    }
}

impl UnhashableDiagnostic for DictShape {
    fn unhashable_type(&self) -> BuiltinType {
        BuiltinType::Dict
    }
}

impl UnhashableDiagnostic for ListShape {
    fn unhashable_type(&self) -> BuiltinType {
        BuiltinType::List
    }
}

impl UnhashableDiagnostic for SetShape {
    fn unhashable_type(&self) -> BuiltinType {
        BuiltinType::Set
    }
}

impl UnhashableDiagnostic for ByteArrayShape {
    fn unhashable_type(&self) -> BuiltinType {
        BuiltinType::ByteArray
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnhashableShape {
    Dict(DictShape),
    List(ListShape),
    Set(SetShape),
    ByteArray(ByteArrayShape),
}

delegate_capabilities!(UnhashableShape { Dict, List, Set, ByteArray });

impl UnhashableDiagnostic for UnhashableShape {
    fn unhashable_type(&self) -> BuiltinType {
        match self {
            UnhashableShape::Dict(shape) => shape.unhashable_type(),
            UnhashableShape::List(shape) => shape.unhashable_type(),
            UnhashableShape::Set(shape) => shape.unhashable_type(),
            UnhashableShape::ByteArray(shape) => shape.unhashable_type(),
        }
    }
}
