//! Boundary to the expression-node graph.
//!
//! The shape oracle never builds IR itself. When it needs to materialize a value
//! (the type that makes a hash operation fail) it asks a [`ValueNodeFactory`].

use crate::builtins::BuiltinType;
use crate::span::SourceRef;
use serde::{Deserialize, Serialize};

/// Constructor for value nodes owned by the node graph.
pub trait ValueNodeFactory {
    type Node;

    /// Builds a constant reference to the built-in type `ty` located at `source_ref`.
    fn make_placeholder_for_type(&self, ty: BuiltinType, source_ref: SourceRef) -> Self::Node;
}

impl<F: ValueNodeFactory + ?Sized> ValueNodeFactory for &F {
    type Node = F::Node;

    fn make_placeholder_for_type(&self, ty: BuiltinType, source_ref: SourceRef) -> Self::Node {
        (**self).make_placeholder_for_type(ty, source_ref)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstantValue {
    Type(BuiltinType),
}

/// Constant reference expression, the placeholder handed back to the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprConstantRef {
    pub value: ConstantValue,
    pub source_ref: SourceRef,
}

impl ExprConstantRef {
    pub fn new(value: ConstantValue, source_ref: SourceRef) -> Self {
        Self { value, source_ref }
    }

    pub fn builtin_type(&self) -> Option<BuiltinType> {
        match self.value {
            ConstantValue::Type(ty) => Some(ty),
        }
    }
}

/// Factory producing [`ExprConstantRef`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantRefFactory;

impl ValueNodeFactory for ConstantRefFactory {
    type Node = ExprConstantRef;

    fn make_placeholder_for_type(&self, ty: BuiltinType, source_ref: SourceRef) -> ExprConstantRef {
        trace!("constant ref to {} at {}", ty, source_ref);
        ExprConstantRef::new(ConstantValue::Type(ty), source_ref)
    }
}
