//! Snapshot of every answer a shape gives.
//!
//! Nothing here is stored on nodes; a snapshot is recomputed from the queries
//! on demand. It exists so two realizations can be compared as a whole and
//! logged or dumped as JSON.

use crate::catalog::{AttributeValue, Hashability, ShapeKind};
use crate::query::ShapeCapabilities;
use serde::Serialize;
use shape_core::ExceptionKind;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeAnswer {
    pub name: String,
    pub exists: bool,
    pub may_raise: bool,
    pub value: Option<AttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityAnswers {
    pub type_shape: ShapeKind,
    pub exact: BTreeMap<ShapeKind, bool>,
    pub trusted_attributes: bool,
    pub hashability: Hashability,
    pub may_raise_bool: bool,
    pub side_effects_bool: bool,
    pub attributes: Vec<AttributeAnswer>,
}

impl CapabilityAnswers {
    /// Asks `shape` every question, probing each name in `attribute_names`.
    pub fn collect<S>(shape: &S, attribute_names: &[&str]) -> Self
    where
        S: ShapeCapabilities + ?Sized,
    {
        let exact = ShapeKind::iter()
            .map(|kind| (kind, shape.has_shape_exact(kind)))
            .collect();
        let attributes = attribute_names
            .iter()
            .map(|name| {
                let exists = shape.is_known_to_have_attribute(name);
                AttributeAnswer {
                    name: name.to_string(),
                    exists,
                    may_raise: shape
                        .may_raise_exception_attribute_lookup(ExceptionKind::AttributeError, name),
                    value: if exists {
                        shape.known_attribute_value(name)
                    } else {
                        None
                    },
                }
            })
            .collect();

        Self {
            type_shape: shape.type_shape(),
            exact,
            trusted_attributes: shape.has_shape_trusted_attributes(),
            hashability: shape.is_known_to_be_hashable(),
            may_raise_bool: shape.may_raise_exception_bool(ExceptionKind::BaseException),
            side_effects_bool: shape.may_have_side_effects_bool(),
            attributes,
        }
    }

    /// Kinds the shape claims to be exactly.
    pub fn exact_shapes(&self) -> Vec<ShapeKind> {
        self.exact
            .iter()
            .filter(|(_, is_exact)| **is_exact)
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn to_json(&self) -> shape_core::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
