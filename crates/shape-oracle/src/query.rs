//! Questions the optimizer asks about a node whose exact shape is known.
//!
//! [`ShapeCapabilities`] carries a default answer for everything that does not
//! depend on the concrete shape: every "is exactly X" query says no, attribute
//! lookups may raise unless the attribute is known, and truth-value conversion
//! never raises. A variant overrides the one identity query it stands for and
//! supplies the attribute oracle and its hashability verdict.

use crate::catalog::{AttributeValue, Hashability, ShapeKind};
use shape_core::ExceptionKind;

pub trait ShapeCapabilities {
    /// The shape this realization represents.
    fn type_shape(&self) -> ShapeKind;

    fn has_shape_dict_exact(&self) -> bool {
        false
    }

    fn has_shape_list_exact(&self) -> bool {
        false
    }

    fn has_shape_set_exact(&self) -> bool {
        false
    }

    fn has_shape_frozenset_exact(&self) -> bool {
        false
    }

    fn has_shape_tuple_exact(&self) -> bool {
        false
    }

    fn has_shape_bool_exact(&self) -> bool {
        false
    }

    fn has_shape_str_exact(&self) -> bool {
        false
    }

    fn has_shape_unicode_exact(&self) -> bool {
        false
    }

    fn has_shape_str_or_unicode_exact(&self) -> bool {
        false
    }

    fn has_shape_bytes_exact(&self) -> bool {
        false
    }

    fn has_shape_bytearray_exact(&self) -> bool {
        false
    }

    /// Dispatches to the identity query for `kind`.
    fn has_shape_exact(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Dict => self.has_shape_dict_exact(),
            ShapeKind::List => self.has_shape_list_exact(),
            ShapeKind::Set => self.has_shape_set_exact(),
            ShapeKind::FrozenSet => self.has_shape_frozenset_exact(),
            ShapeKind::Tuple => self.has_shape_tuple_exact(),
            ShapeKind::Bool => self.has_shape_bool_exact(),
            ShapeKind::Str => self.has_shape_str_exact(),
            ShapeKind::Unicode => self.has_shape_unicode_exact(),
            ShapeKind::StrOrUnicode => self.has_shape_str_or_unicode_exact(),
            ShapeKind::Bytes => self.has_shape_bytes_exact(),
            ShapeKind::ByteArray => self.has_shape_bytearray_exact(),
        }
    }

    /// Attribute existence is decidable from the representative alone.
    fn has_shape_trusted_attributes(&self) -> bool {
        true
    }

    fn is_known_to_have_attribute(&self, attribute_name: &str) -> bool;

    /// Only meaningful once [`Self::is_known_to_have_attribute`] returned true.
    fn known_attribute_value(&self, attribute_name: &str) -> Option<AttributeValue>;

    // The exception kind is not used to narrow the answer.
    fn may_raise_exception_attribute_lookup(
        &self,
        _exception: ExceptionKind,
        attribute_name: &str,
    ) -> bool {
        !self.is_known_to_have_attribute(attribute_name)
    }

    fn may_raise_exception_bool(&self, _exception: ExceptionKind) -> bool {
        false
    }

    fn may_have_side_effects_bool(&self) -> bool {
        false
    }

    fn is_known_to_be_hashable(&self) -> Hashability;
}
