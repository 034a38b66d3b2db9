//! One realization per exact shape.
//!
//! Each variant answers its own identity query, probes its representative
//! instance for attributes, and states a hashability verdict. Everything else
//! comes from the defaults of [`ShapeCapabilities`].

use crate::catalog::{AttributeValue, Hashability, Representative, ShapeCatalog, ShapeKind};
use crate::query::ShapeCapabilities;
use shape_core::{config, TextModel};

macro_rules! exact_shape {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:expr, [$($identity:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            model: TextModel,
        }

        impl $name {
            pub fn new(model: TextModel) -> Self {
                Self { model }
            }

            pub fn model(&self) -> TextModel {
                self.model
            }

            pub fn representative(&self) -> &'static Representative {
                ShapeCatalog::for_model(self.model).representative($kind)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(config::text_model())
            }
        }

        impl ShapeCapabilities for $name {
            fn type_shape(&self) -> ShapeKind {
                $kind
            }

            $(
                fn $identity(&self) -> bool {
                    true
                }
            )+

            fn is_known_to_have_attribute(&self, attribute_name: &str) -> bool {
                self.representative().has_attribute(attribute_name)
            }

            fn known_attribute_value(&self, attribute_name: &str) -> Option<AttributeValue> {
                self.representative().attribute(attribute_name)
            }

            fn is_known_to_be_hashable(&self) -> Hashability {
                $kind.hashability()
            }
        }
    };
}

exact_shape! {
    /// Nodes with exact `dict` shape.
    DictShape => ShapeKind::Dict, [has_shape_dict_exact]
}

exact_shape! {
    /// Nodes with exact `list` shape.
    ListShape => ShapeKind::List, [has_shape_list_exact]
}

exact_shape! {
    /// Nodes with exact `set` shape.
    SetShape => ShapeKind::Set, [has_shape_set_exact]
}

exact_shape! {
    /// Nodes with exact `frozenset` shape.
    FrozenSetShape => ShapeKind::FrozenSet, [has_shape_frozenset_exact]
}

exact_shape! {
    /// Nodes with exact `tuple` shape. Hashability is decided per element
    /// elsewhere, so this variant never reports an unhashable diagnostic.
    TupleShape => ShapeKind::Tuple, [has_shape_tuple_exact]
}

exact_shape! {
    BoolShape => ShapeKind::Bool, [has_shape_bool_exact]
}

exact_shape! {
    /// Narrow text. Also a member of the narrow-or-wide union.
    StrShape => ShapeKind::Str,
        [has_shape_str_exact, has_shape_str_or_unicode_exact]
}

exact_shape! {
    /// Wide text. Also a member of the narrow-or-wide union.
    UnicodeShape => ShapeKind::Unicode,
        [has_shape_unicode_exact, has_shape_str_or_unicode_exact]
}

exact_shape! {
    BytesShape => ShapeKind::Bytes, [has_shape_bytes_exact]
}

exact_shape! {
    ByteArrayShape => ShapeKind::ByteArray, [has_shape_bytearray_exact]
}

/// Narrow-or-wide text on a runtime where the two differ.
///
/// An attribute is known only if both representatives have it, but its value is
/// always taken from the narrow one. Under a unified text model this shape is
/// realized by [`StrShape`] instead, see [`crate::Shape::for_kind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrOrUnicodeShape;

impl StrOrUnicodeShape {
    fn catalog() -> &'static ShapeCatalog {
        ShapeCatalog::for_model(TextModel::Split)
    }

    pub fn narrow(&self) -> &'static Representative {
        Self::catalog().representative(ShapeKind::Str)
    }

    pub fn wide(&self) -> &'static Representative {
        Self::catalog().representative(ShapeKind::Unicode)
    }
}

impl ShapeCapabilities for StrOrUnicodeShape {
    fn type_shape(&self) -> ShapeKind {
        ShapeKind::StrOrUnicode
    }

    fn has_shape_str_or_unicode_exact(&self) -> bool {
        true
    }

    fn is_known_to_have_attribute(&self, attribute_name: &str) -> bool {
        self.wide().has_attribute(attribute_name) && self.narrow().has_attribute(attribute_name)
    }

    fn known_attribute_value(&self, attribute_name: &str) -> Option<AttributeValue> {
        self.narrow().attribute(attribute_name)
    }

    fn is_known_to_be_hashable(&self) -> Hashability {
        ShapeKind::StrOrUnicode.hashability()
    }
}
