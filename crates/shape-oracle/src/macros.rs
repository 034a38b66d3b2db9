/// Implements `ShapeCapabilities` for an enum whose variants each wrap a
/// realization, forwarding every query so per-variant overrides are kept.
macro_rules! delegate_capabilities {
    ($enum:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::query::ShapeCapabilities for $enum {
            fn type_shape(&self) -> $crate::catalog::ShapeKind {
                match self {
                    $($enum::$variant(shape) => shape.type_shape(),)+
                }
            }

            fn has_shape_dict_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_dict_exact(),)+
                }
            }

            fn has_shape_list_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_list_exact(),)+
                }
            }

            fn has_shape_set_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_set_exact(),)+
                }
            }

            fn has_shape_frozenset_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_frozenset_exact(),)+
                }
            }

            fn has_shape_tuple_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_tuple_exact(),)+
                }
            }

            fn has_shape_bool_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_bool_exact(),)+
                }
            }

            fn has_shape_str_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_str_exact(),)+
                }
            }

            fn has_shape_unicode_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_unicode_exact(),)+
                }
            }

            fn has_shape_str_or_unicode_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_str_or_unicode_exact(),)+
                }
            }

            fn has_shape_bytes_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_bytes_exact(),)+
                }
            }

            fn has_shape_bytearray_exact(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_bytearray_exact(),)+
                }
            }

            fn has_shape_trusted_attributes(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.has_shape_trusted_attributes(),)+
                }
            }

            fn may_have_side_effects_bool(&self) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.may_have_side_effects_bool(),)+
                }
            }

            fn is_known_to_have_attribute(&self, attribute_name: &str) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.is_known_to_have_attribute(attribute_name),)+
                }
            }

            fn known_attribute_value(
                &self,
                attribute_name: &str,
            ) -> Option<$crate::catalog::AttributeValue> {
                match self {
                    $($enum::$variant(shape) => shape.known_attribute_value(attribute_name),)+
                }
            }

            fn may_raise_exception_attribute_lookup(
                &self,
                exception: shape_core::ExceptionKind,
                attribute_name: &str,
            ) -> bool {
                match self {
                    $($enum::$variant(shape) => {
                        shape.may_raise_exception_attribute_lookup(exception, attribute_name)
                    })+
                }
            }

            fn may_raise_exception_bool(&self, exception: shape_core::ExceptionKind) -> bool {
                match self {
                    $($enum::$variant(shape) => shape.may_raise_exception_bool(exception),)+
                }
            }

            fn is_known_to_be_hashable(&self) -> $crate::catalog::Hashability {
                match self {
                    $($enum::$variant(shape) => shape.is_known_to_be_hashable(),)+
                }
            }
        }
    };
}
