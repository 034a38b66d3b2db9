//! Runtime identities of the built-in types the optimizer reasons about.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// Identity of a built-in runtime type, as a placeholder node would reference it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BuiltinType {
    Dict,
    List,
    Set,
    FrozenSet,
    Tuple,
    Bool,
    /// Narrow text. Under a unified text model this is the only text type.
    Str,
    /// Wide text, distinct from `Str` only under a split text model.
    Unicode,
    Bytes,
    ByteArray,
}

impl BuiltinType {
    /// Source-language spelling of the type name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Dict => "dict",
            BuiltinType::List => "list",
            BuiltinType::Set => "set",
            BuiltinType::FrozenSet => "frozenset",
            BuiltinType::Tuple => "tuple",
            BuiltinType::Bool => "bool",
            BuiltinType::Str => "str",
            BuiltinType::Unicode => "unicode",
            BuiltinType::Bytes => "bytes",
            BuiltinType::ByteArray => "bytearray",
        }
    }
}

/// Exception classes a may-raise query can be asked about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr,
)]
pub enum ExceptionKind {
    BaseException,
    Exception,
    AttributeError,
    TypeError,
    ValueError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_source_spelling() {
        for ty in [
            BuiltinType::Dict,
            BuiltinType::FrozenSet,
            BuiltinType::ByteArray,
            BuiltinType::Unicode,
        ] {
            assert_eq!(ty.to_string(), ty.name());
        }
    }

    #[test]
    fn builtin_type_parses_from_name() {
        assert_eq!("bytearray".parse::<BuiltinType>().ok(), Some(BuiltinType::ByteArray));
        assert!("object".parse::<BuiltinType>().is_err());
    }

    #[test]
    fn exception_kind_uses_class_names() {
        assert_eq!(ExceptionKind::AttributeError.to_string(), "AttributeError");
    }
}
