//! Closed set of exact value shapes and their representative instances.
//!
//! A representative instance is the empty (or zero) value of the underlying
//! built-in type. Its member set is authored as a static table instead of being
//! discovered by reflection, so the attributes the optimizer may trust are
//! auditable. Catalogs are built once per [`TextModel`] and never mutated.

mod tables;

use itertools::Itertools;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use shape_core::{config, BuiltinType, TextModel};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::{EnumCount, EnumIter};
use tables::TypeTable;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    FromStr,
    EnumIter,
    EnumCount,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Mapping.
    Dict,
    /// Mutable ordered sequence.
    List,
    Set,
    FrozenSet,
    /// Immutable ordered sequence.
    Tuple,
    Bool,
    /// Narrow text.
    Str,
    /// Wide text.
    Unicode,
    /// Narrow or wide text, not known which.
    #[display("str_or_unicode")]
    #[serde(rename = "str_or_unicode")]
    StrOrUnicode,
    Bytes,
    ByteArray,
}

/// Whether every value of a shape can be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Hashability {
    Always,
    Never,
    /// Depends on the contents, e.g. a tuple is hashable iff its elements are.
    Unknown,
}

impl ShapeKind {
    pub fn hashability(self) -> Hashability {
        match self {
            ShapeKind::Dict | ShapeKind::List | ShapeKind::Set | ShapeKind::ByteArray => {
                Hashability::Never
            }
            ShapeKind::Tuple => Hashability::Unknown,
            ShapeKind::FrozenSet
            | ShapeKind::Bool
            | ShapeKind::Str
            | ShapeKind::Unicode
            | ShapeKind::StrOrUnicode
            | ShapeKind::Bytes => Hashability::Always,
        }
    }

    /// Built-in type a value of this shape is an instance of, if there is exactly one.
    pub fn builtin_type(self, model: TextModel) -> Option<BuiltinType> {
        match self {
            ShapeKind::Dict => Some(BuiltinType::Dict),
            ShapeKind::List => Some(BuiltinType::List),
            ShapeKind::Set => Some(BuiltinType::Set),
            ShapeKind::FrozenSet => Some(BuiltinType::FrozenSet),
            ShapeKind::Tuple => Some(BuiltinType::Tuple),
            ShapeKind::Bool => Some(BuiltinType::Bool),
            ShapeKind::Str => Some(BuiltinType::Str),
            ShapeKind::Unicode | ShapeKind::StrOrUnicode => match model {
                TextModel::Unified => Some(BuiltinType::Str),
                TextModel::Split if self == ShapeKind::Unicode => Some(BuiltinType::Unicode),
                TextModel::Split => None,
            },
            // Under the split model bytes is narrow text.
            ShapeKind::Bytes => match model {
                TextModel::Unified => Some(BuiltinType::Bytes),
                TextModel::Split => Some(BuiltinType::Str),
            },
            ShapeKind::ByteArray => Some(BuiltinType::ByteArray),
        }
    }
}

/// Value of an attribute on a representative instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttributeValue {
    /// Method bound to the representative.
    BoundMethod {
        receiver: BuiltinType,
        name: &'static str,
    },
    /// Class or static method, reached through the type, e.g. `dict.fromkeys`.
    TypeMethod {
        owner: BuiltinType,
        name: &'static str,
    },
    /// Integer data attribute, e.g. `False.denominator`.
    Int(i64),
    /// The type object itself, as `__class__` yields it.
    Type(BuiltinType),
    Doc(&'static str),
    None,
}

/// Zero-valued instance of a built-in type, reduced to its member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    kind: ShapeKind,
    type_identity: BuiltinType,
    members: HashMap<&'static str, AttributeValue>,
}

impl Representative {
    fn from_table(kind: ShapeKind, table: &TypeTable) -> Self {
        let ty = table.ty;
        let mut members: HashMap<&'static str, AttributeValue> = table
            .methods
            .iter()
            .flat_map(|group| group.iter())
            .map(|name| {
                let name = *name;
                let value = if tables::TYPE_LEVEL_METHODS.contains(&name) {
                    AttributeValue::TypeMethod { owner: ty, name }
                } else {
                    AttributeValue::BoundMethod { receiver: ty, name }
                };
                (name, value)
            })
            .collect();
        members.extend(
            table
                .ints
                .iter()
                .map(|(name, value)| (*name, AttributeValue::Int(*value))),
        );
        members.insert("__class__", AttributeValue::Type(ty));
        members.insert("__doc__", AttributeValue::Doc(table.doc));
        let hash = if table.hash_is_none {
            AttributeValue::None
        } else {
            AttributeValue::BoundMethod {
                receiver: ty,
                name: "__hash__",
            }
        };
        members.insert("__hash__", hash);

        Self {
            kind,
            type_identity: ty,
            members,
        }
    }

    /// Constructs a fresh representative instead of borrowing the catalog's copy.
    pub fn zero(kind: ShapeKind, model: TextModel) -> Self {
        Self::from_table(kind, table_for(kind, model))
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn type_identity(&self) -> BuiltinType {
        self.type_identity
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.members.get(name).copied()
    }

    /// Member names in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.keys().copied().sorted()
    }
}

// Narrow-or-wide text is represented by narrow text; the split realization
// probes the wide representative separately.
// Under the split model bytes is narrow text as well.
fn table_for(kind: ShapeKind, model: TextModel) -> &'static TypeTable {
    match model {
        TextModel::Unified => match kind {
            ShapeKind::Dict => &tables::DICT,
            ShapeKind::List => &tables::LIST,
            ShapeKind::Set => &tables::SET,
            ShapeKind::FrozenSet => &tables::FROZENSET,
            ShapeKind::Tuple => &tables::TUPLE,
            ShapeKind::Bool => &tables::BOOL,
            ShapeKind::Str | ShapeKind::Unicode | ShapeKind::StrOrUnicode => &tables::STR_UNIFIED,
            ShapeKind::Bytes => &tables::BYTES,
            ShapeKind::ByteArray => &tables::BYTEARRAY,
        },
        TextModel::Split => match kind {
            ShapeKind::Dict => &tables::DICT_LEGACY,
            ShapeKind::List => &tables::LIST_LEGACY,
            ShapeKind::Set => &tables::SET_LEGACY,
            ShapeKind::FrozenSet => &tables::FROZENSET_LEGACY,
            ShapeKind::Tuple => &tables::TUPLE_LEGACY,
            ShapeKind::Bool => &tables::BOOL_LEGACY,
            ShapeKind::Str | ShapeKind::StrOrUnicode | ShapeKind::Bytes => &tables::STR_LEGACY,
            ShapeKind::Unicode => &tables::UNICODE_LEGACY,
            ShapeKind::ByteArray => &tables::BYTEARRAY_LEGACY,
        },
    }
}

/// Representatives of every shape under one text model.
#[derive(Debug)]
pub struct ShapeCatalog {
    model: TextModel,
    representatives: HashMap<ShapeKind, Representative>,
}

static UNIFIED: LazyLock<ShapeCatalog> = LazyLock::new(|| ShapeCatalog::build(TextModel::Unified));
static SPLIT: LazyLock<ShapeCatalog> = LazyLock::new(|| ShapeCatalog::build(TextModel::Split));

impl ShapeCatalog {
    fn build(model: TextModel) -> Self {
        let representatives: HashMap<_, _> = <ShapeKind as strum::IntoEnumIterator>::iter()
            .map(|kind| (kind, Representative::from_table(kind, table_for(kind, model))))
            .collect();
        debug!(
            "built {} shape catalog with {} representatives",
            model,
            representatives.len()
        );
        Self {
            model,
            representatives,
        }
    }

    pub fn for_model(model: TextModel) -> &'static ShapeCatalog {
        match model {
            TextModel::Unified => &UNIFIED,
            TextModel::Split => &SPLIT,
        }
    }

    /// Catalog of the process-wide text model.
    pub fn current() -> &'static ShapeCatalog {
        Self::for_model(config::text_model())
    }

    pub fn model(&self) -> TextModel {
        self.model
    }

    pub fn representative(&self, kind: ShapeKind) -> &Representative {
        // every kind is inserted by `build`
        &self.representatives[&kind]
    }

    /// Every attribute name known on any representative, sorted and deduplicated.
    pub fn all_attribute_names(&self) -> Vec<&'static str> {
        self.representatives
            .values()
            .flat_map(|rep| rep.members.keys().copied())
            .sorted()
            .dedup()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn every_kind_has_a_representative() {
        for model in [TextModel::Unified, TextModel::Split] {
            let catalog = ShapeCatalog::for_model(model);
            assert_eq!(catalog.model(), model);
            for kind in ShapeKind::iter() {
                assert_eq!(catalog.representative(kind).kind(), kind);
            }
        }
        assert_eq!(ShapeKind::iter().count(), ShapeKind::COUNT);
    }

    #[test]
    fn hash_slot_is_none_only_for_unhashable_types() {
        let catalog = ShapeCatalog::for_model(TextModel::Unified);
        for kind in ShapeKind::iter() {
            let hash = catalog.representative(kind).attribute("__hash__");
            assert_eq!(
                hash == Some(AttributeValue::None),
                kind.hashability() == Hashability::Never,
                "{kind}"
            );
        }
    }

    #[test]
    fn class_attribute_names_the_type() {
        let rep = Representative::zero(ShapeKind::FrozenSet, TextModel::Unified);
        assert_eq!(
            rep.attribute("__class__"),
            Some(AttributeValue::Type(BuiltinType::FrozenSet))
        );
        assert_eq!(rep.type_identity(), BuiltinType::FrozenSet);
    }

    #[test]
    fn class_level_methods_are_reached_through_the_type() {
        let rep = Representative::zero(ShapeKind::Dict, TextModel::Unified);
        assert_eq!(
            rep.attribute("fromkeys"),
            Some(AttributeValue::TypeMethod {
                owner: BuiltinType::Dict,
                name: "fromkeys",
            })
        );
        assert_eq!(
            rep.attribute("keys"),
            Some(AttributeValue::BoundMethod {
                receiver: BuiltinType::Dict,
                name: "keys",
            })
        );
        let bytes = Representative::zero(ShapeKind::Bytes, TextModel::Unified);
        assert!(matches!(
            bytes.attribute("fromhex"),
            Some(AttributeValue::TypeMethod { .. })
        ));
    }

    #[test]
    fn bool_exposes_integer_data_members() {
        let rep = Representative::zero(ShapeKind::Bool, TextModel::Unified);
        assert_eq!(rep.attribute("denominator"), Some(AttributeValue::Int(1)));
        assert_eq!(rep.attribute("real"), Some(AttributeValue::Int(0)));
    }

    #[test]
    fn unified_model_merges_text_representatives() {
        let catalog = ShapeCatalog::for_model(TextModel::Unified);
        assert_eq!(
            catalog.representative(ShapeKind::Unicode).type_identity(),
            BuiltinType::Str
        );
        assert!(catalog.representative(ShapeKind::Str).has_attribute("isdecimal"));
        assert!(!catalog.representative(ShapeKind::Str).has_attribute("decode"));
    }

    #[test]
    fn split_model_separates_text_representatives() {
        let catalog = ShapeCatalog::for_model(TextModel::Split);
        let narrow = catalog.representative(ShapeKind::Str);
        let wide = catalog.representative(ShapeKind::Unicode);
        assert_eq!(wide.type_identity(), BuiltinType::Unicode);
        assert!(narrow.has_attribute("decode"));
        assert!(!narrow.has_attribute("isnumeric"));
        assert!(wide.has_attribute("isnumeric"));
    }

    #[test]
    fn shape_kind_round_trips_through_its_name() {
        for kind in ShapeKind::iter() {
            assert_eq!(kind.to_string().parse::<ShapeKind>().ok(), Some(kind));
        }
        assert_eq!(ShapeKind::StrOrUnicode.to_string(), "str_or_unicode");
    }

    #[test]
    fn attribute_names_are_sorted() {
        let names: Vec<_> = Representative::zero(ShapeKind::Tuple, TextModel::Unified)
            .attribute_names()
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"index"));
    }
}
