use crate::bridge::UnhashableShape;
use crate::catalog::ShapeKind;
use crate::query::ShapeCapabilities;
use crate::variants::{
    BoolShape, ByteArrayShape, BytesShape, DictShape, FrozenSetShape, ListShape, SetShape,
    StrOrUnicodeShape, StrShape, TupleShape, UnicodeShape,
};
use shape_core::{config, TextModel};

/// Realization bound to an expression node whose exact shape has been inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Dict(DictShape),
    List(ListShape),
    Set(SetShape),
    FrozenSet(FrozenSetShape),
    Tuple(TupleShape),
    Bool(BoolShape),
    Str(StrShape),
    Unicode(UnicodeShape),
    StrOrUnicode(StrOrUnicodeShape),
    Bytes(BytesShape),
    ByteArray(ByteArrayShape),
}

delegate_capabilities!(Shape {
    Dict,
    List,
    Set,
    FrozenSet,
    Tuple,
    Bool,
    Str,
    Unicode,
    StrOrUnicode,
    Bytes,
    ByteArray,
});

impl Shape {
    /// Binds `kind` under `model`.
    ///
    /// With a unified text model narrow-or-wide text is plain narrow text, so it
    /// gets the narrow realization and reports [`ShapeKind::Str`] as its shape.
    pub fn for_kind(kind: ShapeKind, model: TextModel) -> Shape {
        match kind {
            ShapeKind::Dict => Shape::Dict(DictShape::new(model)),
            ShapeKind::List => Shape::List(ListShape::new(model)),
            ShapeKind::Set => Shape::Set(SetShape::new(model)),
            ShapeKind::FrozenSet => Shape::FrozenSet(FrozenSetShape::new(model)),
            ShapeKind::Tuple => Shape::Tuple(TupleShape::new(model)),
            ShapeKind::Bool => Shape::Bool(BoolShape::new(model)),
            ShapeKind::Str => Shape::Str(StrShape::new(model)),
            ShapeKind::Unicode => Shape::Unicode(UnicodeShape::new(model)),
            ShapeKind::StrOrUnicode if model.is_unified() => Shape::Str(StrShape::new(model)),
            ShapeKind::StrOrUnicode => Shape::StrOrUnicode(StrOrUnicodeShape),
            ShapeKind::Bytes => Shape::Bytes(BytesShape::new(model)),
            ShapeKind::ByteArray => Shape::ByteArray(ByteArrayShape::new(model)),
        }
    }

    /// Binds `kind` under the process-wide text model.
    pub fn current(kind: ShapeKind) -> Shape {
        Self::for_kind(kind, config::text_model())
    }

    /// Narrows to the never-hashable shapes, the only ones that can name a
    /// type for an unhashable diagnostic.
    pub fn unhashable(&self) -> Option<UnhashableShape> {
        match *self {
            Shape::Dict(shape) => Some(UnhashableShape::Dict(shape)),
            Shape::List(shape) => Some(UnhashableShape::List(shape)),
            Shape::Set(shape) => Some(UnhashableShape::Set(shape)),
            Shape::ByteArray(shape) => Some(UnhashableShape::ByteArray(shape)),
            Shape::FrozenSet(_)
            | Shape::Tuple(_)
            | Shape::Bool(_)
            | Shape::Str(_)
            | Shape::Unicode(_)
            | Shape::StrOrUnicode(_)
            | Shape::Bytes(_) => None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.type_shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Hashability;
    use strum::IntoEnumIterator;

    #[test]
    fn for_kind_binds_the_requested_shape() {
        for kind in ShapeKind::iter().filter(|kind| *kind != ShapeKind::StrOrUnicode) {
            for model in [TextModel::Unified, TextModel::Split] {
                assert_eq!(Shape::for_kind(kind, model).kind(), kind);
            }
        }
    }

    #[test]
    fn text_union_degrades_to_narrow_text_when_unified() {
        assert_eq!(
            Shape::for_kind(ShapeKind::StrOrUnicode, TextModel::Unified),
            Shape::Str(StrShape::new(TextModel::Unified))
        );
        assert_eq!(
            Shape::for_kind(ShapeKind::StrOrUnicode, TextModel::Split).kind(),
            ShapeKind::StrOrUnicode
        );
    }

    #[test]
    fn current_binding_follows_process_text_model() {
        let model = config::text_model();
        assert_eq!(crate::ShapeCatalog::current().model(), model);
        for kind in ShapeKind::iter() {
            assert_eq!(Shape::current(kind), Shape::for_kind(kind, model));
        }
        assert_eq!(DictShape::default().model(), model);
        assert_eq!(StrShape::new(TextModel::Split).model(), TextModel::Split);
    }

    #[test]
    fn unhashable_matches_never_verdict() {
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, TextModel::Unified);
            assert_eq!(
                shape.unhashable().is_some(),
                shape.is_known_to_be_hashable() == Hashability::Never,
                "{kind}"
            );
        }
    }
}
