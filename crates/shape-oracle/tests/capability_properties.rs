use pretty_assertions::assert_eq;
use shape_core::{BuiltinType, ConstantRefFactory, ExceptionKind, SourceRef, TextModel};
use shape_oracle::{
    Hashability, ListShape, Representative, Shape, ShapeCapabilities, ShapeCatalog, ShapeKind,
    TupleShape, UnhashableDiagnostic,
};
use strum::IntoEnumIterator;

const MODELS: [TextModel; 2] = [TextModel::Unified, TextModel::Split];

fn expected_exact(kind: ShapeKind, model: TextModel) -> Vec<ShapeKind> {
    match (kind, model) {
        (ShapeKind::Str, _) => vec![ShapeKind::Str, ShapeKind::StrOrUnicode],
        (ShapeKind::Unicode, _) => vec![ShapeKind::Unicode, ShapeKind::StrOrUnicode],
        (ShapeKind::StrOrUnicode, TextModel::Unified) => {
            vec![ShapeKind::Str, ShapeKind::StrOrUnicode]
        }
        (other, _) => vec![other],
    }
}

#[test]
fn each_shape_claims_only_its_own_identity() {
    for model in MODELS {
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, model);
            let claimed: Vec<_> = ShapeKind::iter()
                .filter(|other| shape.has_shape_exact(*other))
                .collect();
            assert_eq!(claimed, expected_exact(kind, model), "{kind} under {model}");
        }
    }
}

#[test]
fn known_attribute_values_match_a_fresh_representative() {
    for model in MODELS {
        let names = ShapeCatalog::for_model(model).all_attribute_names();
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, model);
            let fresh = Representative::zero(shape.kind(), model);
            for name in &names {
                if shape.is_known_to_have_attribute(name) {
                    assert_eq!(
                        shape.known_attribute_value(name),
                        fresh.attribute(name),
                        "{kind}.{name} under {model}"
                    );
                    assert!(shape.known_attribute_value(name).is_some());
                }
            }
        }
    }
}

#[test]
fn attribute_lookup_may_raise_exactly_when_not_known() {
    let exceptions = [
        ExceptionKind::AttributeError,
        ExceptionKind::TypeError,
        ExceptionKind::Exception,
    ];
    for model in MODELS {
        let mut names = ShapeCatalog::for_model(model).all_attribute_names();
        names.push("nonexistent_xyz");
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, model);
            for name in &names {
                for exception in exceptions {
                    assert_eq!(
                        shape.may_raise_exception_attribute_lookup(exception, name),
                        !shape.is_known_to_have_attribute(name),
                        "{kind}.{name}"
                    );
                }
            }
        }
    }
}

#[test]
fn hashability_verdicts() {
    let expected = [
        (ShapeKind::Dict, Hashability::Never),
        (ShapeKind::List, Hashability::Never),
        (ShapeKind::Set, Hashability::Never),
        (ShapeKind::ByteArray, Hashability::Never),
        (ShapeKind::Bool, Hashability::Always),
        (ShapeKind::Str, Hashability::Always),
        (ShapeKind::Unicode, Hashability::Always),
        (ShapeKind::StrOrUnicode, Hashability::Always),
        (ShapeKind::Bytes, Hashability::Always),
        (ShapeKind::FrozenSet, Hashability::Always),
        (ShapeKind::Tuple, Hashability::Unknown),
    ];
    for model in MODELS {
        for (kind, verdict) in expected {
            assert_eq!(Shape::for_kind(kind, model).is_known_to_be_hashable(), verdict, "{kind}");
            assert_eq!(kind.hashability(), verdict, "{kind}");
        }
    }
}

#[test]
fn never_hashable_shapes_blame_their_own_type() {
    let expected = [
        (ShapeKind::Dict, BuiltinType::Dict),
        (ShapeKind::List, BuiltinType::List),
        (ShapeKind::Set, BuiltinType::Set),
        (ShapeKind::ByteArray, BuiltinType::ByteArray),
    ];
    let source_ref = SourceRef::new(7, 21, 3);
    for (kind, ty) in expected {
        let unhashable = Shape::for_kind(kind, TextModel::Unified)
            .unhashable()
            .expect("never-hashable shape");
        let node = unhashable.extract_unhashable_node_type(source_ref, &ConstantRefFactory);
        assert_eq!(node.builtin_type(), Some(ty));
        assert_eq!(node.source_ref, source_ref);
        assert_eq!(kind.builtin_type(TextModel::Unified), Some(ty));
    }
}

#[test]
fn tuple_never_offers_an_unhashable_diagnostic() {
    assert!(Shape::for_kind(ShapeKind::Tuple, TextModel::Unified)
        .unhashable()
        .is_none());
}

#[test]
fn bool_conversion_is_always_safe() {
    for model in MODELS {
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, model);
            assert!(shape.has_shape_trusted_attributes());
            assert!(!shape.may_raise_exception_bool(ExceptionKind::BaseException));
            assert!(!shape.may_raise_exception_bool(ExceptionKind::ValueError));
            assert!(!shape.may_have_side_effects_bool());
        }
    }
}

#[test]
fn append_is_known_on_lists_but_not_tuples() {
    assert!(ListShape::new(TextModel::Unified).is_known_to_have_attribute("append"));
    assert!(!TupleShape::new(TextModel::Unified).is_known_to_have_attribute("append"));
}

#[test]
fn mapping_is_never_hashable_and_blames_dict() {
    let shape = Shape::for_kind(ShapeKind::Dict, TextModel::Unified);
    assert_eq!(shape.is_known_to_be_hashable(), Hashability::Never);
    let node = shape
        .unhashable()
        .map(|shape| shape.extract_unhashable_node_type(SourceRef::internal(), &ConstantRefFactory))
        .expect("dict is never hashable");
    assert_eq!(node.builtin_type(), Some(BuiltinType::Dict));
}

#[test]
fn unknown_attribute_is_unknown_everywhere() {
    for model in MODELS {
        for kind in ShapeKind::iter() {
            let shape = Shape::for_kind(kind, model);
            assert!(!shape.is_known_to_have_attribute("nonexistent_xyz"), "{kind}");
            assert!(shape.may_raise_exception_attribute_lookup(
                ExceptionKind::AttributeError,
                "nonexistent_xyz"
            ));
        }
    }
}

#[test]
fn content_dependent_attributes_are_not_assumed() {
    // Representatives are empty, so nothing beyond the type's own members is claimed.
    let list = ListShape::new(TextModel::Unified);
    assert!(!list.is_known_to_have_attribute("__dict__"));
    assert!(!list.is_known_to_have_attribute("0"));
}
