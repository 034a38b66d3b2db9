//! Member tables of the built-in types, as a zero-valued instance exposes them.
//!
//! Every table lists methods only. `__class__`, `__doc__` and `__hash__` are
//! present on every object and are filled in by [`TypeTable`] itself.
//!
//! Tables named `*_LEGACY` describe the split text model runtime, where narrow
//! text and bytes are one type. They must never list a member that only the
//! unified runtime has.

use shape_core::BuiltinType;

pub(super) struct TypeTable {
    pub ty: BuiltinType,
    pub doc: &'static str,
    /// `__hash__` is `None` on types whose instances are never hashable.
    pub hash_is_none: bool,
    pub methods: &'static [&'static [&'static str]],
    pub ints: &'static [(&'static str, i64)],
}

const OBJECT_METHODS: &[&str] = &[
    "__delattr__",
    "__dir__",
    "__eq__",
    "__format__",
    "__ge__",
    "__getattribute__",
    "__gt__",
    "__init__",
    "__init_subclass__",
    "__le__",
    "__lt__",
    "__ne__",
    "__new__",
    "__reduce__",
    "__reduce_ex__",
    "__repr__",
    "__setattr__",
    "__sizeof__",
    "__str__",
    "__subclasshook__",
];

const OBJECT_LEGACY_METHODS: &[&str] = &[
    "__delattr__",
    "__format__",
    "__getattribute__",
    "__init__",
    "__new__",
    "__reduce__",
    "__reduce_ex__",
    "__repr__",
    "__setattr__",
    "__sizeof__",
    "__str__",
    "__subclasshook__",
];

/// Members looked up on the type rather than bound to the instance.
pub(super) const TYPE_LEVEL_METHODS: &[&str] = &[
    "fromhex",
    "fromkeys",
    "from_bytes",
    "maketrans",
    "__class_getitem__",
    "__init_subclass__",
    "__new__",
    "__subclasshook__",
];

const GENERIC_ALIAS: &[&str] = &["__class_getitem__"];

const DICT_METHODS: &[&str] = &[
    "clear",
    "copy",
    "fromkeys",
    "get",
    "items",
    "keys",
    "pop",
    "popitem",
    "setdefault",
    "update",
    "values",
    "__contains__",
    "__delitem__",
    "__getitem__",
    "__ior__",
    "__iter__",
    "__len__",
    "__or__",
    "__reversed__",
    "__ror__",
    "__setitem__",
];

const DICT_LEGACY_METHODS: &[&str] = &[
    "clear",
    "copy",
    "fromkeys",
    "get",
    "has_key",
    "items",
    "iteritems",
    "iterkeys",
    "itervalues",
    "keys",
    "pop",
    "popitem",
    "setdefault",
    "update",
    "values",
    "viewitems",
    "viewkeys",
    "viewvalues",
    "__cmp__",
    "__contains__",
    "__delitem__",
    "__getitem__",
    "__iter__",
    "__len__",
    "__setitem__",
];

const LIST_METHODS: &[&str] = &[
    "append",
    "clear",
    "copy",
    "count",
    "extend",
    "index",
    "insert",
    "pop",
    "remove",
    "reverse",
    "sort",
    "__add__",
    "__contains__",
    "__delitem__",
    "__getitem__",
    "__iadd__",
    "__imul__",
    "__iter__",
    "__len__",
    "__mul__",
    "__reversed__",
    "__rmul__",
    "__setitem__",
];

const LIST_LEGACY_METHODS: &[&str] = &[
    "append",
    "count",
    "extend",
    "index",
    "insert",
    "pop",
    "remove",
    "reverse",
    "sort",
    "__add__",
    "__contains__",
    "__delitem__",
    "__delslice__",
    "__getitem__",
    "__getslice__",
    "__iadd__",
    "__imul__",
    "__iter__",
    "__len__",
    "__mul__",
    "__reversed__",
    "__rmul__",
    "__setitem__",
    "__setslice__",
];

const SET_COMMON_METHODS: &[&str] = &[
    "copy",
    "difference",
    "intersection",
    "isdisjoint",
    "issubset",
    "issuperset",
    "symmetric_difference",
    "union",
    "__and__",
    "__contains__",
    "__iter__",
    "__len__",
    "__or__",
    "__rand__",
    "__ror__",
    "__rsub__",
    "__rxor__",
    "__sub__",
    "__xor__",
];

const SET_MUTATING_METHODS: &[&str] = &[
    "add",
    "clear",
    "difference_update",
    "discard",
    "intersection_update",
    "pop",
    "remove",
    "symmetric_difference_update",
    "update",
    "__iand__",
    "__ior__",
    "__isub__",
    "__ixor__",
];

const TUPLE_METHODS: &[&str] = &[
    "count",
    "index",
    "__add__",
    "__contains__",
    "__getitem__",
    "__getnewargs__",
    "__iter__",
    "__len__",
    "__mul__",
    "__rmul__",
];

const INT_METHODS: &[&str] = &[
    "as_integer_ratio",
    "bit_count",
    "bit_length",
    "conjugate",
    "from_bytes",
    "to_bytes",
    "__abs__",
    "__add__",
    "__and__",
    "__bool__",
    "__ceil__",
    "__divmod__",
    "__float__",
    "__floor__",
    "__floordiv__",
    "__getnewargs__",
    "__index__",
    "__int__",
    "__invert__",
    "__lshift__",
    "__mod__",
    "__mul__",
    "__neg__",
    "__or__",
    "__pos__",
    "__pow__",
    "__radd__",
    "__rand__",
    "__rdivmod__",
    "__rfloordiv__",
    "__rlshift__",
    "__rmod__",
    "__rmul__",
    "__ror__",
    "__round__",
    "__rpow__",
    "__rrshift__",
    "__rshift__",
    "__rsub__",
    "__rtruediv__",
    "__rxor__",
    "__sub__",
    "__truediv__",
    "__trunc__",
    "__xor__",
];

const INT_LEGACY_METHODS: &[&str] = &[
    "bit_length",
    "conjugate",
    "__abs__",
    "__add__",
    "__and__",
    "__cmp__",
    "__coerce__",
    "__div__",
    "__divmod__",
    "__float__",
    "__floordiv__",
    "__getnewargs__",
    "__hex__",
    "__index__",
    "__int__",
    "__invert__",
    "__long__",
    "__lshift__",
    "__mod__",
    "__mul__",
    "__neg__",
    "__nonzero__",
    "__oct__",
    "__or__",
    "__pos__",
    "__pow__",
    "__radd__",
    "__rand__",
    "__rdiv__",
    "__rdivmod__",
    "__rfloordiv__",
    "__rlshift__",
    "__rmod__",
    "__rmul__",
    "__ror__",
    "__rpow__",
    "__rrshift__",
    "__rshift__",
    "__rsub__",
    "__rtruediv__",
    "__rxor__",
    "__sub__",
    "__truediv__",
    "__trunc__",
    "__xor__",
];

const INT_DATA: &[(&str, i64)] = &[
    ("denominator", 1),
    ("imag", 0),
    ("numerator", 0),
    ("real", 0),
];

// Shared by every text type under either text model.
const TEXT_COMMON_METHODS: &[&str] = &[
    "capitalize",
    "center",
    "count",
    "encode",
    "endswith",
    "expandtabs",
    "find",
    "format",
    "index",
    "isalnum",
    "isalpha",
    "isdigit",
    "islower",
    "isspace",
    "istitle",
    "isupper",
    "join",
    "ljust",
    "lower",
    "lstrip",
    "partition",
    "replace",
    "rfind",
    "rindex",
    "rjust",
    "rpartition",
    "rsplit",
    "rstrip",
    "split",
    "splitlines",
    "startswith",
    "strip",
    "swapcase",
    "title",
    "translate",
    "upper",
    "zfill",
    "__add__",
    "__contains__",
    "__getitem__",
    "__getnewargs__",
    "__len__",
    "__mod__",
    "__mul__",
    "__rmod__",
    "__rmul__",
];

const TEXT_UNIFIED_METHODS: &[&str] = &[
    "casefold",
    "format_map",
    "isascii",
    "isdecimal",
    "isidentifier",
    "isnumeric",
    "isprintable",
    "maketrans",
    "removeprefix",
    "removesuffix",
    "__iter__",
];

const TEXT_LEGACY_METHODS: &[&str] = &["decode"];

const UNICODE_LEGACY_METHODS: &[&str] = &["isdecimal", "isnumeric"];

const BYTES_COMMON_METHODS: &[&str] = &[
    "capitalize",
    "center",
    "count",
    "decode",
    "endswith",
    "expandtabs",
    "find",
    "fromhex",
    "hex",
    "index",
    "isalnum",
    "isalpha",
    "isascii",
    "isdigit",
    "islower",
    "isspace",
    "istitle",
    "isupper",
    "join",
    "ljust",
    "lower",
    "lstrip",
    "maketrans",
    "partition",
    "removeprefix",
    "removesuffix",
    "replace",
    "rfind",
    "rindex",
    "rjust",
    "rpartition",
    "rsplit",
    "rstrip",
    "split",
    "splitlines",
    "startswith",
    "strip",
    "swapcase",
    "title",
    "translate",
    "upper",
    "zfill",
    "__add__",
    "__contains__",
    "__getitem__",
    "__iter__",
    "__len__",
    "__mod__",
    "__mul__",
    "__rmod__",
    "__rmul__",
];

const BYTEARRAY_LEGACY_METHODS: &[&str] = &[
    "append",
    "capitalize",
    "center",
    "count",
    "decode",
    "endswith",
    "expandtabs",
    "extend",
    "find",
    "fromhex",
    "index",
    "insert",
    "isalnum",
    "isalpha",
    "isdigit",
    "islower",
    "isspace",
    "istitle",
    "isupper",
    "join",
    "ljust",
    "lower",
    "lstrip",
    "partition",
    "pop",
    "remove",
    "replace",
    "reverse",
    "rfind",
    "rindex",
    "rjust",
    "rpartition",
    "rsplit",
    "rstrip",
    "split",
    "splitlines",
    "startswith",
    "strip",
    "swapcase",
    "title",
    "translate",
    "upper",
    "zfill",
    "__add__",
    "__alloc__",
    "__contains__",
    "__delitem__",
    "__getitem__",
    "__iadd__",
    "__imul__",
    "__iter__",
    "__len__",
    "__mul__",
    "__rmul__",
    "__setitem__",
];

const BYTES_ONLY_METHODS: &[&str] = &["__bytes__", "__getnewargs__"];

const BYTEARRAY_ONLY_METHODS: &[&str] = &[
    "append",
    "clear",
    "copy",
    "extend",
    "insert",
    "pop",
    "remove",
    "reverse",
    "__alloc__",
    "__delitem__",
    "__iadd__",
    "__imul__",
    "__setitem__",
];

pub(super) const DICT: TypeTable = TypeTable {
    ty: BuiltinType::Dict,
    doc: "dict() -> new empty dictionary",
    hash_is_none: true,
    methods: &[OBJECT_METHODS, GENERIC_ALIAS, DICT_METHODS],
    ints: &[],
};

pub(super) const LIST: TypeTable = TypeTable {
    ty: BuiltinType::List,
    doc: "Built-in mutable sequence.",
    hash_is_none: true,
    methods: &[OBJECT_METHODS, GENERIC_ALIAS, LIST_METHODS],
    ints: &[],
};

pub(super) const SET: TypeTable = TypeTable {
    ty: BuiltinType::Set,
    doc: "Build an unordered collection of unique elements.",
    hash_is_none: true,
    methods: &[
        OBJECT_METHODS,
        GENERIC_ALIAS,
        SET_COMMON_METHODS,
        SET_MUTATING_METHODS,
    ],
    ints: &[],
};

pub(super) const FROZENSET: TypeTable = TypeTable {
    ty: BuiltinType::FrozenSet,
    doc: "Build an immutable unordered collection of unique elements.",
    hash_is_none: false,
    methods: &[OBJECT_METHODS, GENERIC_ALIAS, SET_COMMON_METHODS],
    ints: &[],
};

// Tuples define `__hash__`; whether it succeeds depends on the elements.
pub(super) const TUPLE: TypeTable = TypeTable {
    ty: BuiltinType::Tuple,
    doc: "Built-in immutable sequence.",
    hash_is_none: false,
    methods: &[OBJECT_METHODS, GENERIC_ALIAS, TUPLE_METHODS],
    ints: &[],
};

pub(super) const BOOL: TypeTable = TypeTable {
    ty: BuiltinType::Bool,
    doc: "Returns True when the argument is true, False otherwise.",
    hash_is_none: false,
    methods: &[OBJECT_METHODS, INT_METHODS],
    ints: INT_DATA,
};

pub(super) const STR_UNIFIED: TypeTable = TypeTable {
    ty: BuiltinType::Str,
    doc: "str(object='') -> str",
    hash_is_none: false,
    methods: &[OBJECT_METHODS, TEXT_COMMON_METHODS, TEXT_UNIFIED_METHODS],
    ints: &[],
};

pub(super) const STR_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Str,
    doc: "str(object='') -> string",
    hash_is_none: false,
    methods: &[OBJECT_LEGACY_METHODS, TEXT_COMMON_METHODS, TEXT_LEGACY_METHODS],
    ints: &[],
};

pub(super) const UNICODE_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Unicode,
    doc: "unicode(object='') -> unicode object",
    hash_is_none: false,
    methods: &[
        OBJECT_LEGACY_METHODS,
        TEXT_COMMON_METHODS,
        TEXT_LEGACY_METHODS,
        UNICODE_LEGACY_METHODS,
    ],
    ints: &[],
};

pub(super) const BYTES: TypeTable = TypeTable {
    ty: BuiltinType::Bytes,
    doc: "bytes(iterable_of_ints) -> bytes",
    hash_is_none: false,
    methods: &[OBJECT_METHODS, BYTES_COMMON_METHODS, BYTES_ONLY_METHODS],
    ints: &[],
};

pub(super) const BYTEARRAY: TypeTable = TypeTable {
    ty: BuiltinType::ByteArray,
    doc: "bytearray(iterable_of_ints) -> bytearray",
    hash_is_none: true,
    methods: &[OBJECT_METHODS, BYTES_COMMON_METHODS, BYTEARRAY_ONLY_METHODS],
    ints: &[],
};

pub(super) const DICT_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Dict,
    doc: "dict() -> new empty dictionary",
    hash_is_none: true,
    methods: &[OBJECT_LEGACY_METHODS, DICT_LEGACY_METHODS],
    ints: &[],
};

pub(super) const LIST_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::List,
    doc: "list() -> new empty list",
    hash_is_none: true,
    methods: &[OBJECT_LEGACY_METHODS, LIST_LEGACY_METHODS],
    ints: &[],
};

pub(super) const SET_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Set,
    doc: "set() -> new empty set object",
    hash_is_none: true,
    methods: &[OBJECT_LEGACY_METHODS, SET_COMMON_METHODS, SET_MUTATING_METHODS],
    ints: &[],
};

pub(super) const FROZENSET_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::FrozenSet,
    doc: "frozenset() -> empty frozenset object",
    hash_is_none: false,
    methods: &[OBJECT_LEGACY_METHODS, SET_COMMON_METHODS],
    ints: &[],
};

pub(super) const TUPLE_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Tuple,
    doc: "tuple() -> empty tuple",
    hash_is_none: false,
    methods: &[OBJECT_LEGACY_METHODS, TUPLE_METHODS],
    ints: &[],
};

pub(super) const BOOL_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::Bool,
    doc: "bool(x) -> bool",
    hash_is_none: false,
    methods: &[OBJECT_LEGACY_METHODS, INT_LEGACY_METHODS],
    ints: INT_DATA,
};

pub(super) const BYTEARRAY_LEGACY: TypeTable = TypeTable {
    ty: BuiltinType::ByteArray,
    doc: "bytearray(iterable_of_ints) -> bytearray",
    hash_is_none: true,
    methods: &[OBJECT_LEGACY_METHODS, BYTEARRAY_LEGACY_METHODS],
    ints: &[],
};
