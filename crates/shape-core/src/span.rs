pub type FileId = u64;

/// Source location of the expression a shape is attached to.
///
/// The oracle never interprets it; it is only handed back to the node factory
/// so placeholder nodes report at the right place.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SourceRef {
    pub file: FileId,
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for SourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SourceRef({}:{}:{})", self.file, self.line, self.column)
    }
}

impl SourceRef {
    pub fn new(file: FileId, line: u32, column: u32) -> SourceRef {
        SourceRef { file, line, column }
    }

    /// Location used for compiler-synthesized expressions.
    pub const fn internal() -> SourceRef {
        SourceRef {
            file: 0,
            line: 0,
            column: 0,
        }
    }
}
