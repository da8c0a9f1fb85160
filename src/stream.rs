//! Document splitter/joiner for `---`-separated YAML streams
//!
//! Splitting is a literal textual split on `\n---\n`, not YAML-aware
//! document-boundary detection. A `---` line inside a block scalar will
//! mis-split; this is a known limitation of the format this tool consumes.

/// Literal separator between document blocks in a multi-document stream.
pub const DOC_SEPARATOR: &str = "\n---\n";

/// Split raw input text into document blocks.
pub fn split(text: &str) -> Vec<&str> {
    text.split(DOC_SEPARATOR).collect()
}

/// Reassemble serialized blocks into a multi-document stream.
///
/// The first block is emitted as-is; every subsequent block is prefixed by
/// a line containing exactly `---`.
pub fn join<S: AsRef<str>>(blocks: &[S]) -> String {
    let mut out = String::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("---\n");
        }
        out.push_str(block.as_ref());
    }
    out
}
