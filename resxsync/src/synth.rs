//! Accessor synthesis: missing-key computation, block rendering, and the
//! structural splice into the generated artifact.
//!
//! The generated file is treated as opaque text ending in two nested
//! closing braces (the generated type inside its namespace). New accessor
//! blocks are spliced immediately before the inner one; every byte of the
//! original text survives the splice in its original relative order.

use std::collections::BTreeSet;

use crate::error::Error;

/// The result of one synthesis pass.
#[derive(Debug, Clone)]
pub struct SynthOutcome {
    /// The merged artifact text. Identical to the input when `added` is
    /// empty.
    pub text: String,
    /// Keys a new accessor was synthesized for, in lexicographic order.
    pub added: Vec<String>,
}

/// Renders one read-only accessor block for `key`.
///
/// The shape mirrors the accessors already present in generated resource
/// files: a public static string property delegating to
/// `ResourceManager.GetString` with the ambient `resourceCulture`.
fn accessor_block(key: &str) -> String {
    format!(
        "\n        public static string {key} {{\n            \
         get {{\n                \
         return ResourceManager.GetString(\"{key}\", resourceCulture);\n            \
         }}\n        \
         }}"
    )
}

/// Locates the splice position: the second-to-last closing brace, which
/// closes the generated type (the last one closes the namespace).
fn insertion_point(text: &str) -> Result<usize, Error> {
    let last = text
        .rfind('}')
        .ok_or_else(|| Error::structure_error("no closing brace found"))?;
    text[..last].rfind('}').ok_or_else(|| {
        Error::structure_error("expected two nested closing braces at end of file")
    })
}

/// Merges accessors for `declared − generated` into `generated_text`.
///
/// Returns the original text unchanged (and an empty `added`) when nothing
/// is missing, so a second run over its own output is a no-op. Fails with
/// [`Error::Structure`] when the text does not contain the two-level
/// closing-brace structure needed to place the new blocks.
pub fn synthesize(
    declared: &BTreeSet<String>,
    generated: &BTreeSet<String>,
    generated_text: &str,
) -> Result<SynthOutcome, Error> {
    // BTreeSet difference iterates in ascending order, which is the
    // lexicographic block order required for reproducible output.
    let missing: Vec<String> = declared.difference(generated).cloned().collect();

    if missing.is_empty() {
        return Ok(SynthOutcome {
            text: generated_text.to_string(),
            added: missing,
        });
    }

    let point = insertion_point(generated_text)?;
    let blocks: Vec<String> = missing.iter().map(|key| accessor_block(key)).collect();

    let mut text = String::with_capacity(generated_text.len() + blocks.len() * 64);
    text.push_str(&generated_text[..point]);
    text.push('\n');
    text.push_str(&blocks.join("\n"));
    text.push_str("\n    ");
    text.push_str(&generated_text[point..]);

    Ok(SynthOutcome {
        text,
        added: missing,
    })
}
