//! Replacement of marked regions inside an existing document.
//!
//! A region is delimited by `<!-- NAME -->` and `<!-- NAME-END -->`. Both
//! markers survive a splice; only the text between them changes.

use crate::{DocgenError, Result};

/// Start marker for an anchor, e.g. `<!-- REFERENCE -->`.
pub fn start_marker(anchor: &str) -> String {
    format!("<!-- {anchor} -->")
}

/// End marker for an anchor, e.g. `<!-- REFERENCE-END -->`.
pub fn end_marker(anchor: &str) -> String {
    format!("<!-- {anchor}-END -->")
}

/// Replaces the text between the markers of `anchor` with `replacement`.
///
/// The first start marker is used, and the first end marker after it. The
/// replacement is surrounded by single newlines.
///
/// # Errors
///
/// Returns `AnchorNotFound` naming the missing marker when either marker
/// is absent.
///
/// # Example
///
/// ```
/// use confdoc::docs::splice;
///
/// let doc = "# Title\n<!-- REFERENCE -->\nstale\n<!-- REFERENCE-END -->\n";
/// let spliced = splice(doc, "REFERENCE", "fresh").unwrap();
/// assert_eq!(spliced, "# Title\n<!-- REFERENCE -->\nfresh\n<!-- REFERENCE-END -->\n");
/// ```
pub fn splice(document: &str, anchor: &str, replacement: &str) -> Result<String> {
    let start = start_marker(anchor);
    let end = end_marker(anchor);

    let content_start = document
        .find(&start)
        .map(|index| index + start.len())
        .ok_or_else(|| missing(anchor, &start))?;

    let content_end = document[content_start..]
        .find(&end)
        .map(|index| content_start + index)
        .ok_or_else(|| missing(anchor, &end))?;

    Ok(format!(
        "{}\n{replacement}\n{}",
        &document[..content_start],
        &document[content_end..]
    ))
}

/// Wraps file contents in a fenced code block.
///
/// Trailing newlines of `contents` are dropped so the closing fence follows
/// the last line directly.
pub fn fenced_block(language: &str, contents: &str) -> String {
    format!("```{language}\n{}\n```", contents.trim_end_matches(['\r', '\n']))
}

fn missing(anchor: &str, marker: &str) -> DocgenError {
    DocgenError::AnchorNotFound {
        anchor: anchor.to_string(),
        marker: marker.to_string(),
    }
}
