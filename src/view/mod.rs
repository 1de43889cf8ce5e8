//! Text rendering of the upload form.

use std::io::{self, Write};

use crate::models::WorkflowState;

pub const TITLE: &str = "PDF Text Extractor";
pub const IDLE_LABEL: &str = "Extract Text";
pub const BUSY_LABEL: &str = "Extracting Text...";
pub const RESULT_HEADING: &str = "Extracted Text:";

pub fn trigger_label(state: &WorkflowState) -> &'static str {
    if state.loading {
        BUSY_LABEL
    } else {
        IDLE_LABEL
    }
}

/// Writes the whole form. Panels without content are left out; extracted
/// text is written exactly as received.
pub fn render<W: Write>(state: &WorkflowState, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;

    match &state.selected_file {
        Some(file) => writeln!(
            out,
            "Select PDF File (.pdf): {} ({} bytes)",
            file.name, file.size
        )?,
        None => writeln!(out, "Select PDF File (.pdf): no file chosen")?,
    }

    let label = trigger_label(state);
    if state.can_upload() {
        writeln!(out, "[ {} ]", label)?;
    } else {
        writeln!(out, "[ {} ] (disabled)", label)?;
    }

    if let Some(error) = state.error.as_deref().filter(|e| !e.is_empty()) {
        writeln!(out)?;
        writeln!(out, "Error: {}", error)?;
    }

    if let Some(text) = state.extracted_text.as_deref().filter(|t| !t.is_empty()) {
        writeln!(out)?;
        writeln!(out, "{}", RESULT_HEADING)?;
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
    }

    out.flush()
}

pub fn render_to_string(state: &WorkflowState) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(state, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
