// src/utils/text_debug.rs
use std::fs;
use std::ops::Range;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Wraps each highlighted span in `[[label>>` ... `<<label]]` markers.
/// Overlapping spans are dropped after the first one in position order.
pub fn annotate_text(text: &str, highlights: &[(Range<usize>, &str)]) -> String {
    let mut sorted: Vec<&(Range<usize>, &str)> = highlights.iter().collect();
    sorted.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;

    for (range, label) in sorted {
        if range.start < last_pos || range.end > text.len() || range.start > range.end {
            tracing::trace!("Skipping overlapping or out-of-range span {:?} ({})", range, label);
            continue;
        }
        out.push_str(&text[last_pos..range.start]);
        out.push_str(&format!("[[{}>>", label));
        out.push_str(&text[range.clone()]);
        out.push_str(&format!("<<{}]]", label));
        last_pos = range.end;
    }

    out.push_str(&text[last_pos..]);
    out
}

/// Saves an annotated copy of the excerpt text for layout debugging.
/// `spans` are pre-computed regions, `patterns` are additional regexes whose
/// matches get highlighted too.
pub fn save_debug_text(
    text: &str,
    path: &Path,
    spans: &[(Range<usize>, &str)],
    patterns: &[(&str, &str)],
) -> Result<(), AppError> {
    let mut highlights: Vec<(Range<usize>, &str)> = spans.to_vec();

    for (pattern, label) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;
        for mat in re.find_iter(text) {
            highlights.push((mat.range(), *label));
        }
    }

    fs::write(path, annotate_text(text, &highlights))?;
    tracing::info!("Saved annotated excerpt to {}", path.display());
    Ok(())
}
