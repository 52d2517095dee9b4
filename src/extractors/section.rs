// src/extractors/section.rs

// --- Imports ---
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Heading Matching (Lazy Static) ---
// Item "b)" of the representation block. The registry words this heading in
// several ways, all accepted as alternatives of one pattern. Only the keywords
// are case-insensitive; the "b)" marker is matched exactly.
static MANAGEMENT_START_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?m)b\)[ \t]*(?i:vorstand|leitungsorgan|geschäftsführende[ \t]+direktoren|persönlich[ \t]+haftende[r]?[ \t]+gesellschafter|partner|vertretungsberechtigte)\b[^\n]*",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

// The numbered "Prokura" item. The body starts right after the label so that
// signatories written on the heading line are kept.
static PROKURA_START_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?m)^[ \t]*\d+\.[ \t]*(?i:prokura):?"]
        .iter()
        .filter_map(|pat| Regex::new(pat).ok())
        .collect()
});

// Any top-level numbered heading ("5. Prokura:", "6. a) Rechtsform").
// Birth dates like "01.03.1988" never match: the dot must be followed by whitespace.
static TOP_LEVEL_HEADING_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?m)^[ \t]*\d+\.\s"]
        .iter()
        .filter_map(|pat| Regex::new(pat).ok())
        .collect()
});

// A line that cannot belong to a wrapped heading: a numbered heading, a
// labelled entry with text after its colon, or a birth-date marker.
static HEADING_STOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*\d+\.\s|:[ \t]*\S|\*\s*\d{1,2}\.\d{1,2}\.\d{4}")
        .expect("Invalid heading stop regex")
});

// Upper bound on the lines a wrapped heading may span.
const MAX_HEADING_LINES: usize = 8;

/// Heading patterns used by the debug annotator.
pub const DEBUG_HEADING_PATTERNS: &[(&str, &str)] = &[
    (r"(?m)^[ \t]*\d+\.\s", "heading"),
    (r"a\)[ \t]*(?:Firma|Name)\b", "name-label"),
    (r"Geschäftsanschrift:", "address-label"),
];

// --- Main Locator Structure ---
/// Finds the sub-ranges of an excerpt that hold person rosters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionLocator;

impl SectionLocator {
    pub fn new() -> Self {
        Self
    }

    /// Byte range of the management roster body, if the heading exists.
    pub fn management_span(&self, full_text: &str) -> Option<Range<usize>> {
        self.find_section_bounds(full_text, "management", &MANAGEMENT_START_RE, true)
    }

    /// Byte range of the Prokura roster body, if the heading exists.
    pub fn prokura_span(&self, full_text: &str) -> Option<Range<usize>> {
        self.find_section_bounds(full_text, "prokura", &PROKURA_START_RE, false)
    }

    /// Finds the first heading matching any start pattern and returns the range
    /// from the body start up to the next top-level numbered heading. Without a
    /// closing heading the section runs to the end of the text.
    ///
    /// With `skip_heading_line` the body begins after the heading line, or after
    /// the line closing a heading wrapped over several lines. Otherwise it
    /// begins right after the matched heading text.
    fn find_section_bounds(
        &self,
        text: &str,
        section_name: &str,
        start_patterns: &[Regex],
        skip_heading_line: bool,
    ) -> Option<Range<usize>> {
        // First match in document order across all patterns wins.
        let heading = start_patterns
            .iter()
            .filter_map(|re| re.find(text))
            .min_by_key(|m| m.start())?;

        tracing::debug!(
            "Found '{}' heading at byte {}: {:?}",
            section_name,
            heading.start(),
            heading.as_str()
        );

        let body_start = if skip_heading_line {
            match text[heading.end()..].find('\n') {
                Some(offset) => {
                    self.wrapped_heading_end(text, heading.as_str(), heading.end() + offset + 1)
                }
                None => text.len(),
            }
        } else {
            heading.end()
        };

        let body = &text[body_start..];
        let body_end = TOP_LEVEL_HEADING_RE
            .iter()
            .filter_map(|re| re.find(body))
            .map(|m| body_start + m.start())
            .min()
            .unwrap_or_else(|| {
                tracing::debug!("No closing heading for '{}', taking rest of text", section_name);
                text.len()
            });

        Some(body_start..body_end)
    }

    /// PDF conversion wraps long headings. When the heading line does not end
    /// in `:`, the following lines up to one ending in `:` still belong to it,
    /// provided none of them is empty or looks like a roster entry. Returns the
    /// byte offset of the body start, `next_line` if the heading is not wrapped.
    fn wrapped_heading_end(&self, text: &str, heading_line: &str, next_line: usize) -> usize {
        if heading_line.trim_end().ends_with(':') {
            return next_line;
        }

        let mut pos = next_line;
        for line in text[next_line..].split_inclusive('\n').take(MAX_HEADING_LINES) {
            let content = line.trim();
            if content.is_empty() || HEADING_STOP_RE.is_match(line) {
                break;
            }
            pos += line.len();
            if content.ends_with(':') {
                tracing::debug!("Heading wraps up to byte {}", pos);
                return pos;
            }
        }
        next_line
    }
}

/// Returns the management roster text, or `""` when the excerpt has no
/// management heading.
pub fn locate(full_text: &str) -> &str {
    SectionLocator::new()
        .management_span(full_text)
        .map(|range| &full_text[range])
        .unwrap_or("")
}

/// Returns the Prokura roster text, or `""` when there is none.
pub fn locate_prokura(full_text: &str) -> &str {
    SectionLocator::new()
        .prokura_span(full_text)
        .map(|range| &full_text[range])
        .unwrap_or("")
}
