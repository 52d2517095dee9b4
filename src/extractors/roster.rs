// src/extractors/roster.rs

// --- Imports ---
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Leading role label, optionally qualified before the colon
// ("Geschäftsführer:", "Gesamtprokura gemeinsam mit einem Geschäftsführer:").
static ROLE_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:einzelvertretungsberechtigt(?:er|e)?|gesamtvertretungsberechtigt(?:er|e)?|geschäftsführer(?:in)?|geschäftsführende[r]?[ \t]+direktor(?:in)?|vorstand(?:smitglied|svorsitzender)?|vorsitzender|partner(?:in)?|liquidator(?:in)?|inhaber(?:in)?|persönlich[ \t]+haftende[r]?[ \t]+gesellschafter(?:in)?|einzelprokura|gesamtprokura|prokura|prokurist(?:in)?)\b[^:\n]{0,120}:\s*",
    )
    .expect("Failed to compile ROLE_LABEL_RE")
});

// Representation qualifiers trailing an entry.
static TRAILING_QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i),\s*(?:jeweils\s+)?(?:einzelvertretungsberechtigt|gesamtvertretungsberechtigt|mit\s+der\s+befugnis)\b.*$",
    )
    .expect("Failed to compile TRAILING_QUALIFIER_RE")
});

// "Surname, Given Name, Place, *DD.MM.YYYY", possibly several per line split by ';'.
static DATED_ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|;)\s*([^,;]+?,\s*[^,;]+?),[^;*]*\*\s*\d{1,2}\.\d{1,2}\.\d{4}")
        .expect("Failed to compile DATED_ENTRY_RE")
});

// A continuation line carrying only the birth-date tail.
static DATE_CONTINUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s*\d{1,2}\.\d{1,2}\.\d{4}").expect("Failed to compile DATE_CONTINUATION_RE")
});

const PLACEHOLDER: &str = "-";

// --- Data Structures ---
/// The layout shape a single roster entry was recognized as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterLine<'a> {
    /// Names anchored to a birth date; the place/date tail is already cut off.
    Dated(Vec<&'a str>),
    /// Comma-separated tokens of one line, paired up as `Surname, Given Name`.
    PairedList { line: &'a str, tokens: Vec<&'a str> },
    /// Labelled entry without any comma, kept as written.
    Verbatim(&'a str),
}

impl RosterLine<'_> {
    /// Display names carried by this entry, in line order.
    pub fn names(&self) -> Vec<String> {
        match self {
            RosterLine::Dated(names) => names.iter().map(|n| collapse_whitespace(n)).collect(),
            RosterLine::PairedList { line, tokens } => {
                if tokens.is_empty() {
                    Vec::new()
                } else if tokens.len() % 2 == 0 {
                    tokens
                        .chunks(2)
                        .map(|pair| collapse_whitespace(&format!("{}, {}", pair[0], pair[1])))
                        .collect()
                } else {
                    vec![collapse_whitespace(line)]
                }
            }
            RosterLine::Verbatim(line) => vec![collapse_whitespace(line)],
        }
    }
}

/// Picks the shape of one entry. Priority: dated, paired list, verbatim.
/// `labelled` tells whether a role label was stripped from the entry; an
/// unlabelled entry without a comma is section noise and yields `None`.
pub fn classify(entry: &str, labelled: bool) -> Option<RosterLine<'_>> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let dated: Vec<&str> = DATED_ENTRY_RE
        .captures_iter(entry)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect();
    if !dated.is_empty() {
        return Some(RosterLine::Dated(dated));
    }

    if entry.contains(',') {
        let tokens = entry
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        return Some(RosterLine::PairedList { line: entry, tokens });
    }

    if labelled {
        return Some(RosterLine::Verbatim(entry));
    }

    tracing::trace!("Dropping roster noise line: {:?}", entry);
    None
}

/// Splits a roster section into display names, in document order and
/// without duplicates. Never fails; unknown layouts produce fewer names.
pub fn parse_roster(section_text: &str) -> Vec<String> {
    let lines = logical_lines(section_text);
    let names = lines
        .iter()
        .filter_map(|line| {
            let (rest, labelled) = strip_role_label(line);
            let rest = TRAILING_QUALIFIER_RE.replace(rest, "");
            let rest = rest.trim();

            // Wrapped heading text and sub-headings such as
            // "Allgemeine Vertretungsregelung:".
            if rest.ends_with(':') {
                tracing::trace!("Dropping roster sub-heading: {:?}", rest);
                return None;
            }

            let shape = classify(rest, labelled)?;
            tracing::trace!("Roster line {:?} -> {:?}", rest, shape);
            Some(shape.names())
        })
        .flatten();

    let roster = dedup_preserving_order(names);
    tracing::debug!("Parsed {} roster entries", roster.len());
    roster
}

/// Drops empty entries and the `-` placeholder, keeping the first occurrence
/// of every remaining entry.
pub fn dedup_preserving_order<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| !n.is_empty() && n != PLACEHOLDER)
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

/// Trimmed non-empty lines, with birth-date continuation lines joined onto
/// the entry they belong to.
fn logical_lines(section_text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in section_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match lines.last_mut() {
            Some(previous) if DATE_CONTINUATION_RE.is_match(line) => {
                previous.push(' ');
                previous.push_str(line);
            }
            _ => lines.push(line.to_string()),
        }
    }
    lines
}

fn strip_role_label(line: &str) -> (&str, bool) {
    match ROLE_LABEL_RE.find(line) {
        Some(m) => (&line[m.end()..], true),
        None => (line, false),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_entries_keep_surname_and_given_name() {
        let section = "Geschäftsführer: Mustermann, Max, Musterhausen, *01.03.1988\n\
                       Geschäftsführer: Musterfrau, Erika, Musterdorf, *29.11.1945";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max", "Musterfrau, Erika"]);
    }

    #[test]
    fn labelled_pairs_without_dates() {
        let section = "Geschäftsführer: Mustermann, Max\nGeschäftsführer: Musterfrau, Erika\n";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max", "Musterfrau, Erika"]);
    }

    #[test]
    fn paired_list_on_one_line_is_regrouped() {
        let section = "Mustermann, Max, Musterfrau, Erika, Beispiel, Bernd";
        assert_eq!(
            parse_roster(section),
            vec!["Mustermann, Max", "Musterfrau, Erika", "Beispiel, Bernd"]
        );
    }

    #[test]
    fn odd_token_count_keeps_whole_line() {
        let section = "Mustermann, Max, Musterfrau";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max, Musterfrau"]);
    }

    #[test]
    fn labelled_line_without_comma_is_verbatim() {
        let section = "Partner: Max Mustermann";
        assert_eq!(parse_roster(section), vec!["Max Mustermann"]);
    }

    #[test]
    fn unlabelled_line_without_comma_is_noise() {
        let section = "Gesellschaft mit beschränkter Haftung\nPartner: Max Mustermann";
        assert_eq!(parse_roster(section), vec!["Max Mustermann"]);
    }

    #[test]
    fn placeholder_and_empty_results_are_dropped() {
        let section = "Geschäftsführer: -\nGeschäftsführer:\n\n";
        assert!(parse_roster(section).is_empty());
    }

    #[test]
    fn duplicates_keep_first_position() {
        let section = "Geschäftsführer: Mustermann, Max\n\
                       Geschäftsführer: Musterfrau, Erika\n\
                       Einzelvertretungsberechtigt: Mustermann,  Max";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max", "Musterfrau, Erika"]);
    }

    #[test]
    fn qualified_role_label_is_stripped() {
        let section = "Geschäftsführer, einzelvertretungsberechtigt: Mustermann, Max, Berlin, *01.01.1970";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max"]);
    }

    #[test]
    fn trailing_qualifier_is_removed() {
        let section = "Geschäftsführer: Mustermann, Max, einzelvertretungsberechtigt mit der Befugnis, im Namen der Gesellschaft mit sich selbst Rechtsgeschäfte abzuschließen";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max"]);
    }

    #[test]
    fn wrapped_birth_date_is_joined() {
        let section = "Geschäftsführer: Mustermann, Max, Frankfurt am Main,\n*01.03.1988";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max"]);
    }

    #[test]
    fn several_dated_people_on_one_line() {
        let section = "Mustermann, Max, Berlin, *01.03.1988; Musterfrau, Erika, Hamburg, *29.11.1945";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max", "Musterfrau, Erika"]);
    }

    #[test]
    fn heading_continuation_is_dropped() {
        let section = "Direktoren, persönlich haftende Gesellschafter, Partner, Vertretungsberechtigte und besondere Vertretungsbefugnis:\n\
                       Geschäftsführer: Mustermann, Max";
        assert_eq!(parse_roster(section), vec!["Mustermann, Max"]);
    }

    #[test]
    fn classify_prefers_dated_shape() {
        let shape = classify("Muster, Max, Ort, *01.01.2000", false).unwrap();
        assert_eq!(shape, RosterLine::Dated(vec!["Muster, Max"]));
    }

    #[test]
    fn classify_paired_list_and_verbatim() {
        assert_eq!(
            classify("Muster, Max", false),
            Some(RosterLine::PairedList { line: "Muster, Max", tokens: vec!["Muster", "Max"] })
        );
        assert_eq!(classify("Max Muster", true), Some(RosterLine::Verbatim("Max Muster")));
        assert_eq!(classify("Max Muster", false), None);
        assert_eq!(classify("   ", true), None);
    }

    #[test]
    fn empty_section_gives_empty_roster() {
        assert!(parse_roster("").is_empty());
    }
}
