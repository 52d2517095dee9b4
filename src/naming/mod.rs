// src/naming/mod.rs
//! Bounded, diacritic-free folder identifiers derived from company name and city.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const NAME_BUDGET: usize = 15;
pub const CITY_BUDGET: usize = 10;
pub const SEPARATOR: &str = "-";

// German letters are transliterated before the generic diacritic pass, which
// would otherwise turn "ü" into "u".
const GERMAN_TABLE: &[(char, &str)] = &[('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

/// Lowercase, dash-separated, diacritic-free form of `s`.
///
/// Idempotent: `sanitize(&sanitize(s)) == sanitize(s)`.
pub fn sanitize(s: &str) -> String {
    normalize(s, true)
}

/// Core of [`sanitize`]. Every whitespace character counts as a space and
/// control characters are dropped. The trim, when requested, runs after the
/// removals so that whitespace left in front of a removed comma goes too.
fn normalize(s: &str, trim: bool) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ',' | '`' | '´'))
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    let cleaned = if trim { cleaned.trim() } else { cleaned.as_str() };
    let cleaned = cleaned
        .replace(" - ", "-")
        .replace(" & ", "&")
        .to_lowercase()
        .replace(' ', "-");

    // Compose first so that a decomposed "u + diaeresis" still hits the table.
    let mut transliterated = String::with_capacity(cleaned.len());
    for c in cleaned.nfc() {
        match GERMAN_TABLE.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => transliterated.push_str(to),
            None => transliterated.push(c),
        }
    }

    transliterated.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// `s` unchanged if it fits into `max_len` bytes, else its first `max_len`
/// bytes, moved back to the previous char boundary if needed.
pub fn crop(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Sanitized segment that never exceeds `budget`.
///
/// The budget is applied to the source text (so expansions like "ü" -> "ue"
/// do not push later characters in) and once more to the sanitized result.
fn bounded_segment(raw: &str, budget: usize) -> String {
    let head = crop(raw.trim(), budget);
    crop(&normalize(head, false), budget).to_string()
}

/// Folder identifier for a company.
///
/// With `shorten` the segments are sanitized and bounded to 15 and 10 bytes,
/// otherwise name and city are joined verbatim.
pub fn build_folder_name(name: &str, city: &str, shorten: bool) -> String {
    if !shorten {
        return format!("{}{}{}", name, SEPARATOR, city);
    }
    format!(
        "{}{}{}",
        bounded_segment(name, NAME_BUDGET),
        SEPARATOR,
        bounded_segment(city, CITY_BUDGET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_german_company_name() {
        assert_eq!(sanitize("Müller & Söhne, Groß-Gerau"), "mueller&soehne-gross-gerau");
    }

    #[test]
    fn collapses_spaced_dash_and_strips_apostrophes() {
        assert_eq!(sanitize("  Kaiser´s Kaffee - Geschäft `Nord` "), "kaisers-kaffee-geschaeft-nord");
    }

    #[test]
    fn generic_diacritics_are_stripped() {
        assert_eq!(sanitize("Café Crème Ñandú"), "cafe-creme-nandu");
    }

    #[test]
    fn uppercase_umlauts_use_german_table() {
        assert_eq!(sanitize("ÖKO ÄRZTE ÜBER"), "oeko-aerzte-ueber");
    }

    #[test]
    fn decomposed_umlaut_uses_german_table() {
        assert_eq!(sanitize("Mu\u{0308}ller"), "mueller");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for s in [
            "Müller & Söhne, Groß-Gerau",
            " A - B & C ",
            "Café,  Crème",
            "",
            "x´y`z",
            "ÆØÅ æøå",
            "Muster GmbH\t,",
            "Muster GmbH ,",
            "A\u{a0}´",
            "Nord\n`",
            "Süd\u{7}GmbH\r\n,",
        ] {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn whitespace_before_removed_punctuation_is_trimmed() {
        assert_eq!(sanitize("Muster GmbH\t,"), "muster-gmbh");
        assert_eq!(sanitize("Muster\u{a0}GmbH ´"), "muster-gmbh");
        assert_eq!(sanitize("Süd\u{7}GmbH\r\n,"), "suedgmbh");
    }

    #[test]
    fn crop_keeps_short_strings() {
        assert_eq!(crop("berlin", 10), "berlin");
        assert_eq!(crop("friedrichshafen", 10), "friedrichs");
        assert_eq!(crop("", 0), "");
    }

    #[test]
    fn crop_respects_char_boundaries() {
        // "ü" occupies bytes 1..3.
        assert_eq!(crop("Müller", 2), "M");
        assert_eq!(crop("Müller", 3), "Mü");
    }

    #[test]
    fn verbatim_folder_name() {
        assert_eq!(build_folder_name("Müller AG", "Berlin", false), "Müller AG-Berlin");
        assert_eq!(build_folder_name("", "", false), "-");
    }

    #[test]
    fn shortened_folder_name() {
        assert_eq!(
            build_folder_name("Müller & Söhne, Groß-Gerau", "Friedrichshafen am Bodensee", true),
            "mueller&soehn-friedrichs"
        );
        assert_eq!(build_folder_name("Testfirma GmbH", "Berlin", true), "testfirma-gmbh-berlin");
    }

    #[test]
    fn shortened_name_is_cut_before_dash_collapsing() {
        // The 15-byte cut lands on the raw text, so the collapsed " - " leaves
        // room for fewer characters than cropping the sanitized name would.
        assert_eq!(build_folder_name("Bau - Service GmbH", "Berlin", true), "bau-service-g-berlin");
        assert_eq!(crop(&sanitize("Bau - Service GmbH"), NAME_BUDGET), "bau-service-gmb");
    }

    #[test]
    fn empty_inputs_shortened() {
        assert_eq!(build_folder_name("", "", true), "-");
    }

    #[test]
    fn shortened_segments_stay_within_budget() {
        let cases = [
            ("Übergroße Ölförderungsgesellschaft", "Außerhalb der Städte"),
            ("ÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄÄ", "ßßßßßßßßßßßß"),
            ("A Very Long Company Name Without Umlauts", "Some City"),
            ("İstanbul Holding", "İzmir"),
        ];
        for (name, city) in cases {
            let folder = build_folder_name(name, city, true);
            let head = bounded_segment(name, NAME_BUDGET);
            let tail = bounded_segment(city, CITY_BUDGET);
            assert_eq!(folder, format!("{}-{}", head, tail));
            assert!(head.chars().count() <= NAME_BUDGET, "{:?}", head);
            assert!(tail.chars().count() <= CITY_BUDGET, "{:?}", tail);
        }
    }
}
