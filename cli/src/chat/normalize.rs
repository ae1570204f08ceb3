//! # Text Normalizer
//!
//! File: cli/src/chat/normalize.rs
//!
//! Converts text into the form used for every comparison in the matcher:
//! lowercased, canonically decomposed (NFD), with combining diacritical marks
//! (U+0300..=U+036F) removed. User input is written in Portuguese, where
//! accents are routinely omitted or mistyped, so `"Época"`, `"EPOCA"` and
//! `"epoca"` must all compare equal.
//!
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Lowercase, decompose (NFD) and strip combining diacritical marks.
///
/// Total over all strings and idempotent:
/// `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use boteleitor::chat::normalize::normalize;
///
/// assert_eq!(normalize("ÉPOCA"), "epoca");
/// assert_eq!(normalize("Eleição"), "eleicao");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(normalize("ÉPOCA"), "epoca");
        assert_eq!(normalize("epoca"), "epoca");
        assert_eq!(normalize("ÓNde Voto?"), "onde voto?");
        assert_eq!(normalize("Não, São João"), "nao, sao joao");
        assert_eq!(normalize("Vice-Reitor(a)"), "vice-reitor(a)");
    }

    #[test]
    fn handles_precomposed_and_decomposed_input_alike() {
        // "é" as a single code point vs. "e" + U+0301
        assert_eq!(normalize("\u{00E9}"), normalize("e\u{0301}"));
        assert_eq!(normalize("e\u{0301}"), "e");
    }

    #[test]
    fn empty_and_plain_input_pass_through() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("quem vota"), "quem vota");
        assert_eq!(normalize("  espaços  "), "  espacos  ");
    }

    #[test]
    fn leaves_marks_outside_the_combining_block() {
        // Emoji and symbols are not diacritics and survive untouched.
        assert_eq!(normalize("🗳️ Voto"), "🗳️ voto");
        assert_eq!(normalize("70%"), "70%");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "Qual a data da eleição?",
            "ÀÁÂÃÄÅ àáâãäå Ç ç Ñ ñ",
            "İstanbul",
            "e\u{0301}\u{0327}",
            "Técnicos-administrativos: 15%",
            "🤖 Olá! Sou a Yve.",
            "\u{212B}ngström",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
