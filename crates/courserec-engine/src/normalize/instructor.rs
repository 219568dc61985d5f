//! Instructor identity normalization.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());

/// Remove every non-word character, spaces included, so name variants such
/// as "Smith, John" and "SmithJohn" collapse to one identity key.
///
/// Two different people whose concatenated names coincide are merged as well.
pub fn normalize_instructor(raw: &str) -> String {
    NON_WORD.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_name_variants() {
        assert_eq!(normalize_instructor("Smith, John"), "SmithJohn");
        assert_eq!(normalize_instructor("Smith John"), "SmithJohn");
        assert_eq!(normalize_instructor("SmithJohn"), "SmithJohn");
        assert_eq!(normalize_instructor("Barkan, Christopher P."), "BarkanChristopherP");
    }

    #[test]
    fn keeps_unicode_letters_and_underscores() {
        assert_eq!(normalize_instructor("Müller-Lüdenscheidt, Ö_"), "MüllerLüdenscheidtÖ_");
    }

    #[test]
    fn idempotent() {
        let once = normalize_instructor("O'Neil, Mary-Kate");
        assert_eq!(once, "ONeilMaryKate");
        assert_eq!(normalize_instructor(&once), once);
    }
}
