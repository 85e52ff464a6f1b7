use logos::Logos;

/// Classifies one numeral written in the invariant decimal syntax.
///
/// A numeral is an optional ASCII sign followed by decimal digits, with an
/// optional fractional part and an optional exponent for the real forms. The
/// word forms `Infinity`, `-Infinity` and `NaN` are their own class; only the
/// binary floating-point conversions accept them.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Numeral {
    /// Plain integer text, such as `42`, `-7` or `+005`.
    #[regex(r"[+-]?[0-9]+")]
    Integer,
    /// Real-number text with a fractional part and no exponent, such as
    /// `3.14`, `-.5` or `2.`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*")]
    #[regex(r"[+-]?\.[0-9]+")]
    Real,
    /// Real-number text carrying an exponent, such as `6e23` or `-2.5E-2`.
    /// Kept apart from `Real` because the decimal conversions accept
    /// fractional forms but not exponent forms.
    #[regex(r"[+-]?[0-9]+\.[0-9]*[eE][+-]?[0-9]+")]
    #[regex(r"[+-]?\.[0-9]+[eE][+-]?[0-9]+")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Scientific,
    /// The invariant non-finite word forms.
    #[token("Infinity")]
    #[token("-Infinity")]
    #[token("NaN")]
    NonFinite,
}

/// Classifies `text` as a single numeral, or `None` if it is not one.
///
/// The whole of `text` must lex as exactly one token; trailing or embedded
/// garbage (including interior whitespace) fails classification. Callers trim
/// surrounding whitespace first.
pub(crate) fn classify(text: &str) -> Option<Numeral> {
    let mut lexer = Numeral::lexer(text);
    let numeral = lexer.next()?.ok()?;
    if lexer.next().is_some() {
        return None;
    }
    Some(numeral)
}

#[cfg(test)]
mod tests {
    use super::{Numeral, classify};

    #[test]
    fn classifies_integers() {
        assert_eq!(classify("0"), Some(Numeral::Integer));
        assert_eq!(classify("-128"), Some(Numeral::Integer));
        assert_eq!(classify("+42"), Some(Numeral::Integer));
        assert_eq!(classify("18446744073709551616"), Some(Numeral::Integer));
    }

    #[test]
    fn classifies_reals() {
        assert_eq!(classify("3.14"), Some(Numeral::Real));
        assert_eq!(classify(".5"), Some(Numeral::Real));
        assert_eq!(classify("2."), Some(Numeral::Real));
        assert_eq!(classify("-0.25"), Some(Numeral::Real));
    }

    #[test]
    fn keeps_exponent_forms_apart_from_fractions() {
        assert_eq!(classify("-2.1e-10"), Some(Numeral::Scientific));
        assert_eq!(classify("6E23"), Some(Numeral::Scientific));
        assert_eq!(classify("1e3"), Some(Numeral::Scientific));
        assert_eq!(classify(".5e1"), Some(Numeral::Scientific));
    }

    #[test]
    fn classifies_word_forms() {
        assert_eq!(classify("Infinity"), Some(Numeral::NonFinite));
        assert_eq!(classify("-Infinity"), Some(Numeral::NonFinite));
        assert_eq!(classify("NaN"), Some(Numeral::NonFinite));
    }

    #[test]
    fn rejects_non_numerals() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("abc"), None);
        assert_eq!(classify("1 2"), None);
        assert_eq!(classify("12x"), None);
        assert_eq!(classify("--5"), None);
        assert_eq!(classify("1.2.3"), None);
        assert_eq!(classify("."), None);
        assert_eq!(classify("e5"), None);
    }
}
