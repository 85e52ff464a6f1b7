#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that the `parse` family of conversions can raise.
///
/// Only some conversions raise; others encode failure as a sentinel value in
/// the target type and never construct one of these. Each conversion's
/// documentation states which variants it can produce.
pub enum ParseError {
    /// The input reference itself was absent (`None`), as opposed to being
    /// empty text.
    NullArgument,
    /// The input text is not a syntactically valid numeral for the target
    /// type.
    Format {
        /// Details about the malformed input.
        message: String,
    },
    /// The input text is a valid numeral but lies outside the representable
    /// range of the target type.
    Overflow {
        /// The name of the target type whose range was exceeded.
        target: &'static str,
    },
}

/// The message used by `Format` errors that carry no bespoke text.
pub(crate) const FORMAT_MESSAGE: &str = "Input string was not in a correct format.";

impl ParseError {
    /// Builds a `Format` error with the standard message.
    pub(crate) fn format() -> Self {
        Self::Format { message: FORMAT_MESSAGE.to_string() }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument => write!(f, "Value cannot be null."),

            Self::Format { message } => write!(f, "{message}"),

            Self::Overflow { target } => {
                write!(f, "Value was either too large or too small for {target}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::ParseError;

    #[test]
    fn display_messages() {
        assert_eq!(ParseError::NullArgument.to_string(), "Value cannot be null.");
        assert_eq!(ParseError::format().to_string(),
                   "Input string was not in a correct format.");
        assert_eq!(ParseError::Overflow { target: "u16" }.to_string(),
                   "Value was either too large or too small for u16.");
    }
}
