use serde::{Deserialize, Serialize};

/// A markup lexing or parsing error, with the 1-based source line it
/// was detected on. Lines are counted within the extracted fragment,
/// not the raw model response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkupError {
    pub line: u32,
    pub message: String,
}

impl MarkupError {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        MarkupError {
            line,
            message: message.into(),
        }
    }

    pub fn lex(line: u32, message: impl Into<String>) -> Self {
        MarkupError::new(line, message)
    }

    pub fn parse(line: u32, message: impl Into<String>) -> Self {
        MarkupError::new(line, message)
    }
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for MarkupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_message() {
        let e = MarkupError::parse(3, "mismatched closing tag </div>");
        assert_eq!(e.to_string(), "line 3: mismatched closing tag </div>");
    }
}
