use thiserror::Error;

/// Errors raised while reading or parsing instruction text.
///
/// Line numbers are 1-based and count every input line, blank or not.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected instructions: {0}")]
    EmptyInstructions(&'static str),

    #[error("line {line}: malformed surface: {reason}")]
    MalformedSurface { line: usize, reason: String },

    #[error("line {line}: malformed robot position: {reason}")]
    MalformedRobotPosition { line: usize, reason: String },

    #[error("line {line}: robot position has no instruction line")]
    MissingInstructionLine { line: usize },

    #[error("line {line}: expected 3 tokens (position) or 1 token (instructions), got {tokens}")]
    MalformedInputLine { line: usize, tokens: usize },

    #[error("line {line}: {count} instructions exceeds the limit of {max}")]
    TooManyInstructions { line: usize, count: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
