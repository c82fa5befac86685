use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ParserError {
    DataError(String),
    IoError(String),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::DataError(msg) => write!(f, "Data Error: {}", msg),
            ParserError::IoError(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl Error for ParserError {}

impl From<serde_json::Error> for ParserError {
    fn from(err: serde_json::Error) -> Self {
        ParserError::DataError(err.to_string())
    }
}

impl From<std::io::Error> for ParserError {
    fn from(err: std::io::Error) -> Self {
        ParserError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParserError::DataError("test error".to_string());
        assert_eq!(error.to_string(), "Data Error: test error");
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let converted: ParserError = err.into();
        assert!(matches!(converted, ParserError::DataError(_)));
    }
}
