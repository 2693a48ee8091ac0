use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors from the strict conversions between bytes and alphabet letters.
///
/// Lenient conversions such as [`from_char`] never fail, since characters
/// outside of an alphabet are handled by its catch-all policy.
///
/// [`from_char`]: crate::data::types::CharAlphabet::from_char
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlphabetError {
    /// The byte is not in the alphabet's character domain.
    InvalidChar(u8),
    /// The sequence byte at the zero-based position is not in the sequence
    /// alphabet's character domain.
    InvalidSequenceChar { position: usize, byte: u8 },
    /// The quality byte at the zero-based position is not in the quality
    /// alphabet's character domain.
    InvalidQualityChar { position: usize, byte: u8 },
    /// The sequence and quality strings have different lengths.
    LengthMismatch { sequence: usize, quality: usize },
}

impl Display for AlphabetError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AlphabetError::InvalidChar(b) => write!(f, "The byte {b:?} is not a valid letter of the alphabet"),
            AlphabetError::InvalidSequenceChar { position, byte } => {
                write!(f, "Invalid sequence byte {byte:?} at position {position}")
            }
            AlphabetError::InvalidQualityChar { position, byte } => {
                write!(f, "Invalid quality score byte {byte:?} at position {position}")
            }
            AlphabetError::LengthMismatch { sequence, quality } => write!(
                f,
                "The sequence length ({sequence}) does not match the quality scores length ({quality})"
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl GetCode for AlphabetError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            AlphabetError::LengthMismatch { sequence: 4, quality: 3 }.to_string(),
            "The sequence length (4) does not match the quality scores length (3)"
        );
        assert_eq!(
            AlphabetError::InvalidQualityChar { position: 2, byte: b' ' }.to_string(),
            "Invalid quality score byte 32 at position 2"
        );
        assert_eq!(AlphabetError::InvalidChar(b'N').get_code(), 1);
    }
}
