use std::error::Error as StdError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request was interrupted")]
    Interrupted,
}

pub type TransportResult<T> = Result<T, TransportError>;

impl TransportError {
    pub fn from_request(error: reqwest::Error) -> Self {
        if is_interrupted(&error) {
            return Self::Interrupted;
        }
        Self::Request(error.to_string())
    }

    pub fn from_body(error: reqwest::Error) -> Self {
        if is_interrupted(&error) {
            return Self::Interrupted;
        }
        Self::Body(error.to_string())
    }
}

/// Walks the source chain looking for an `Interrupted` I/O error.
fn is_interrupted(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(io_error) = err.downcast_ref::<io::Error>() {
            if io_error.kind() == io::ErrorKind::Interrupted {
                return true;
            }
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn detects_interrupted_io_error_in_source_chain() {
        let error = Wrapper(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        assert!(is_interrupted(&error));
    }

    #[test]
    fn other_io_errors_are_not_interruptions() {
        let error = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert!(!is_interrupted(&error));
    }
}
