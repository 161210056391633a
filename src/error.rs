// Copyright (c) 2026 rezky_nightky

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No drawing surface could be acquired. Terminal for the run.
    #[error("no drawing surface available: {0}")]
    Unsupported(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::Unsupported, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_converts_to_io_unsupported() {
        let e: io::Error = Error::Unsupported("stdout is not a terminal".into()).into();
        assert_eq!(e.kind(), io::ErrorKind::Unsupported);
        assert!(e.to_string().contains("stdout is not a terminal"));
    }

    #[test]
    fn io_round_trips_through_error() {
        let e: Error = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        let back: io::Error = e.into();
        assert_eq!(back.kind(), io::ErrorKind::BrokenPipe);
    }
}
