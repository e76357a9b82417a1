use std::path::PathBuf;

/// Why a single line of the move list was rejected.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected `<direction> <count>`, got {0:?}")]
    Malformed(String),
    #[error("unknown direction {0:?}, expected one of R, U, D, L")]
    Direction(String),
    #[error("invalid step count {0:?}")]
    Count(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseMoveError,
    },
    #[error("{part}: expected {expected}, computed {actual}")]
    Mismatch {
        part: &'static str,
        expected: usize,
        actual: usize,
    },
}
