use thiserror::Error;

/// Rejections raised before the store is touched. The messages are shown to
/// the user verbatim in the footer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Title and artist are both required.")]
    MissingField,

    #[error("Score must be a number between 0 and 100.")]
    ScoreOutOfRange(f64),

    #[error("Score must be a number between 0 and 100.")]
    InvalidScore(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Enter a search keyword.")]
    EmptyQuery,

    #[error("Enter the title of the song to delete.")]
    EmptyTitle,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure is a user input problem rather than an I/O fault.
    /// The UI turns the former into a warning and lets the latter propagate.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::EmptyQuery | Error::EmptyTitle
        )
    }
}
