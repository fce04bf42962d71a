use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError, PartialEq, Clone)]
pub enum Error {
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("record file is missing its header line")]
    MissingHeader,

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(error: std::io::Error) -> Self {
        Error::Io(format!("{}", error))
    }
}
