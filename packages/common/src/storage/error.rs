use std::fmt;

/// Errors that can occur while reading or writing the key-value surface.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The write would exceed the configured storage quota.
    QuotaExceeded { actual: u64, limit: u64 },
    /// The key is empty or contains characters the backend cannot store.
    InvalidKey(String),
    /// The backend refused the write.
    WriteRejected(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::QuotaExceeded { actual, limit } => {
                write!(f, "storage quota exceeded ({actual} > {limit} bytes)")
            }
            Self::InvalidKey(key) => write!(f, "invalid storage key: {key:?}"),
            Self::WriteRejected(msg) => write!(f, "write rejected: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
