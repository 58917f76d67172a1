use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Status {
    Internal(String),
    InvalidArgument(String),
    NotFound(String),
}

impl Status {
    pub fn new(msg: &str, err: impl Error) -> Self {
        Status::Internal(format!("{msg}: '{err}'"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Status::Internal(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Status::NotFound(msg.into())
    }
}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::new("IO error", err),
        }
    }
}

impl From<csv::Error> for Status {
    fn from(err: csv::Error) -> Self {
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            Self::new("csv read error", err)
        } else {
            Self::invalid_argument(format!("malformed csv: '{err}'"))
        }
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Self::new("serde error", err)
    }
}

impl Error for Status {}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Internal(msg) => write!(f, "Internal error: {msg}"),
            Status::InvalidArgument(msg) => write!(f, "Invalid argument error: {msg}"),
            Status::NotFound(msg) => write!(f, "Not found error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert!(matches!(Status::from(err), Status::NotFound(_)));
    }

    #[test]
    fn other_io_errors_are_internal() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(Status::from(err), Status::Internal(_)));
    }

    #[test]
    fn display_includes_message() {
        assert_eq!(
            Status::invalid_argument("bad schema").to_string(),
            "Invalid argument error: bad schema"
        );
    }
}
