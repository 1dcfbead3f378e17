//! Shared error type across dump server crates.

use thiserror::Error;

/// Coarse error classes (stable, used in log fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Config file missing, malformed, or out of range.
    Config,
    /// Listening socket could not be bound.
    Bind,
    /// Generic I/O failure.
    Io,
    /// Request body could not be read.
    BodyRead,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Bind => "BIND",
            ErrorKind::Io => "IO",
            ErrorKind::BodyRead => "BODY_READ",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DumpSrvError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DumpSrvError {
    #[error("config: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("body read failed: {0}")]
    BodyRead(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DumpSrvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DumpSrvError::Config(_) => ErrorKind::Config,
            DumpSrvError::Bind { .. } => ErrorKind::Bind,
            DumpSrvError::Io(_) => ErrorKind::Io,
            DumpSrvError::BodyRead(_) => ErrorKind::BodyRead,
            DumpSrvError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Fatal errors end the process; everything else is logged and absorbed
    /// by the request that hit it.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Config | ErrorKind::Bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_read_is_not_fatal() {
        let e = DumpSrvError::BodyRead("reset by peer".into());
        assert_eq!(e.kind().as_str(), "BODY_READ");
        assert!(!e.is_fatal());
    }

    #[test]
    fn bind_is_fatal_and_names_addr() {
        let e = DumpSrvError::Bind {
            addr: "0.0.0.0:8080".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(e.is_fatal());
        assert!(e.to_string().contains("0.0.0.0:8080"));
    }
}
