use thiserror::Error;

/// Domain reducer error types
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("Failed to read list file '{path}': {source}")]
    ReadList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReduceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_list_display_includes_path() {
        let err = ReduceError::ReadList {
            path: "lists/missing.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = format!("{}", err);
        assert!(display.contains("lists/missing.txt"), "got: {}", display);
        assert!(display.contains("no such file"), "got: {}", display);
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        match fails() {
            Err(ReduceError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_list_keeps_source() {
        use std::error::Error as _;

        let err = ReduceError::ReadList {
            path: "a.txt".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
