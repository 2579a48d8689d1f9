//! Error types for large-file operations.

use {
    crate::FileOffset,
    libc::c_int,
    log::trace,
    std::io,
    thiserror::Error,
};

/// Errors that can occur during large-file operations.
///
/// Every failure of the underlying system call is classified into one of these variants and
/// returned to the caller. Nothing is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LargeFileError {
    /// Descriptor is closed or was never opened
    #[error("invalid file descriptor")]
    InvalidDescriptor,

    /// Access to the file or one of its parent directories was denied
    #[error("permission denied")]
    PermissionDenied,

    /// Offset or length does not fit into the native offset type of the platform
    #[error("offset {value} does not fit into the {bits}-bit native file offset")]
    RangeUnsupported { value: FileOffset, bits: u32 },

    /// Path does not exist and creation was not requested
    #[error("no such file or directory")]
    NotFound,

    /// Exclusive creation was requested but the path already exists
    #[error("file already exists")]
    AlreadyExists,

    /// Path or one of its components exceeds the platform limit
    #[error("file name too long")]
    NameTooLong,

    /// Path cannot be passed to the OS because it contains a nul byte
    #[error("path contains an interior nul byte")]
    InvalidPath,

    /// Operation is not supported by the kind of file behind the descriptor
    #[error("operation not supported on this file (errno {errno})")]
    UnsupportedOperation { errno: c_int },

    /// Any other I/O or system call error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LargeFileError {
    /// Classify a raw `errno` value.
    pub fn from_errno(errno: c_int) -> Self {
        let err = match errno {
            libc::EBADF => Self::InvalidDescriptor,
            libc::EACCES | libc::EPERM => Self::PermissionDenied,
            libc::ENOENT => Self::NotFound,
            libc::EEXIST => Self::AlreadyExists,
            libc::ENAMETOOLONG => Self::NameTooLong,
            libc::ESPIPE => Self::UnsupportedOperation { errno },
            _ => Self::Io(io::Error::from_raw_os_error(errno)),
        };
        trace!("classified errno {errno} as {err:?}");
        err
    }

    /// Classify the calling thread's current `errno`.
    pub fn last_os_error() -> Self {
        match io::Error::last_os_error().raw_os_error() {
            Some(errno) => Self::from_errno(errno),
            None => Self::Io(io::Error::other("system call failed without errno")),
        }
    }

    /// The `errno` value reported for this error through the C interface.
    pub fn raw_os_error(&self) -> c_int {
        match self {
            Self::InvalidDescriptor => libc::EBADF,
            Self::PermissionDenied => libc::EACCES,
            Self::RangeUnsupported { .. } => libc::EOVERFLOW,
            Self::NotFound => libc::ENOENT,
            Self::AlreadyExists => libc::EEXIST,
            Self::NameTooLong => libc::ENAMETOOLONG,
            Self::InvalidPath => libc::EINVAL,
            Self::UnsupportedOperation { errno } => *errno,
            Self::Io(err) => err.raw_os_error().unwrap_or(libc::EIO),
        }
    }
}

impl From<LargeFileError> for io::Error {
    fn from(err: LargeFileError) -> Self {
        match err {
            LargeFileError::Io(err) => err,
            LargeFileError::RangeUnsupported { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            LargeFileError::InvalidPath => io::Error::new(io::ErrorKind::InvalidInput, err),
            err => io::Error::from_raw_os_error(err.raw_os_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, test_case::test_case};

    #[test]
    fn test_error_display() {
        let err = LargeFileError::RangeUnsupported {
            value: 5_000_000_000,
            bits: 32,
        };
        assert_eq!(
            err.to_string(),
            "offset 5000000000 does not fit into the 32-bit native file offset"
        );

        let err = LargeFileError::InvalidDescriptor;
        assert_eq!(err.to_string(), "invalid file descriptor");

        let err = LargeFileError::UnsupportedOperation {
            errno: libc::ESPIPE,
        };
        assert_eq!(
            err.to_string(),
            format!("operation not supported on this file (errno {})", libc::ESPIPE)
        );
    }

    #[test_case(libc::EBADF; "bad descriptor")]
    #[test_case(libc::EACCES; "access denied")]
    #[test_case(libc::ENOENT; "not found")]
    #[test_case(libc::EEXIST; "exists")]
    #[test_case(libc::ENAMETOOLONG; "name too long")]
    #[test_case(libc::ESPIPE; "not seekable")]
    #[test_case(libc::EIO; "generic io")]
    #[test_case(libc::EFBIG; "file too big")]
    fn test_errno_round_trip(errno: c_int) {
        assert_eq!(LargeFileError::from_errno(errno).raw_os_error(), errno);
    }

    #[test]
    fn test_from_errno_classification() {
        assert_matches!(
            LargeFileError::from_errno(libc::EBADF),
            LargeFileError::InvalidDescriptor
        );
        assert_matches!(
            LargeFileError::from_errno(libc::EPERM),
            LargeFileError::PermissionDenied
        );
        assert_matches!(
            LargeFileError::from_errno(libc::ESPIPE),
            LargeFileError::UnsupportedOperation { errno } if errno == libc::ESPIPE
        );
        assert_matches!(
            LargeFileError::from_errno(libc::EINVAL),
            LargeFileError::Io(err) if err.kind() == io::ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_range_unsupported_reports_eoverflow() {
        let err = LargeFileError::RangeUnsupported {
            value: i64::MAX,
            bits: 32,
        };
        assert_eq!(err.raw_os_error(), libc::EOVERFLOW);
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = LargeFileError::NotFound.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.raw_os_error(), Some(libc::ENOENT));

        let io_err: io::Error = LargeFileError::RangeUnsupported {
            value: 1 << 40,
            bits: 32,
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

        let source = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let err: LargeFileError = source.into();
        match err {
            LargeFileError::Io(err) => {
                assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Io error"),
        }
    }
}
