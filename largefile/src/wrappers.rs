//! Large-file safe `lseek`, `fstat`, `ftruncate` and `open`.

use {
    crate::{
        error::LargeFileError,
        mode::FileModeInfo,
        offset::Whence,
        open_flags::OpenFlags,
        profile::{LargeFileOps, Native},
        stat::FileStat,
        FileOffset,
    },
    log::trace,
    std::{
        ffi::CString,
        os::{fd::RawFd, unix::ffi::OsStrExt},
        path::Path,
    },
};

/// Reposition the file offset of `fd` and return the resulting absolute position.
///
/// # Errors
///
/// Returns [`LargeFileError::InvalidDescriptor`] if `fd` is not open.
/// Returns [`LargeFileError::UnsupportedOperation`] if `fd` refers to a pipe, socket or FIFO.
/// Returns [`LargeFileError::RangeUnsupported`] if `offset` exceeds the native offset type.
pub fn seek(fd: RawFd, offset: FileOffset, whence: Whence) -> Result<FileOffset, LargeFileError> {
    Native::seek(fd, offset, whence)
}

/// Query metadata of `fd`.
///
/// # Errors
///
/// Returns [`LargeFileError::InvalidDescriptor`] if `fd` is not open.
pub fn stat(fd: RawFd) -> Result<FileStat, LargeFileError> {
    Native::stat(fd)
}

/// Set the length of the file behind `fd`, extending it with zeroes or cutting it off.
///
/// # Errors
///
/// Returns [`LargeFileError::InvalidDescriptor`] if `fd` is not open.
/// Returns [`LargeFileError::UnsupportedOperation`] if `fd` does not refer to a regular file.
/// Returns [`LargeFileError::RangeUnsupported`] if `length` exceeds the native offset type.
pub fn truncate(fd: RawFd, length: FileOffset) -> Result<(), LargeFileError> {
    Native::truncate(fd, length).map_err(|err| refine_truncate_error(fd, err))
}

// EINVAL covers both a bad length and a descriptor that cannot be truncated at all.
fn refine_truncate_error(fd: RawFd, err: LargeFileError) -> LargeFileError {
    if err.raw_os_error() != libc::EINVAL {
        return err;
    }
    match Native::file_mode(fd) {
        Ok(info) if !info.is_regular() => {
            trace!("truncate on non-regular file {:?}", info.kind);
            LargeFileError::UnsupportedOperation {
                errno: libc::EINVAL,
            }
        }
        _ => err,
    }
}

/// Open or create the file at `path` and return the new descriptor.
///
/// `mode` is only passed to the OS when `flags` contains [`OpenFlags::CREATE`]. The caller owns
/// the returned descriptor and is responsible for closing it.
///
/// # Errors
///
/// Returns [`LargeFileError::NotFound`] if `path` does not exist and `CREATE` is not set.
/// Returns [`LargeFileError::AlreadyExists`] if `CREATE | EXCLUSIVE` is set and `path` exists.
/// Returns [`LargeFileError::PermissionDenied`] if access is denied.
/// Returns [`LargeFileError::NameTooLong`] if the path exceeds the platform limits.
/// Returns [`LargeFileError::InvalidPath`] if `path` contains a nul byte.
pub fn open(path: impl AsRef<Path>, flags: OpenFlags, mode: u32) -> Result<RawFd, LargeFileError> {
    let path = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| LargeFileError::InvalidPath)?;
    let mode = if flags.contains(OpenFlags::CREATE) {
        mode
    } else {
        0
    };
    Native::open(&path, flags.to_native(), mode)
}

/// Classify the file behind `fd`.
///
/// Fails with [`LargeFileError::InvalidDescriptor`] for a closed descriptor rather than
/// reporting an unknown kind.
pub fn file_mode(fd: RawFd) -> Result<FileModeInfo, LargeFileError> {
    Native::file_mode(fd)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::mode::FileKind,
        assert_matches::assert_matches,
        std::{
            fs::File,
            io::Write,
            os::fd::{AsRawFd, FromRawFd, OwnedFd},
        },
        tempfile::TempDir,
    };

    fn create(dir: &TempDir, name: &str) -> OwnedFd {
        let fd = open(
            dir.path().join(name),
            OpenFlags::READ | OpenFlags::WRITE | OpenFlags::CREATE | OpenFlags::CLOEXEC,
            0o644,
        )
        .unwrap();
        // safety: fd was just opened and is not owned by anything else
        unsafe { OwnedFd::from_raw_fd(fd) }
    }

    #[test]
    fn test_seek_write_stat() {
        let dir = tempfile::tempdir().unwrap();
        let fd = create(&dir, "data.bin");

        assert_eq!(seek(fd.as_raw_fd(), 1000, Whence::Start).unwrap(), 1000);
        let mut file = File::from(fd);
        file.write_all(&[7; 24]).unwrap();

        assert_eq!(stat(file.as_raw_fd()).unwrap().size, 1024);
        assert_eq!(seek(file.as_raw_fd(), 0, Whence::Current).unwrap(), 1024);
        assert_eq!(seek(file.as_raw_fd(), -24, Whence::End).unwrap(), 1000);
    }

    #[test]
    fn test_seek_before_start() {
        let dir = tempfile::tempdir().unwrap();
        let fd = create(&dir, "data.bin");
        assert_matches!(
            seek(fd.as_raw_fd(), -1, Whence::Start),
            Err(LargeFileError::Io(err)) if err.raw_os_error() == Some(libc::EINVAL)
        );
    }

    #[test]
    fn test_truncate_grow_and_shrink() {
        let dir = tempfile::tempdir().unwrap();
        let fd = create(&dir, "data.bin");

        truncate(fd.as_raw_fd(), 8192).unwrap();
        assert_eq!(stat(fd.as_raw_fd()).unwrap().size, 8192);
        truncate(fd.as_raw_fd(), 0).unwrap();
        assert_eq!(stat(fd.as_raw_fd()).unwrap().size, 0);
    }

    #[test]
    fn test_truncate_directory_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let fd = open(dir.path(), OpenFlags::READ | OpenFlags::DIRECTORY, 0).unwrap();
        // safety: fd was just opened and is not owned by anything else
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };

        assert_eq!(file_mode(fd.as_raw_fd()).unwrap().kind, FileKind::Directory);
        let result = truncate(fd.as_raw_fd(), 0);
        #[cfg(target_os = "linux")]
        assert_matches!(
            result,
            Err(LargeFileError::UnsupportedOperation { errno: libc::EINVAL })
        );
        #[cfg(not(target_os = "linux"))]
        assert!(result.is_err());
    }

    #[test]
    fn test_open_mode_ignored_without_create() {
        let dir = tempfile::tempdir().unwrap();
        drop(create(&dir, "data.bin"));

        let fd = open(dir.path().join("data.bin"), OpenFlags::READ, 0o7777).unwrap();
        // safety: fd was just opened and is not owned by anything else
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };
        assert!(file_mode(fd.as_raw_fd()).unwrap().is_regular());
    }

    #[test]
    fn test_open_interior_nul() {
        assert_matches!(
            open("bad\0path", OpenFlags::READ, 0),
            Err(LargeFileError::InvalidPath)
        );
    }
}
