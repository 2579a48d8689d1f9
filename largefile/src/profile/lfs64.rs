//! Linux: transitional large-file entry points.

use {
    super::{LargeFileOps, PlatformProfile},
    crate::{
        error::LargeFileError,
        offset::{narrow_offset, overflow_to_range, widen_offset, Whence},
        stat::FileStat,
        FileOffset,
    },
    libc::{c_int, c_uint},
    static_assertions::const_assert_eq,
    std::{ffi::CStr, mem, os::fd::RawFd},
};

// The *64 entry points take the offset unmodified.
const_assert_eq!(mem::size_of::<libc::off64_t>(), mem::size_of::<FileOffset>());

pub struct Lfs64;

impl LargeFileOps for Lfs64 {
    const PROFILE: PlatformProfile = PlatformProfile::Lfs64;
    const OFFSET_BITS: u32 = libc::off64_t::BITS;
    const MAX_OFFSET: FileOffset = libc::off64_t::MAX;

    fn seek(fd: RawFd, offset: FileOffset, whence: Whence) -> Result<FileOffset, LargeFileError> {
        let offset: libc::off64_t = narrow_offset(offset)?;
        // safety: lseek64 does not access memory
        let position = unsafe { libc::lseek64(fd, offset, whence.as_raw()) };
        if position < 0 {
            let err = LargeFileError::last_os_error();
            return Err(overflow_to_range(err, offset.into(), Self::OFFSET_BITS));
        }
        Ok(widen_offset(position))
    }

    fn stat(fd: RawFd) -> Result<FileStat, LargeFileError> {
        // safety: stat64 is a POD type, zero-initialization is standard
        let mut st: libc::stat64 = unsafe { mem::zeroed() };
        // safety: st is a valid, writable stat64
        let result = unsafe { libc::fstat64(fd, &mut st) };
        if result != 0 {
            // the file size itself is what does not fit
            let err = LargeFileError::last_os_error();
            return Err(overflow_to_range(err, Self::MAX_OFFSET, Self::OFFSET_BITS));
        }
        Ok(FileStat {
            dev: st.st_dev,
            ino: st.st_ino,
            mode: st.st_mode,
            uid: st.st_uid,
            gid: st.st_gid,
            nlink: u64::from(st.st_nlink),
            rdev: st.st_rdev,
            size: widen_offset(st.st_size),
            blksize: i64::from(st.st_blksize),
            blocks: i64::from(st.st_blocks),
            atime: i64::from(st.st_atime),
            atime_nsec: i64::from(st.st_atime_nsec),
            mtime: i64::from(st.st_mtime),
            mtime_nsec: i64::from(st.st_mtime_nsec),
            ctime: i64::from(st.st_ctime),
            ctime_nsec: i64::from(st.st_ctime_nsec),
        })
    }

    fn truncate(fd: RawFd, length: FileOffset) -> Result<(), LargeFileError> {
        let length: libc::off64_t = narrow_offset(length)?;
        // safety: ftruncate64 does not access memory
        let result = unsafe { libc::ftruncate64(fd, length) };
        if result != 0 {
            return Err(LargeFileError::last_os_error());
        }
        Ok(())
    }

    fn open(path: &CStr, flags: c_int, mode: c_uint) -> Result<RawFd, LargeFileError> {
        // safety: path is a valid nul-terminated string for the duration of the call
        let fd = unsafe { libc::open64(path.as_ptr(), flags, mode) };
        if fd < 0 {
            return Err(LargeFileError::last_os_error());
        }
        Ok(fd)
    }

    fn set_errno(errno: c_int) {
        // safety: __errno_location returns a valid pointer to the thread-local errno
        unsafe { *libc::__errno_location() = errno };
    }
}
