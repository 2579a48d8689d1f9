//! BSD, Apple and Solaris: only the classic entry points exist and offsets are `off_t` wide.
//!
//! On every currently supported target of this profile `off_t` is 64-bit, but the width is taken
//! from the type itself so a narrow `off_t` fails with `RangeUnsupported` instead of wrapping.

use {
    super::{LargeFileOps, PlatformProfile},
    crate::{
        error::LargeFileError,
        offset::{narrow_offset, overflow_to_range, widen_offset, Whence},
        stat::FileStat,
        FileOffset,
    },
    libc::{c_int, c_uint},
    std::{ffi::CStr, mem, os::fd::RawFd},
};

pub struct Classic;

impl LargeFileOps for Classic {
    const PROFILE: PlatformProfile = PlatformProfile::Classic;
    const OFFSET_BITS: u32 = libc::off_t::BITS;
    #[allow(clippy::unnecessary_cast)]
    const MAX_OFFSET: FileOffset = libc::off_t::MAX as FileOffset;

    fn seek(fd: RawFd, offset: FileOffset, whence: Whence) -> Result<FileOffset, LargeFileError> {
        let offset: libc::off_t = narrow_offset(offset)?;
        // safety: lseek does not access memory
        let position = unsafe { libc::lseek(fd, offset, whence.as_raw()) };
        if position < 0 {
            let err = LargeFileError::last_os_error();
            return Err(overflow_to_range(err, offset.into(), Self::OFFSET_BITS));
        }
        Ok(widen_offset(position))
    }

    fn stat(fd: RawFd) -> Result<FileStat, LargeFileError> {
        // safety: stat is a POD type, zero-initialization is standard
        let mut st: libc::stat = unsafe { mem::zeroed() };
        // safety: st is a valid, writable stat
        let result = unsafe { libc::fstat(fd, &mut st) };
        if result != 0 {
            // the file size itself is what does not fit
            let err = LargeFileError::last_os_error();
            return Err(overflow_to_range(err, Self::MAX_OFFSET, Self::OFFSET_BITS));
        }
        let (atime_nsec, mtime_nsec, ctime_nsec) = timestamp_nanos(&st);
        Ok(FileStat {
            dev: device_id(st.st_dev),
            ino: u64::from(st.st_ino),
            mode: u32::from(st.st_mode),
            uid: st.st_uid,
            gid: st.st_gid,
            nlink: u64::from(st.st_nlink),
            rdev: device_id(st.st_rdev),
            size: widen_offset(st.st_size),
            blksize: i64::from(st.st_blksize),
            blocks: i64::from(st.st_blocks),
            atime: i64::from(st.st_atime),
            atime_nsec,
            mtime: i64::from(st.st_mtime),
            mtime_nsec,
            ctime: i64::from(st.st_ctime),
            ctime_nsec,
        })
    }

    fn truncate(fd: RawFd, length: FileOffset) -> Result<(), LargeFileError> {
        let length: libc::off_t = narrow_offset(length)?;
        // safety: ftruncate does not access memory
        let result = unsafe { libc::ftruncate(fd, length) };
        if result != 0 {
            return Err(LargeFileError::last_os_error());
        }
        Ok(())
    }

    fn open(path: &CStr, flags: c_int, mode: c_uint) -> Result<RawFd, LargeFileError> {
        // safety: path is a valid nul-terminated string for the duration of the call
        let fd = unsafe { libc::open(path.as_ptr(), flags, mode) };
        if fd < 0 {
            return Err(LargeFileError::last_os_error());
        }
        Ok(fd)
    }

    fn set_errno(errno: c_int) {
        // safety: the errno location functions return a valid pointer to the thread-local errno
        unsafe { *errno_location() = errno };
    }
}

// dev_t is signed on Apple and OpenBSD, the bits are an opaque identifier.
#[allow(clippy::unnecessary_cast)]
fn device_id(dev: libc::dev_t) -> u64 {
    dev as u64
}

#[cfg(any(target_os = "netbsd", target_os = "openbsd"))]
fn timestamp_nanos(st: &libc::stat) -> (i64, i64, i64) {
    (
        i64::from(st.st_atimensec),
        i64::from(st.st_mtimensec),
        i64::from(st.st_ctimensec),
    )
}

#[cfg(not(any(target_os = "netbsd", target_os = "openbsd")))]
fn timestamp_nanos(st: &libc::stat) -> (i64, i64, i64) {
    (
        i64::from(st.st_atime_nsec),
        i64::from(st.st_mtime_nsec),
        i64::from(st.st_ctime_nsec),
    )
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__error() }
}

#[cfg(any(target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::__errno() }
}

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
unsafe fn errno_location() -> *mut c_int {
    unsafe { libc::___errno() }
}
