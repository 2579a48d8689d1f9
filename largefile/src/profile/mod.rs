//! Build-time selection of the native file primitives.
//!
//! Exactly one implementation of [`LargeFileOps`] is compiled for a target and exported as
//! [`Native`]. There is no runtime detection: a target that matches no profile fails to build.

use {
    crate::{
        error::LargeFileError, mode::FileModeInfo, offset::Whence, stat::FileStat, FileOffset,
    },
    libc::{c_int, c_uint},
    std::{ffi::CStr, os::fd::RawFd},
};

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "solaris",
    target_os = "illumos",
))]
mod classic;
#[cfg(target_os = "linux")]
mod lfs64;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "solaris",
    target_os = "illumos",
))]
pub use classic::Classic as Native;
#[cfg(target_os = "linux")]
pub use lfs64::Lfs64 as Native;

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "solaris",
    target_os = "illumos",
)))]
compile_error!("agave-largefile has no platform profile for this target_os");

/// Family of native file primitives available on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformProfile {
    /// Transitional `*64` entry points taking `off64_t` (Linux)
    Lfs64,
    /// Only the classic entry points, offsets limited to the width of `off_t` (BSD, Apple, Solaris)
    Classic,
}

/// Profile selected for the current target.
pub const PROFILE: PlatformProfile = Native::PROFILE;

/// Width of the offset type accepted by the native primitives.
pub const OFFSET_BITS: u32 = Native::OFFSET_BITS;

/// Largest offset or length the native primitives can represent.
pub const MAX_OFFSET: FileOffset = Native::MAX_OFFSET;

/// Whether offsets beyond 2^31 - 1 can be addressed on this target.
pub const fn supports_large_files() -> bool {
    OFFSET_BITS >= 64
}

/// The native file primitives of one platform profile.
///
/// Every operation behaves like the POSIX call of the same name. Offsets are always passed as
/// [`FileOffset`]; implementations backed by a narrower native type return
/// [`LargeFileError::RangeUnsupported`] for values they cannot represent.
pub trait LargeFileOps {
    const PROFILE: PlatformProfile;
    const OFFSET_BITS: u32;
    const MAX_OFFSET: FileOffset;

    fn seek(fd: RawFd, offset: FileOffset, whence: Whence) -> Result<FileOffset, LargeFileError>;

    fn stat(fd: RawFd) -> Result<FileStat, LargeFileError>;

    fn truncate(fd: RawFd, length: FileOffset) -> Result<(), LargeFileError>;

    /// Open `path` with native `O_*` flags. The caller is responsible for passing a zero `mode`
    /// when `O_CREAT` is not set.
    fn open(path: &CStr, flags: c_int, mode: c_uint) -> Result<RawFd, LargeFileError>;

    /// Store `errno` for the calling thread.
    fn set_errno(errno: c_int);

    fn file_mode(fd: RawFd) -> Result<FileModeInfo, LargeFileError> {
        Self::stat(fd).map(|stat| stat.mode_info())
    }
}
