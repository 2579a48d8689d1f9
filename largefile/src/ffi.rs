//! C interface for hosts that consume the layer through its native call surface.
//!
//! Each function returns `-1` on failure and stores the error code in `errno`, mirroring the
//! system call it wraps. Offsets are `int64_t` on every platform.

use {
    crate::{
        error::LargeFileError,
        offset::Whence,
        profile::{LargeFileOps, Native},
        stat::FileStat,
        wrappers, FileOffset,
    },
    libc::{c_char, c_int, c_uint},
    std::ffi::CStr,
};

fn fail(err: LargeFileError) -> c_int {
    Native::set_errno(err.raw_os_error());
    -1
}

fn fail_errno(errno: c_int) -> c_int {
    Native::set_errno(errno);
    -1
}

/// `lseek` with a 64-bit offset. Returns the new position or `-1`.
#[unsafe(no_mangle)]
pub extern "C" fn largefile_seek(fd: c_int, offset: i64, whence: c_int) -> i64 {
    let Some(whence) = Whence::from_raw(whence) else {
        return FileOffset::from(fail_errno(libc::EINVAL));
    };
    match wrappers::seek(fd, offset, whence) {
        Ok(position) => position,
        Err(err) => FileOffset::from(fail(err)),
    }
}

/// `fstat` into a fixed-layout [`FileStat`]. Returns `0` or `-1`.
///
/// # Safety
///
/// `buf` must be null or valid for writing one `FileStat`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn largefile_fstat(fd: c_int, buf: *mut FileStat) -> c_int {
    if buf.is_null() {
        return fail_errno(libc::EFAULT);
    }
    match wrappers::stat(fd) {
        Ok(stat) => {
            // safety: caller guarantees buf is valid for writes
            unsafe { buf.write(stat) };
            0
        }
        Err(err) => fail(err),
    }
}

/// `ftruncate` with a 64-bit length. Returns `0` or `-1`.
#[unsafe(no_mangle)]
pub extern "C" fn largefile_ftruncate(fd: c_int, length: i64) -> c_int {
    match wrappers::truncate(fd, length) {
        Ok(()) => 0,
        Err(err) => fail(err),
    }
}

// O_TMPFILE shares bits with O_DIRECTORY, so the whole mask has to match.
fn creates_file(flags: c_int) -> bool {
    #[cfg(target_os = "linux")]
    if flags & libc::O_TMPFILE == libc::O_TMPFILE {
        return true;
    }
    flags & libc::O_CREAT != 0
}

/// `open` with native `O_*` flags. `mode` is only used when `O_CREAT` (or `O_TMPFILE` on Linux)
/// is set. Returns the new descriptor or `-1`.
///
/// # Safety
///
/// `path` must be null or point to a nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn largefile_open(path: *const c_char, flags: c_int, mode: c_int) -> c_int {
    if path.is_null() {
        return fail_errno(libc::EFAULT);
    }
    // safety: caller guarantees path is nul-terminated
    let path = unsafe { CStr::from_ptr(path) };
    let mode = if creates_file(flags) {
        mode as c_uint
    } else {
        0
    };
    match Native::open(path, flags, mode) {
        Ok(fd) => fd,
        Err(err) => fail(err),
    }
}

/// Raw `st_mode` bits of `fd`. Returns `0` or `-1`.
///
/// # Safety
///
/// `mode` must be null or valid for writing one `int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn largefile_file_mode(fd: c_int, mode: *mut c_int) -> c_int {
    if mode.is_null() {
        return fail_errno(libc::EFAULT);
    }
    match wrappers::stat(fd) {
        Ok(stat) => {
            // safety: caller guarantees mode is valid for writes
            unsafe { mode.write(stat.mode as c_int) };
            0
        }
        Err(err) => fail(err),
    }
}
