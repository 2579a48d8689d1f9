#![cfg_attr(
    not(feature = "agave-unstable-api"),
    deprecated(
        since = "3.1.0",
        note = "This crate has been marked for formal inclusion in the Agave Unstable API. From \
                v4.0.0 onward, the `agave-unstable-api` crate feature must be specified to \
                acknowledge use of an interface that may break without warning."
    )
)]
// Activate some of the Rust 2024 lints to make the future migration easier.
#![warn(if_let_rescope)]
#![warn(keyword_idents_2024)]
#![warn(missing_unsafe_on_extern)]
#![warn(rust_2024_guarded_string_incompatible_syntax)]
#![warn(rust_2024_incompatible_pat)]
#![warn(tail_expr_drop_order)]
#![warn(unsafe_attr_outside_unsafe)]
#![warn(unsafe_op_in_unsafe_fn)]

//! Large-file safe wrappers around the POSIX file primitives.
//!
//! Offsets and lengths are always [`FileOffset`] (64-bit). The native primitives used to
//! implement the wrappers are fixed at build time per target:
//!
//! * Linux uses the `lseek64`, `fstat64`, `ftruncate64` and `open64` entry points.
//! * BSD, Apple and Solaris targets use the classic calls. Values that do not fit into the
//!   native `off_t` are rejected with [`LargeFileError::RangeUnsupported`], never truncated.
//!
//! Building for any other target fails.
//!
//! # Examples
//!
//! ```no_run
//! use agave_largefile::*;
//!
//! # fn main() -> Result<(), LargeFileError> {
//! let fd = open("/tmp/big.dat", OpenFlags::WRITE | OpenFlags::CREATE, 0o644)?;
//! seek(fd, 5_000_000_000, Whence::Start)?;
//! truncate(fd, 5_000_000_000)?;
//! assert_eq!(stat(fd)?.size, 5_000_000_000);
//! assert_eq!(file_mode(fd)?.kind, FileKind::Regular);
//! # Ok(())
//! # }
//! ```
//!
//! Descriptors returned by [`open`] are owned by the caller.

mod error;
pub mod ffi;
mod mode;
mod offset;
mod open_flags;
pub mod profile;
mod stat;
mod wrappers;

pub use {
    error::LargeFileError,
    mode::{FileKind, FileModeInfo},
    offset::{FileOffset, Whence},
    open_flags::OpenFlags,
    profile::{supports_large_files, PlatformProfile, MAX_OFFSET, OFFSET_BITS, PROFILE},
    stat::FileStat,
    wrappers::{file_mode, open, seek, stat, truncate},
};
