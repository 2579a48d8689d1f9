use {
    crate::error::LargeFileError,
    libc::c_int,
    log::debug,
    std::mem,
};

/// Alias for file offsets and lengths - since files can exceed 2GB, always use 64-bits
pub type FileOffset = i64;

/// Reference point for [`seek`](crate::seek).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Offset is absolute
    Start,
    /// Offset is relative to the current file position
    Current,
    /// Offset is relative to the end of the file
    End,
}

impl Whence {
    /// Native `SEEK_*` value.
    pub fn as_raw(self) -> c_int {
        match self {
            Self::Start => libc::SEEK_SET,
            Self::Current => libc::SEEK_CUR,
            Self::End => libc::SEEK_END,
        }
    }

    /// Map a native `SEEK_*` value, `None` for values the layer does not support.
    pub fn from_raw(whence: c_int) -> Option<Self> {
        match whence {
            libc::SEEK_SET => Some(Self::Start),
            libc::SEEK_CUR => Some(Self::Current),
            libc::SEEK_END => Some(Self::End),
            _ => None,
        }
    }
}

/// Convert `value` into a native offset type that may be narrower than 64 bits.
///
/// Fails with [`LargeFileError::RangeUnsupported`] instead of wrapping when `value` is outside
/// the range of `T`.
pub(crate) fn narrow_offset<T>(value: FileOffset) -> Result<T, LargeFileError>
where
    T: TryFrom<FileOffset>,
{
    T::try_from(value).map_err(|_| {
        let bits = u8::BITS.saturating_mul(mem::size_of::<T>() as u32);
        debug!("offset {value} rejected: native offset type is {bits}-bit");
        LargeFileError::RangeUnsupported { value, bits }
    })
}

/// Report an `EOVERFLOW` from the kernel as [`LargeFileError::RangeUnsupported`] when the
/// native offset type is narrower than 64 bits.
///
/// With a 64-bit native offset the error is returned unchanged.
pub(crate) fn overflow_to_range(
    err: LargeFileError,
    value: FileOffset,
    bits: u32,
) -> LargeFileError {
    if bits < FileOffset::BITS && err.raw_os_error() == libc::EOVERFLOW {
        debug!("kernel reported EOVERFLOW for {bits}-bit native offset");
        return LargeFileError::RangeUnsupported { value, bits };
    }
    err
}

/// Widen a native offset back to [`FileOffset`]. Only lossless conversions compile.
pub(crate) fn widen_offset<T>(value: T) -> FileOffset
where
    T: Into<FileOffset>,
{
    value.into()
}
