use crate::{mode::FileModeInfo, FileOffset};

/// Metadata of an open descriptor as reported by [`stat`](crate::stat).
///
/// All fields have a fixed width independent of the platform, so the struct can also be handed
/// out through the C interface. `size` carries the full 64-bit file length on every profile; when
/// the native `off_t` is narrower it holds the widened native value.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub dev: u64,
    pub ino: u64,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub nlink: u64,
    pub rdev: u64,
    pub size: FileOffset,
    pub blksize: i64,
    pub blocks: i64,
    pub atime: i64,
    pub atime_nsec: i64,
    pub mtime: i64,
    pub mtime_nsec: i64,
    pub ctime: i64,
    pub ctime_nsec: i64,
}

impl FileStat {
    pub fn mode_info(&self) -> FileModeInfo {
        FileModeInfo::from_mode(self.mode)
    }
}
