//! Normalized file type and permission bits.

// `mode_t` is 16-bit on some platforms, widening into `u32` is lossless.
const S_IFMT: u32 = libc::S_IFMT as u32;
const S_IFREG: u32 = libc::S_IFREG as u32;
const S_IFDIR: u32 = libc::S_IFDIR as u32;
const S_IFCHR: u32 = libc::S_IFCHR as u32;
const S_IFBLK: u32 = libc::S_IFBLK as u32;
const S_IFIFO: u32 = libc::S_IFIFO as u32;
const S_IFLNK: u32 = libc::S_IFLNK as u32;
const S_IFSOCK: u32 = libc::S_IFSOCK as u32;

/// Type of the file behind a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    Fifo,
    Symlink,
    Socket,
    /// Type bits that match none of the known kinds
    Unknown,
}

impl FileKind {
    /// Type character as printed by `ls -l`.
    pub fn as_char(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Fifo => 'p',
            Self::Symlink => 'l',
            Self::Socket => 's',
            Self::Unknown => '?',
        }
    }
}

/// File type and permission bits of an open descriptor, see [`file_mode`](crate::file_mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileModeInfo {
    pub kind: FileKind,
    /// Permission bits including setuid, setgid and sticky
    pub permissions: u32,
}

impl FileModeInfo {
    pub const PERMISSION_MASK: u32 = 0o7777;

    /// Split raw `st_mode` bits into kind and permissions.
    pub fn from_mode(mode: u32) -> Self {
        let kind = match mode & S_IFMT {
            S_IFREG => FileKind::Regular,
            S_IFDIR => FileKind::Directory,
            S_IFCHR => FileKind::CharDevice,
            S_IFBLK => FileKind::BlockDevice,
            S_IFIFO => FileKind::Fifo,
            S_IFLNK => FileKind::Symlink,
            S_IFSOCK => FileKind::Socket,
            _ => FileKind::Unknown,
        };
        Self {
            kind,
            permissions: mode & Self::PERMISSION_MASK,
        }
    }

    pub fn is_regular(&self) -> bool {
        self.kind == FileKind::Regular
    }
}
