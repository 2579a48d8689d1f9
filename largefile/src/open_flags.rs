use {bitflags::bitflags, libc::c_int};

bitflags! {
    /// Options for [`open`](crate::open).
    ///
    /// Access mode is derived from `READ` and `WRITE`: with only `WRITE` the file is opened
    /// write-only, with both read-write, otherwise read-only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        /// Create the file if it does not exist, `mode` is only used with this flag
        const CREATE = 1 << 2;
        /// With `CREATE`, fail if the file already exists
        const EXCLUSIVE = 1 << 3;
        const TRUNCATE = 1 << 4;
        const APPEND = 1 << 5;
        const NONBLOCK = 1 << 6;
        const SYNC = 1 << 7;
        const CLOEXEC = 1 << 8;
        const NOFOLLOW = 1 << 9;
        const DIRECTORY = 1 << 10;
    }
}

impl OpenFlags {
    /// Native `O_*` flags passed to the open system call.
    pub fn to_native(self) -> c_int {
        let mut native = match (self.contains(Self::READ), self.contains(Self::WRITE)) {
            (true, true) => libc::O_RDWR,
            (false, true) => libc::O_WRONLY,
            _ => libc::O_RDONLY,
        };
        for (flag, native_flag) in [
            (Self::CREATE, libc::O_CREAT),
            (Self::EXCLUSIVE, libc::O_EXCL),
            (Self::TRUNCATE, libc::O_TRUNC),
            (Self::APPEND, libc::O_APPEND),
            (Self::NONBLOCK, libc::O_NONBLOCK),
            (Self::SYNC, libc::O_SYNC),
            (Self::CLOEXEC, libc::O_CLOEXEC),
            (Self::NOFOLLOW, libc::O_NOFOLLOW),
            (Self::DIRECTORY, libc::O_DIRECTORY),
        ] {
            if self.contains(flag) {
                native |= native_flag;
            }
        }
        native
    }
}
