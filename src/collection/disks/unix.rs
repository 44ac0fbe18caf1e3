//! Filesystem statistics for Unix-like systems via `statvfs`.

use std::{ffi::CString, mem, os::unix::ffi::OsStrExt, path::Path};

use anyhow::bail;

use super::{SpaceQuery, Usage};

/// Queries filesystem statistics with `statvfs(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatvfsQuery;

impl Usage {
    #[allow(clippy::unnecessary_cast)]
    fn from_statvfs(vfs: &libc::statvfs) -> Self {
        // Block counts are in units of the fragment size; some systems leave
        // it unset, in which case the block size is used.
        let block_size = if vfs.f_frsize != 0 {
            vfs.f_frsize as u64
        } else {
            vfs.f_bsize as u64
        };

        Usage::new(vfs.f_blocks as u64, vfs.f_bavail as u64, block_size)
    }
}

impl SpaceQuery for StatvfsQuery {
    fn usage(&self, mount_point: &Path) -> anyhow::Result<Usage> {
        let path = CString::new(mount_point.as_os_str().as_bytes())?;
        let mut vfs = mem::MaybeUninit::<libc::statvfs>::uninit();

        // SAFETY: libc call, `path` is a valid C string and buf is a valid pointer to
        // write to.
        let result = unsafe { libc::statvfs(path.as_ptr(), vfs.as_mut_ptr()) };

        if result == 0 {
            // SAFETY: If result is 0, it succeeded, and vfs should be populated.
            let vfs = unsafe { vfs.assume_init() };
            Ok(Usage::from_statvfs(&vfs))
        } else {
            bail!(
                "statvfs failed for {path:?}: {}",
                std::io::Error::last_os_error()
            )
        }
    }
}
