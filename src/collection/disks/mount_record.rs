//! Parsing of a single mount table line.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::bail;

/// One entry of the mount table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    device: String,
    mount_point: PathBuf,
    fs_type: String,
    options: String,
}

impl MountRecord {
    pub fn new(
        device: impl Into<String>, mount_point: impl Into<PathBuf>, fs_type: impl Into<String>,
        options: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
            fs_type: fs_type.into(),
            options: options.into(),
        }
    }

    /// Returns the device, exactly as written in the mount table.
    #[inline]
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Returns the (unescaped) mount point.
    #[inline]
    pub fn mount_point(&self) -> &Path {
        self.mount_point.as_path()
    }

    #[inline]
    pub fn fs_type(&self) -> &str {
        &self.fs_type
    }

    /// Returns the mount options, e.g. `rw,relatime`.
    #[inline]
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Whether the options mark this mount as read-only.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.options.starts_with("ro")
    }
}

/// Mount tables escape some characters in mount points as octal sequences.
fn fix_mount_point(s: &str) -> String {
    const ESCAPED_BACKSLASH: &str = "\\134";
    const ESCAPED_SPACE: &str = "\\040";
    const ESCAPED_TAB: &str = "\\011";
    const ESCAPED_NEWLINE: &str = "\\012";

    s.replace(ESCAPED_SPACE, " ")
        .replace(ESCAPED_TAB, "\t")
        .replace(ESCAPED_NEWLINE, "\n")
        .replace(ESCAPED_BACKSLASH, "\\")
}

impl FromStr for MountRecord {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<MountRecord> {
        // Example: `/dev/sda3 /home ext4 rw,relatime,data=ordered 0 0`
        let mut parts = line.split_whitespace();

        let device = match parts.next() {
            Some(device) => device.to_string(),
            None => bail!("missing device"),
        };

        let mount_point = match parts.next() {
            Some(mount_point) => PathBuf::from(fix_mount_point(mount_point)),
            None => bail!("missing mount point"),
        };

        let fs_type = match parts.next() {
            Some(fs_type) => fs_type.to_string(),
            None => bail!("missing filesystem type"),
        };

        // Anything after the options (dump/pass numbers) is ignored.
        let options = match parts.next() {
            Some(options) => options.to_string(),
            None => bail!("missing mount options"),
        };

        Ok(MountRecord {
            device,
            mount_point,
            fs_type,
            options,
        })
    }
}
