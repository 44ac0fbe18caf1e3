//! Decides which mount table entries count as local disks.

use super::MountRecord;

/// A single rule that marks a mount as remote (network-backed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRule {
    /// The device uses `host:path` syntax.
    HostPath,

    /// The filesystem type matches and the device is a `//server/share` path.
    SmbShare(String),

    /// The filesystem type starts with the given prefix.
    FsTypePrefix(String),

    /// The filesystem type is exactly the given name.
    FsType(String),
}

impl RemoteRule {
    /// Whether this rule marks `device`/`fs_type` as remote.
    pub fn matches(&self, device: &str, fs_type: &str) -> bool {
        match self {
            RemoteRule::HostPath => device.contains(':'),
            RemoteRule::SmbShare(smb) => fs_type == smb && device.starts_with("//"),
            RemoteRule::FsTypePrefix(prefix) => fs_type.starts_with(prefix.as_str()),
            RemoteRule::FsType(name) => fs_type == name,
        }
    }
}

/// Why a record was not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ReadOnly,
    Remote,
    NotLocalDevice,
}

/// The policy used to decide whether a mount table entry is a local,
/// writable disk.
///
/// The default matches the usual mountlist rules: a mount is remote if its
/// device contains a `:`, if it is an `smbfs` mount of a `//` share, if its
/// type starts with `nfs`, or if its type is `autofs`, `gfs` or `none`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPolicy {
    remote_rules: Vec<RemoteRule>,
    local_device_prefixes: Vec<String>,
}

impl Default for MountPolicy {
    fn default() -> Self {
        Self {
            remote_rules: vec![
                RemoteRule::HostPath,
                RemoteRule::SmbShare("smbfs".into()),
                RemoteRule::FsTypePrefix("nfs".into()),
                RemoteRule::FsType("autofs".into()),
                RemoteRule::FsType("gfs".into()),
                RemoteRule::FsType("none".into()),
            ],
            local_device_prefixes: vec!["/dev/".into(), "/dev2/".into()],
        }
    }
}

impl MountPolicy {
    /// Creates a policy from an ordered list of remote rules and the accepted
    /// local device prefixes.
    pub fn new(remote_rules: Vec<RemoteRule>, local_device_prefixes: Vec<String>) -> Self {
        Self {
            remote_rules,
            local_device_prefixes,
        }
    }

    #[inline]
    pub fn remote_rules(&self) -> &[RemoteRule] {
        &self.remote_rules
    }

    #[inline]
    pub fn local_device_prefixes(&self) -> &[String] {
        &self.local_device_prefixes
    }

    /// Returns the first remote rule matching `device`/`fs_type`, if any.
    pub fn remote_match(&self, device: &str, fs_type: &str) -> Option<&RemoteRule> {
        self.remote_rules
            .iter()
            .find(|rule| rule.matches(device, fs_type))
    }

    #[inline]
    pub fn is_remote(&self, device: &str, fs_type: &str) -> bool {
        self.remote_match(device, fs_type).is_some()
    }

    #[inline]
    pub fn is_local_device(&self, device: &str) -> bool {
        self.local_device_prefixes
            .iter()
            .any(|prefix| device.starts_with(prefix.as_str()))
    }

    /// Checks a record against the policy, returning why it was rejected if it
    /// should not be counted.
    pub fn classify(&self, record: &MountRecord) -> Result<(), Rejection> {
        if record.is_read_only() {
            Err(Rejection::ReadOnly)
        } else if self.is_remote(record.device(), record.fs_type()) {
            Err(Rejection::Remote)
        } else if !self.is_local_device(record.device()) {
            Err(Rejection::NotLocalDevice)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn is_eligible(&self, record: &MountRecord) -> bool {
        self.classify(record).is_ok()
    }
}
