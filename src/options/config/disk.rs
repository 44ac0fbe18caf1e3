use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    collection::disks::{MountPolicy, RemoteRule},
    options::{OptionError, OptionResult},
};

/// Disk configuration. Anything left unset falls back to the usual local
/// disk rules.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct DiskConfig {
    /// The mount table to read.
    pub(crate) mount_table: Option<PathBuf>,

    /// Device prefixes that mark a mount as a local disk.
    pub(crate) local_device_prefixes: Option<Vec<String>>,

    /// Filesystem types that are always remote.
    pub(crate) remote_fs_types: Option<Vec<String>>,

    /// Filesystem type prefixes that are always remote, e.g. `nfs`.
    pub(crate) remote_fs_type_prefixes: Option<Vec<String>>,

    /// Filesystem types that are remote when mounted from a `//server/share`.
    pub(crate) smb_fs_types: Option<Vec<String>>,
}

fn non_empty(field: &str, values: Vec<String>) -> OptionResult<Vec<String>> {
    if values.iter().any(|value| value.is_empty()) {
        Err(OptionError::invalid_config_value(field))
    } else {
        Ok(values)
    }
}

impl DiskConfig {
    pub fn mount_table(&self) -> Option<&PathBuf> {
        self.mount_table.as_ref()
    }

    /// Builds the [`MountPolicy`] described by this config.
    pub fn policy(&self) -> OptionResult<MountPolicy> {
        let defaults = MountPolicy::default();

        let local_device_prefixes = match &self.local_device_prefixes {
            Some(prefixes) if prefixes.is_empty() => {
                return Err(OptionError::config(
                    "'local_device_prefixes' must contain at least one prefix.",
                ));
            }
            Some(prefixes) => non_empty("local_device_prefixes", prefixes.clone())?,
            None => defaults.local_device_prefixes().to_vec(),
        };

        let mut default_smb = Vec::new();
        let mut default_prefixes = Vec::new();
        let mut default_types = Vec::new();
        for rule in defaults.remote_rules() {
            match rule {
                RemoteRule::HostPath => {}
                RemoteRule::SmbShare(fs_type) => default_smb.push(fs_type.clone()),
                RemoteRule::FsTypePrefix(prefix) => default_prefixes.push(prefix.clone()),
                RemoteRule::FsType(fs_type) => default_types.push(fs_type.clone()),
            }
        }

        let smb_fs_types = self.smb_fs_types.clone().unwrap_or(default_smb);
        let remote_fs_type_prefixes = match &self.remote_fs_type_prefixes {
            Some(prefixes) => non_empty("remote_fs_type_prefixes", prefixes.clone())?,
            None => default_prefixes,
        };
        let remote_fs_types = self.remote_fs_types.clone().unwrap_or(default_types);

        let remote_rules = std::iter::once(RemoteRule::HostPath)
            .chain(smb_fs_types.into_iter().map(RemoteRule::SmbShare))
            .chain(remote_fs_type_prefixes.into_iter().map(RemoteRule::FsTypePrefix))
            .chain(remote_fs_types.into_iter().map(RemoteRule::FsType))
            .collect();

        Ok(MountPolicy::new(remote_rules, local_device_prefixes))
    }
}
