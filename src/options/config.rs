pub mod disk;

use serde::Deserialize;

use self::disk::DiskConfig;

/// The top-level config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct Config {
    pub(crate) disk: Option<DiskConfig>,
}

impl Config {
    /// Returns the disk section, or the defaults if there is none.
    pub fn disk(&self) -> DiskConfig {
        self.disk.clone().unwrap_or_default()
    }
}
