//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{fs, path::Path};

pub use error::{OptionError, OptionResult};

use self::{args::Args, config::Config};
use crate::collection::disks::{DiskScanner, SpaceQuery};

/// Reads the config file at `path`, or returns the defaults if no path is given.
pub fn read_config(path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(path).map_err(|err| {
        OptionError::other(format!(
            "unable to read the config file at '{}': {err}",
            path.display()
        ))
    })?;

    Ok(toml_edit::de::from_str(&text)?)
}

/// Builds a [`DiskScanner`] from the arguments and config. Arguments take
/// precedence over the config file.
pub fn init_scanner<Q: SpaceQuery>(
    args: &Args, config: &Config, query: Q,
) -> OptionResult<DiskScanner<Q>> {
    let disk = config.disk();
    let mut scanner = DiskScanner::new(query).policy(disk.policy()?);

    if let Some(mounts) = &args.mounts {
        if mounts.as_os_str().is_empty() {
            return Err(OptionError::arg("'--mounts' must not be empty."));
        }
        scanner = scanner.mount_table(mounts);
    } else if let Some(mount_table) = disk.mount_table() {
        scanner = scanner.mount_table(mount_table);
    }

    Ok(scanner)
}
