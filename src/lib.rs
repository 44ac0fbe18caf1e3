//! Reports aggregate local-disk capacity and free space for a host.
//!
//! The [`DiskScanner`](collection::disks::DiskScanner) reads the mount table,
//! filters out read-only, remote and pseudo filesystems, counts each device
//! once, and sums the statistics of what remains.

#![warn(rust_2018_idioms)]
#[macro_use]
extern crate log;

pub mod collection;
pub mod options;

pub mod utils {
    pub mod logging;
}

pub use collection::disks::{DiskAggregate, DiskScanner};
