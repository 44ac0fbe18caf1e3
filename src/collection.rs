//! Data collection.

pub mod disks;
