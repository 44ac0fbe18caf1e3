//! Aggregate local disk capacity and free space.
//!
//! A scan reads the mount table one line at a time, drops read-only, remote
//! and pseudo filesystems, skips devices that were already counted, and sums
//! the statistics of whatever is left.

mod classifier;
mod mount_record;
mod seen;
mod usage;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::StatvfsQuery;
    } else {
        mod other;
        pub use other::StatvfsQuery;
    }
}

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

pub use classifier::{MountPolicy, Rejection, RemoteRule};
pub use mount_record::MountRecord;
pub use seen::SeenDevices;
pub use usage::{SpaceProber, SpaceQuery, Totals, Usage};

/// The default location of the mount table.
pub const PROC_MOUNTS: &str = "/proc/mounts";

/// Byte totals are divided by this before being reported.
const SCALE: u64 = 1000;

/// Total and free space summed over all local disks, in thousands of bytes.
///
/// If the mount table can't be read, both values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskAggregate {
    pub total: u64,
    pub free: u64,
}

impl From<Totals> for DiskAggregate {
    fn from(totals: Totals) -> Self {
        Self {
            total: totals.size / SCALE,
            free: totals.free / SCALE,
        }
    }
}

/// Scans a mount table and aggregates the space of every local disk on it.
#[derive(Debug, Clone)]
pub struct DiskScanner<Q> {
    mount_table: PathBuf,
    policy: MountPolicy,
    query: Q,
}

impl Default for DiskScanner<StatvfsQuery> {
    fn default() -> Self {
        Self::new(StatvfsQuery)
    }
}

impl<Q: SpaceQuery> DiskScanner<Q> {
    /// Creates a scanner over [`PROC_MOUNTS`] with the default [`MountPolicy`].
    pub fn new(query: Q) -> Self {
        Self {
            mount_table: PathBuf::from(PROC_MOUNTS),
            policy: MountPolicy::default(),
            query,
        }
    }

    /// Sets the mount table to read.
    pub fn mount_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.mount_table = path.into();
        self
    }

    /// Sets the policy deciding which mounts are counted.
    pub fn policy(mut self, policy: MountPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn mount_table_path(&self) -> &Path {
        &self.mount_table
    }

    /// Runs one scan of the mount table.
    ///
    /// This never fails; anything that can't be read simply doesn't count.
    pub fn scan(&self) -> DiskAggregate {
        match File::open(&self.mount_table) {
            Ok(file) => self.scan_lines(BufReader::new(file)),
            Err(err) => {
                debug!("Unable to open {:?}: {err}", self.mount_table);
                DiskAggregate::default()
            }
        }
    }

    /// Runs one scan over mount table lines from `reader`.
    pub fn scan_lines<R: BufRead>(&self, mut reader: R) -> DiskAggregate {
        let mut prober = SpaceProber::new(&self.query);
        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    trace!("Skipping unreadable mount table line: {err}");
                    continue;
                }
                Err(err) => {
                    debug!("Stopped reading the mount table early: {err}");
                    break;
                }
            }

            let record = match MountRecord::from_str(&line) {
                Ok(record) => record,
                Err(err) => {
                    trace!("Skipping malformed mount table line {:?}: {err}", line.trim_end());
                    continue;
                }
            };

            if let Err(reason) = self.policy.classify(&record) {
                trace!(
                    "Skipping {} at {:?}: {reason:?}",
                    record.device(),
                    record.mount_point()
                );
                continue;
            }

            prober.probe(record.mount_point(), record.device());
        }

        debug!(
            "Counted {} mount(s), highest usage {:.1}%.",
            prober.probed(),
            prober.max_used_percentage()
        );

        prober.finish().into()
    }
}
