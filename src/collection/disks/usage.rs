use std::path::Path;

use super::SeenDevices;

/// Filesystem statistics for one mount point, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    total_blocks: u64,
    available_blocks: u64,
    block_size: u64,
}

impl Usage {
    pub fn new(total_blocks: u64, available_blocks: u64, block_size: u64) -> Self {
        Self {
            total_blocks,
            available_blocks,
            block_size,
        }
    }

    /// Total size of the filesystem in bytes.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total_blocks.saturating_mul(self.block_size)
    }

    /// Bytes available to unprivileged users; reserved blocks are not included.
    #[inline]
    pub fn available(&self) -> u64 {
        self.available_blocks.saturating_mul(self.block_size)
    }

    /// Percentage of the filesystem in use, from 0 to 100. A filesystem with no
    /// blocks reports 0.
    pub fn used_percentage(&self) -> f64 {
        if self.total_blocks == 0 {
            0.0
        } else {
            let used = self.total_blocks.saturating_sub(self.available_blocks);
            (used as f64 * 100.0) / self.total_blocks as f64
        }
    }
}

/// Something that can return [`Usage`] for a mount point.
pub trait SpaceQuery {
    fn usage(&self, mount_point: &Path) -> anyhow::Result<Usage>;
}

impl<Q: SpaceQuery + ?Sized> SpaceQuery for &Q {
    fn usage(&self, mount_point: &Path) -> anyhow::Result<Usage> {
        (**self).usage(mount_point)
    }
}

/// Running byte totals over all probed mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub size: u64,
    pub free: u64,
}

/// Probes mounts one at a time, skipping devices it has already seen and
/// accumulating their sizes.
pub struct SpaceProber<Q> {
    query: Q,
    seen: SeenDevices,
    totals: Totals,
    probed: usize,
    max_used_percentage: f64,
}

impl<Q: SpaceQuery> SpaceProber<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            seen: SeenDevices::new(),
            totals: Totals::default(),
            probed: 0,
            max_used_percentage: 0.0,
        }
    }

    /// Adds the mount's size and free space to the running totals, returning
    /// the used percentage of the mount.
    ///
    /// Returns 0 without touching the totals if the device was already probed
    /// or if its statistics can't be read.
    pub fn probe(&mut self, mount_point: &Path, device: &str) -> f64 {
        // Avoid counting multiply-mounted devices more than once.
        if self.seen.check_and_mark(device) {
            trace!("Skipping {device} at {mount_point:?}, already counted.");
            return 0.0;
        }

        let usage = match self.query.usage(mount_point) {
            Ok(usage) => usage,
            Err(err) => {
                debug!("Ignoring {device} at {mount_point:?}: {err:#}");
                return 0.0;
            }
        };

        self.totals.size = self.totals.size.saturating_add(usage.total());
        self.totals.free = self.totals.free.saturating_add(usage.available());
        self.probed += 1;

        let percentage = usage.used_percentage();
        if percentage > self.max_used_percentage {
            self.max_used_percentage = percentage;
        }

        trace!("{device} at {mount_point:?} is {percentage:.1}% used.");
        percentage
    }

    #[inline]
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Number of mounts that contributed to the totals.
    #[inline]
    pub fn probed(&self) -> usize {
        self.probed
    }

    /// The highest used percentage over all probed mounts.
    #[inline]
    pub fn max_used_percentage(&self) -> f64 {
        self.max_used_percentage
    }

    /// Clears the seen devices and returns the final totals.
    pub fn finish(mut self) -> Totals {
        self.seen.clear();
        self.totals
    }
}
