//! Fallback for platforms without `statvfs`; every query fails, so no mount
//! contributes to the totals.

use std::path::Path;

use anyhow::bail;

use super::{SpaceQuery, Usage};

#[derive(Debug, Default, Clone, Copy)]
pub struct StatvfsQuery;

impl SpaceQuery for StatvfsQuery {
    fn usage(&self, mount_point: &Path) -> anyhow::Result<Usage> {
        bail!("filesystem statistics are unsupported on this platform ({mount_point:?})")
    }
}
