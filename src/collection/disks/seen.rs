use hashbrown::HashSet;

/// Devices that have already been accounted for during a single scan.
///
/// Keys are the device strings exactly as they appear in the mount table.
/// A device mounted at several mount points is only counted the first time
/// it is seen.
#[derive(Debug, Default)]
pub struct SeenDevices {
    devices: HashSet<String>,
}

impl SeenDevices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `device` was already present. Otherwise, marks it as
    /// seen and returns `false`.
    pub fn check_and_mark(&mut self, device: &str) -> bool {
        if self.devices.contains(device) {
            true
        } else {
            self.devices.insert(device.to_owned());
            false
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Forgets every device, releasing the backing storage.
    pub fn clear(&mut self) {
        self.devices.clear();
        self.devices.shrink_to_fit();
    }
}
