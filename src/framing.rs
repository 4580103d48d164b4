//! Whether a device's screenshots will be framed.
//!
//! Framing itself happens elsewhere; preflight only needs to know if a
//! device will be framed so it can require a screen definition for it.

use crate::config::{DeviceSettings, Platform};

/// Decides whether a device needs framing.
pub trait FramePolicy {
    /// Return true if screenshots from this device will be framed.
    fn frame_required(&self, platform: Platform, device_name: &str, settings: &DeviceSettings)
        -> bool;
}

/// Frame policy driven by the config file.
///
/// A device's own `frame` setting wins; otherwise the global `frame`
/// setting applies.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFramePolicy {
    global_frame: bool,
}

impl ConfigFramePolicy {
    /// Create a policy with the global `frame` setting.
    pub fn new(global_frame: bool) -> Self {
        Self { global_frame }
    }
}

impl FramePolicy for ConfigFramePolicy {
    fn frame_required(&self, _platform: Platform, _device_name: &str, settings: &DeviceSettings) -> bool {
        settings.frame.unwrap_or(self.global_frame)
    }
}
