#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryStatus {
    pub percent: f64,
    /// `None` when the OS reports a battery but not the charger state.
    pub power_plugged: Option<bool>,
}

pub trait PlatformExtensions {
    /// Current battery charge, or `None` when there is no battery or it
    /// cannot be read.
    fn battery() -> Option<BatteryStatus>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use unsupported as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn battery() -> Option<BatteryStatus> {
    platform_impl::Platform::battery()
}
