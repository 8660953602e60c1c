use super::{BatteryStatus, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryStatus> {
        None
    }
}
