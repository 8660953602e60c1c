use windows_sys::Win32::System::Power::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

use super::{BatteryStatus, PlatformExtensions};

const BATTERY_FLAG_NO_BATTERY: u8 = 128;
const BATTERY_FLAG_UNKNOWN: u8 = 255;
const BATTERY_PERCENT_UNKNOWN: u8 = 255;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryStatus> {
        let mut status = unsafe { std::mem::zeroed::<SYSTEM_POWER_STATUS>() };
        let ok = unsafe { GetSystemPowerStatus(&mut status) };
        if ok == 0 {
            return None;
        }
        if status.BatteryFlag == BATTERY_FLAG_NO_BATTERY
            || status.BatteryFlag == BATTERY_FLAG_UNKNOWN
            || status.BatteryLifePercent == BATTERY_PERCENT_UNKNOWN
        {
            return None;
        }
        let power_plugged = match status.ACLineStatus {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        };
        Some(BatteryStatus {
            percent: f64::from(status.BatteryLifePercent),
            power_plugged,
        })
    }
}
