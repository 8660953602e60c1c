use std::path::Path;

use super::{BatteryStatus, PlatformExtensions};

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryStatus> {
        read_power_supply(Path::new(POWER_SUPPLY_ROOT))
    }
}

/// Scan a `power_supply` class directory.
///
/// Each entry has a `type` file: `Battery` entries carry `capacity` and
/// `status`, `Mains` entries carry `online`.
fn read_power_supply(root: &Path) -> Option<BatteryStatus> {
    let mut entries: Vec<_> = std::fs::read_dir(root)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .collect();
    entries.sort();

    let mut capacity = None;
    let mut battery_status = None;
    let mut mains_online = None;

    for dir in entries {
        let Some(kind) = read_trimmed(&dir.join("type")) else {
            continue;
        };
        match kind.as_str() {
            "Battery" if capacity.is_none() => {
                // Peripheral batteries (mice, keyboards) report scope=Device.
                if read_trimmed(&dir.join("scope")).as_deref() == Some("Device") {
                    continue;
                }
                capacity = read_trimmed(&dir.join("capacity")).and_then(|v| v.parse::<f64>().ok());
                battery_status = read_trimmed(&dir.join("status"));
            }
            "Mains" => {
                if let Some(online) = read_trimmed(&dir.join("online")) {
                    mains_online = Some(mains_online.unwrap_or(false) || online == "1");
                }
            }
            _ => {}
        }
    }

    let percent = capacity?;
    let power_plugged = mains_online.or_else(|| match battery_status.as_deref() {
        Some("Discharging") => Some(false),
        Some("Charging") | Some("Full") => Some(true),
        _ => None,
    });

    Some(BatteryStatus {
        percent,
        power_plugged,
    })
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}
