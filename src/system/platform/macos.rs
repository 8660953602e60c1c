use std::process::Command;

use super::{BatteryStatus, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryStatus> {
        let output = Command::new("pmset").args(["-g", "batt"]).output().ok()?;
        if !output.status.success() {
            return None;
        }
        parse_pmset(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `pmset -g batt` output:
///
/// ```text
/// Now drawing from 'Battery Power'
///  -InternalBattery-0 (id=1234)	72%; discharging; 3:10 remaining present: true
/// ```
fn parse_pmset(output: &str) -> Option<BatteryStatus> {
    // Desktop Macs have no InternalBattery line.
    let line = output.lines().find(|l| l.contains("InternalBattery"))?;
    let percent = line
        .split('\t')
        .nth(1)
        .and_then(|s| s.split('%').next())
        .and_then(|s| s.trim().parse::<f64>().ok())?;

    let power_plugged = if output.contains("'AC Power'") {
        Some(true)
    } else if output.contains("'Battery Power'") {
        Some(false)
    } else {
        None
    };

    Some(BatteryStatus {
        percent,
        power_plugged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discharging_laptop() {
        let out = "Now drawing from 'Battery Power'\n -InternalBattery-0 (id=4653155)\t18%; discharging; 0:42 remaining present: true\n";
        let status = parse_pmset(out).unwrap();
        assert_eq!(status.percent, 18.0);
        assert_eq!(status.power_plugged, Some(false));
    }

    #[test]
    fn parses_charging_laptop() {
        let out = "Now drawing from 'AC Power'\n -InternalBattery-0 (id=4653155)\t64%; charging; 1:02 remaining present: true\n";
        let status = parse_pmset(out).unwrap();
        assert_eq!(status.percent, 64.0);
        assert_eq!(status.power_plugged, Some(true));
    }

    #[test]
    fn desktop_has_no_battery() {
        assert!(parse_pmset("Now drawing from 'AC Power'\n").is_none());
    }
}
