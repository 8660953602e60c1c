use super::{Bottleneck, Language};
use crate::system::snapshot::SystemSnapshot;

const LOW_BATTERY_PERCENT: f64 = 20.0;

/// Silent without a battery. An unknown charger state counts as unplugged.
pub fn evaluate(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    let Some(percent) = snapshot.battery_percent else {
        return Vec::new();
    };
    let low = snapshot.power_plugged != Some(true) && percent < LOW_BATTERY_PERCENT;
    if !low {
        return Vec::new();
    }

    let finding = match language {
        Language::English => Bottleneck::new(
            "Low Battery",
            "Battery charge is below 20%, the system may lower performance to save power.",
            format!("Battery at {percent:.0}%, not connected to power."),
            &[
                "Connect the power adapter so the system does not throttle performance.",
                "Turn off low power mode in the system settings.",
            ],
        ),
        Language::Chinese => Bottleneck::new(
            "电量过低",
            "电池电量低于 20%，系统可能自动降频。",
            format!("当前电量 {percent:.0}% ，未连接电源。"),
            &[
                "连接电源适配器，避免系统自动降低性能。",
                "在设置里关闭“低电量模式”。",
            ],
        ),
    };
    vec![finding]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::healthy_snapshot;

    fn battery(percent: Option<f64>, plugged: Option<bool>) -> Vec<Bottleneck> {
        let mut s = healthy_snapshot();
        s.battery_percent = percent;
        s.power_plugged = plugged;
        evaluate(&s, Language::English)
    }

    #[test]
    fn low_and_unplugged() {
        let found = battery(Some(15.0), Some(false));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Low Battery");
        assert!(found[0].evidence.contains("15%"));
    }

    #[test]
    fn low_but_plugged() {
        assert!(battery(Some(15.0), Some(true)).is_empty());
    }

    #[test]
    fn no_battery() {
        assert!(battery(None, Some(false)).is_empty());
        assert!(battery(None, None).is_empty());
    }

    #[test]
    fn unknown_charger_state_counts_as_unplugged() {
        assert_eq!(battery(Some(10.0), None).len(), 1);
    }

    #[test]
    fn nan_charge_is_silent() {
        assert!(battery(Some(f64::NAN), Some(false)).is_empty());
        assert!(battery(Some(f64::NAN), None).is_empty());
    }

    #[test]
    fn twenty_percent_is_fine() {
        assert!(battery(Some(20.0), Some(false)).is_empty());
    }
}
