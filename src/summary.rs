// 📊 Facility Summary - derived totals, never stored
//
// Recomputed on every call from whatever the collections hold at that
// instant. Nothing here caches.

use crate::models::{Alert, Device, Resident};
use crate::store::FacilityRepository;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default tariff (£ per kWh)
pub const DEFAULT_RATE_PER_KWH: f64 = 0.12;

/// Facility-wide aggregate served by `/api/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(rename = "totalDeviceKWh")]
    pub total_device_kwh: f64,

    #[serde(rename = "totalResidentKWh")]
    pub total_resident_kwh: f64,

    /// `total_device_kwh × rate`, rounded to 2 decimals
    pub estimated_cost: f64,

    pub resident_count: usize,
    pub device_count: usize,
    pub alerts_count: usize,
}

/// Round to 2 decimal places, ties away from zero.
///
/// Rounds the stored binary value, not its decimal spelling: 2.675 is held
/// as 2.67499… and rounds to 2.67. Non-finite input passes through.
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Sum from positive zero so an empty collection serializes as `0`
fn total_kwh(readings: impl Iterator<Item = f64>) -> f64 {
    readings.fold(0.0, |acc, kwh| acc + kwh)
}

/// Compute the summary over explicit collections. Empty input gives zeros.
pub fn calculate_summary(
    residents: &[Resident],
    devices: &[Device],
    alerts: &[Alert],
    rate_per_kwh: f64,
) -> Summary {
    let total_device_kwh = total_kwh(devices.iter().map(|d| d.kwh_today));
    let total_resident_kwh = total_kwh(residents.iter().map(|r| r.kwh_today));

    Summary {
        total_device_kwh,
        total_resident_kwh,
        estimated_cost: round_cents(total_device_kwh * rate_per_kwh),
        resident_count: residents.len(),
        device_count: devices.len(),
        alerts_count: alerts.len(),
    }
}

/// Compute the summary from the repository's current contents
pub fn summarize(repo: &dyn FacilityRepository, rate_per_kwh: f64) -> Summary {
    calculate_summary(&repo.residents(), &repo.devices(), &repo.alerts(), rate_per_kwh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertCategory, DeviceStatus, Role};
    use crate::store::FacilityStore;

    fn device(id: &str, kwh: f64) -> Device {
        Device::new(id, id, "room", kwh, DeviceStatus::On)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sample_facility_summary() {
        let store = FacilityStore::with_sample_data();
        let summary = summarize(&store, DEFAULT_RATE_PER_KWH);

        assert!(approx_eq(summary.total_device_kwh, 23.4));
        assert!(approx_eq(summary.total_resident_kwh, 7.8));
        assert_eq!(summary.estimated_cost, 2.81);
        assert_eq!(summary.resident_count, 2);
        assert_eq!(summary.device_count, 3);
        assert_eq!(summary.alerts_count, 2);
    }

    #[test]
    fn test_empty_collections_yield_zero() {
        let summary = calculate_summary(&[], &[], &[], DEFAULT_RATE_PER_KWH);

        assert_eq!(summary.total_device_kwh, 0.0);
        assert_eq!(summary.total_resident_kwh, 0.0);
        assert_eq!(summary.estimated_cost, 0.0);
        assert_eq!(summary.resident_count, 0);
        assert_eq!(summary.device_count, 0);
        assert_eq!(summary.alerts_count, 0);

        assert!(!summary.total_device_kwh.is_sign_negative());
        assert!(!summary.total_resident_kwh.is_sign_negative());
        assert!(!summary.estimated_cost.is_sign_negative());

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"totalDeviceKWh\":0.0"));
        assert!(!json.contains("-0.0"));
    }

    #[test]
    fn test_device_order_does_not_change_totals() {
        let forward = vec![device("a", 12.4), device("b", 2.7), device("c", 8.3), device("d", 0.55)];
        let mut reversed = forward.clone();
        reversed.reverse();
        let rotated = vec![forward[2].clone(), forward[0].clone(), forward[3].clone(), forward[1].clone()];

        let base = calculate_summary(&[], &forward, &[], DEFAULT_RATE_PER_KWH);
        for devices in [reversed, rotated] {
            let other = calculate_summary(&[], &devices, &[], DEFAULT_RATE_PER_KWH);
            assert!(approx_eq(base.total_device_kwh, other.total_device_kwh));
            assert_eq!(base.estimated_cost, other.estimated_cost);
        }
    }

    #[test]
    fn test_cost_for_known_totals() {
        let cases = [(0.0, 0.0), (1.0, 0.12), (9.99, 1.2), (23.4, 2.81), (41.7, 5.0), (100.25, 12.03)];

        for (kwh, expected) in cases {
            let summary = calculate_summary(&[], &[device("x", kwh)], &[], DEFAULT_RATE_PER_KWH);
            assert_eq!(summary.estimated_cost, expected, "kwh = {}", kwh);
        }
    }

    #[test]
    fn test_round_cents_uses_stored_value_near_ties() {
        // Each literal is stored just below the tie
        assert_eq!(round_cents(0.075), 0.07);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(0.015), 0.01);
        assert_eq!(round_cents(1.005), 1.0);
    }

    #[test]
    fn test_round_cents_non_finite_passthrough() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_cents_ties_away_from_zero() {
        assert_eq!(round_cents(2.808), 2.81);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(2.804), 2.8);
    }

    #[test]
    fn test_custom_rate() {
        let summary = calculate_summary(&[], &[device("x", 10.0)], &[], 0.3);
        assert_eq!(summary.estimated_cost, 3.0);
    }

    #[test]
    fn test_counts_follow_mutation() {
        let store = FacilityStore::with_sample_data();
        assert_eq!(summarize(&store, DEFAULT_RATE_PER_KWH).device_count, 3);

        store.register_device(device("d4", 1.6)).unwrap();
        store
            .register_resident(Resident::new(3, "Maloo", "Office", Role::Manager, 0.0, 0))
            .unwrap();
        store
            .register_alert(Alert::new(3, "Lounge", AlertCategory::Energy, "Lamp left on"))
            .unwrap();

        let summary = summarize(&store, DEFAULT_RATE_PER_KWH);
        assert_eq!(summary.device_count, store.devices().len());
        assert_eq!(summary.resident_count, 3);
        assert_eq!(summary.alerts_count, 3);
        assert!(approx_eq(summary.total_device_kwh, 25.0));
        assert_eq!(summary.estimated_cost, 3.0);
    }

    #[test]
    fn test_wire_names() {
        let summary = calculate_summary(&[], &[device("x", 1.0)], &[], DEFAULT_RATE_PER_KWH);
        let value = serde_json::to_value(&summary).unwrap();

        for key in [
            "totalDeviceKWh",
            "totalResidentKWh",
            "estimatedCost",
            "residentCount",
            "deviceCount",
            "alertsCount",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
