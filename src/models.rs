// 🏠 Facility Entities - Residents, Devices, Alerts
//
// Wire names follow the dashboard's JSON contract ("kWhToday", "type"),
// so every renamed field carries an explicit serde attribute.

use serde::{Deserialize, Serialize};

// ============================================================================
// RESIDENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Manager,
    Admin,
}

/// A person living in (or running) the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    /// Stable identity - unique within the store
    pub id: u32,

    pub name: String,

    /// Room label, e.g. "101"
    pub room: String,

    pub role: Role,

    /// Energy used today (kWh, non-negative)
    #[serde(rename = "kWhToday")]
    pub kwh_today: f64,

    /// Reward points earned for energy-friendly actions
    pub points: u32,
}

impl Resident {
    pub fn new(id: u32, name: &str, room: &str, role: Role, kwh_today: f64, points: u32) -> Self {
        Resident {
            id,
            name: name.to_string(),
            room: room.to_string(),
            role,
            kwh_today,
            points,
        }
    }
}

// ============================================================================
// DEVICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    On,
    Off,
}

/// A metered appliance installed somewhere in the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Stable identity, e.g. "d1"
    pub id: String,

    /// Display name, e.g. "Heater - Room 101"
    pub name: String,

    /// Room or location label
    pub room: String,

    #[serde(rename = "kWhToday")]
    pub kwh_today: f64,

    pub status: DeviceStatus,
}

impl Device {
    pub fn new(id: &str, name: &str, room: &str, kwh_today: f64, status: DeviceStatus) -> Self {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            room: room.to_string(),
            kwh_today,
            status,
        }
    }
}

// ============================================================================
// ALERT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    /// Unusual consumption (e.g. heater running hot)
    Energy,

    /// Occupant comfort (e.g. window open, room cooling)
    Comfort,
}

/// A monitoring condition that fired for a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub room: String,

    #[serde(rename = "type")]
    pub category: AlertCategory,

    /// Human-readable description shown on the dashboard
    pub message: String,
}

impl Alert {
    pub fn new(id: u32, room: &str, category: AlertCategory, message: &str) -> Self {
        Alert {
            id,
            room: room.to_string(),
            category,
            message: message.to_string(),
        }
    }
}
