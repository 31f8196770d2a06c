// 🗄️ Facility Store - in-memory residents, devices and alerts
//
// Handlers only see the FacilityRepository trait; FacilityStore is the
// process-memory implementation seeded at startup.
//
// Invariants:
// - identifiers are unique within each collection (checked on register)
// - collections keep insertion order

use crate::error::{Error, Result};
use crate::models::{Alert, AlertCategory, Device, DeviceStatus, Resident, Role};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// REPOSITORY TRAIT
// ============================================================================

/// Read access to the facility collections.
///
/// Lookups return exactly one match or `None`. Reads have no side effects.
pub trait FacilityRepository: Send + Sync {
    fn residents(&self) -> Vec<Resident>;
    fn resident(&self, id: u32) -> Option<Resident>;

    fn devices(&self) -> Vec<Device>;
    fn device(&self, id: &str) -> Option<Device>;

    fn alerts(&self) -> Vec<Alert>;
    fn alert(&self, id: u32) -> Option<Alert>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Facility data held in process memory.
///
/// Each collection sits behind its own lock, so a writer only ever blocks
/// readers of the collection it touches.
#[derive(Clone, Default)]
pub struct FacilityStore {
    residents: Arc<RwLock<Vec<Resident>>>,
    devices: Arc<RwLock<Vec<Device>>>,
    alerts: Arc<RwLock<Vec<Alert>>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl FacilityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the prototype's sample facility
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        store.register_sample_data();
        store
    }

    fn register_sample_data(&self) {
        let residents = [
            Resident::new(1, "Sarah", "101", Role::Resident, 3.1, 8),
            Resident::new(2, "John", "102", Role::Resident, 4.7, 4),
        ];
        let devices = [
            Device::new("d1", "Heater - Room 101", "101", 12.4, DeviceStatus::On),
            Device::new("d2", "Lamp - Lounge", "Lounge", 2.7, DeviceStatus::On),
            Device::new("d3", "Washer", "Utility", 8.3, DeviceStatus::Off),
        ];
        let alerts = [
            Alert::new(1, "Room 14", AlertCategory::Energy, "High heater use detected"),
            Alert::new(2, "Room 3", AlertCategory::Comfort, "Window open, room cooling"),
        ];

        // Sample ids are distinct literals; pushing directly skips the checks.
        write(&self.residents).extend(residents);
        write(&self.devices).extend(devices);
        write(&self.alerts).extend(alerts);

        tracing::debug!(
            residents = read(&self.residents).len(),
            devices = read(&self.devices).len(),
            alerts = read(&self.alerts).len(),
            "Sample facility data registered"
        );
    }

    /// Register a resident, rejecting a duplicate id
    pub fn register_resident(&self, resident: Resident) -> Result<()> {
        let mut residents = write(&self.residents);
        if residents.iter().any(|r| r.id == resident.id) {
            return Err(Error::DuplicateId {
                collection: "resident",
                id: resident.id.to_string(),
            });
        }
        residents.push(resident);
        Ok(())
    }

    /// Register a device, rejecting a duplicate id
    pub fn register_device(&self, device: Device) -> Result<()> {
        let mut devices = write(&self.devices);
        if devices.iter().any(|d| d.id == device.id) {
            return Err(Error::DuplicateId {
                collection: "device",
                id: device.id,
            });
        }
        devices.push(device);
        Ok(())
    }

    /// Register an alert, rejecting a duplicate id
    pub fn register_alert(&self, alert: Alert) -> Result<()> {
        let mut alerts = write(&self.alerts);
        if alerts.iter().any(|a| a.id == alert.id) {
            return Err(Error::DuplicateId {
                collection: "alert",
                id: alert.id.to_string(),
            });
        }
        alerts.push(alert);
        Ok(())
    }
}

impl FacilityRepository for FacilityStore {
    fn residents(&self) -> Vec<Resident> {
        read(&self.residents).clone()
    }

    fn resident(&self, id: u32) -> Option<Resident> {
        read(&self.residents).iter().find(|r| r.id == id).cloned()
    }

    fn devices(&self) -> Vec<Device> {
        read(&self.devices).clone()
    }

    fn device(&self, id: &str) -> Option<Device> {
        read(&self.devices).iter().find(|d| d.id == id).cloned()
    }

    fn alerts(&self) -> Vec<Alert> {
        read(&self.alerts).clone()
    }

    fn alert(&self, id: u32) -> Option<Alert> {
        read(&self.alerts).iter().find(|a| a.id == id).cloned()
    }
}
