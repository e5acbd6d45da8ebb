use serde::{Deserialize, Serialize};

/// Operational state of a charging station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

impl StationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            StationStatus::Online => "Online",
            StationStatus::Offline => "Offline",
            StationStatus::Maintenance => "Maintenance",
        }
    }

    /// Online/Offline switch from the station list. Stations under
    /// maintenance come back online.
    pub fn toggled(&self) -> Self {
        match self {
            StationStatus::Online => StationStatus::Offline,
            StationStatus::Offline | StationStatus::Maintenance => StationStatus::Online,
        }
    }

    pub fn all() -> [StationStatus; 3] {
        [
            StationStatus::Online,
            StationStatus::Offline,
            StationStatus::Maintenance,
        ]
    }
}
