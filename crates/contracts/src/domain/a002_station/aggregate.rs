use serde::{Deserialize, Serialize};

use crate::enums::station_status::StationStatus;
use crate::shared::list_query::Searchable;

/// Charging station. The address is a plain string with no district reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub location: String,
    pub connector_type: String,
    pub power_kw: f64,
    pub status: StationStatus,
}

impl Searchable for Station {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.location.as_str(),
        ]
    }
}

pub fn toggle_station_status(stations: &mut [Station], id: &str) -> Option<StationStatus> {
    let station = stations.iter_mut().find(|s| s.id == id)?;
    station.status = station.status.toggled();
    Some(station.status)
}

pub fn count_by_status(stations: &[Station], status: StationStatus) -> usize {
    stations.iter().filter(|s| s.status == status).count()
}
