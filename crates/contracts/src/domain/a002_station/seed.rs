use super::aggregate::Station;
use crate::enums::station_status::StationStatus;

fn station(
    id: &str,
    name: &str,
    location: &str,
    connector_type: &str,
    power_kw: f64,
    status: StationStatus,
) -> Station {
    Station {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        connector_type: connector_type.to_string(),
        power_kw,
        status,
    }
}

pub fn sample_stations() -> Vec<Station> {
    use StationStatus::*;
    vec![
        station("ST-001", "Connaught Place Hub", "New Delhi, Delhi", "CCS2", 60.0, Online),
        station("ST-002", "Bandra Kurla Complex", "Mumbai, Maharashtra", "CCS2", 120.0, Online),
        station("ST-003", "Electronic City Phase 1", "Bengaluru, Karnataka", "Type 2", 22.0, Maintenance),
        station("ST-004", "Hitech City Plaza", "Hyderabad, Telangana", "CHAdeMO", 50.0, Online),
        station("ST-005", "Salt Lake Sector V", "Kolkata, West Bengal", "Type 2", 22.0, Offline),
        station("ST-006", "Anna Salai Depot", "Chennai, Tamil Nadu", "CCS2", 60.0, Online),
        station("ST-007", "Hinjewadi Phase 2", "Pune, Maharashtra", "Bharat DC-001", 15.0, Online),
        station("ST-008", "SG Highway Mall", "Ahmedabad, Gujarat", "CCS2", 60.0, Offline),
        station("ST-009", "MI Road Parking", "Jaipur, Rajasthan", "Type 2", 7.4, Online),
        station("ST-010", "Sector 17 Plaza", "Chandigarh", "CCS2", 30.0, Maintenance),
        station("ST-011", "Gomti Nagar Hub", "Lucknow, Uttar Pradesh", "Bharat AC-001", 10.0, Online),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_station::aggregate::{count_by_status, toggle_station_status};
    use crate::shared::list_query::{paginate, ListQuery};

    #[test]
    fn test_location_search() {
        let stations = sample_stations();
        let mut q = ListQuery::new(10);
        q.set_query("maharashtra");
        let page = paginate(&stations, &q);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_toggle_status() {
        let mut stations = sample_stations();
        let online = count_by_status(&stations, StationStatus::Online);
        assert_eq!(
            toggle_station_status(&mut stations, "ST-001"),
            Some(StationStatus::Offline)
        );
        assert_eq!(count_by_status(&stations, StationStatus::Online), online - 1);
        assert_eq!(
            toggle_station_status(&mut stations, "ST-003"),
            Some(StationStatus::Online)
        );
        assert_eq!(toggle_station_status(&mut stations, "missing"), None);
    }
}
