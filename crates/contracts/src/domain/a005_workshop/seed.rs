use super::aggregate::Workshop;
use crate::enums::workshop_status::WorkshopStatus;

fn workshop(
    id: &str,
    name: &str,
    owner: &str,
    city: &str,
    license_no: &str,
    status: WorkshopStatus,
) -> Workshop {
    Workshop {
        id: id.to_string(),
        name: name.to_string(),
        owner: owner.to_string(),
        city: city.to_string(),
        license_no: license_no.to_string(),
        status,
    }
}

pub fn sample_workshops() -> Vec<Workshop> {
    use WorkshopStatus::*;
    vec![
        workshop("WS-301", "Sai Auto Testing Centre", "Suresh Patil", "Nagpur", "ATS/MH/2023/0112", Approved),
        workshop("WS-302", "Ganesh Motors Workshop", "Ganesh Rao", "Nashik", "ATS/MH/2023/0147", Approved),
        workshop("WS-303", "Shree Fitness Station", "Kavita Shah", "Surat", "ATS/GJ/2024/0021", Pending),
        workshop("WS-304", "Metro Vehicle Inspection", "Imran Khan", "Bhopal", "ATS/MP/2024/0009", Pending),
        workshop("WS-305", "Highway ATS Pvt Ltd", "Harpreet Gill", "Ludhiana", "ATS/PB/2022/0310", Rejected),
        workshop("WS-306", "Coastal Fitness Centre", "Joseph Fernandes", "Mangaluru", "ATS/KA/2024/0052", Pending),
        workshop("WS-307", "Deccan Auto Check", "Asha Kulkarni", "Pune", "ATS/MH/2022/0088", Approved),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_workshop::aggregate::{count_by_status, set_workshop_status};
    use crate::shared::list_query::filter_records;

    #[test]
    fn test_license_search() {
        let workshops = sample_workshops();
        assert_eq!(filter_records(&workshops, "ats/mh").len(), 3);
    }

    #[test]
    fn test_approve_pending() {
        let mut workshops = sample_workshops();
        assert_eq!(count_by_status(&workshops, WorkshopStatus::Pending), 3);
        assert!(set_workshop_status(&mut workshops, "WS-303", WorkshopStatus::Approved));
        assert_eq!(count_by_status(&workshops, WorkshopStatus::Pending), 2);
        assert!(!set_workshop_status(&mut workshops, "WS-999", WorkshopStatus::Approved));
    }
}
