use serde::{Deserialize, Serialize};

use crate::enums::workshop_status::WorkshopStatus;
use crate::shared::list_query::Searchable;

/// Workshop or inspection centre that applied for a licence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub city: String,
    pub license_no: String,
    pub status: WorkshopStatus,
}

impl Searchable for Workshop {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.owner.as_str(),
            self.city.as_str(),
            self.license_no.as_str(),
        ]
    }
}

pub fn set_workshop_status(
    workshops: &mut [Workshop],
    id: &str,
    status: WorkshopStatus,
) -> bool {
    match workshops.iter_mut().find(|w| w.id == id) {
        Some(w) => {
            w.status = status;
            true
        }
        None => false,
    }
}

pub fn count_by_status(workshops: &[Workshop], status: WorkshopStatus) -> usize {
    workshops.iter().filter(|w| w.status == status).count()
}
