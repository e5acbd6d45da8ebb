use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkshopStatus {
    Pending,
    Approved,
    Rejected,
}

impl WorkshopStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkshopStatus::Pending => "Pending",
            WorkshopStatus::Approved => "Approved",
            WorkshopStatus::Rejected => "Rejected",
        }
    }
}
