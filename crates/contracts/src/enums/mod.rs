pub mod order_status;
pub mod station_status;
pub mod workshop_status;
