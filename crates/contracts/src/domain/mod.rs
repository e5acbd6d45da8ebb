pub mod a001_user;
pub mod a002_station;
pub mod a003_product;
pub mod a004_order;
pub mod a005_workshop;
