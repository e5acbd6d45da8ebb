pub mod portals;
pub mod routes;
