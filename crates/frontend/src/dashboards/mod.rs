pub mod d400_vics_overview;
pub mod d401_law_mis_overview;
pub mod d402_vendor_overview;

pub use d400_vics_overview::VicsOverview;
pub use d401_law_mis_overview::LawMisOverview;
pub use d402_vendor_overview::VendorOverview;
