pub mod common;
pub mod u501_workshop_registration;
pub mod u502_vendor_registration;
pub mod u503_supplier_form;
