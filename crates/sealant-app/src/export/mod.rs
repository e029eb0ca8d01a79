//! Export functionality

pub mod excel;

pub use excel::export_estimate_to_excel;
