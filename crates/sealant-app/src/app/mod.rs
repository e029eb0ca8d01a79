//! Application use cases

pub mod estimate_service;
pub mod share_service;

pub use estimate_service::{
    load_catalogue, run_comparison, run_estimate, ComparisonReport, EstimateReport,
    EstimateRequest,
};
pub use share_service::{build_share_url, create_share_link, ShareLink};
