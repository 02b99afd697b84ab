//! Application services.

pub mod registry;
pub mod slice_service;

pub use registry::{SliceEntry, SliceRegistry};
pub use slice_service::{GenerateOptions, GenerateReport, SliceService};
