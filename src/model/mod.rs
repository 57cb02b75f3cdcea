pub mod bands;
pub mod flags;
pub mod kpi;
pub mod scoring;
pub mod thresholds;
