pub mod config;
pub mod region;
pub mod summary;

// re-export for cleaner imports
pub use self::config::{IndexPolicy, SummaryConfig, SummaryMode};
pub use self::region::TrackRegion;
pub use self::summary::RegionSummary;
