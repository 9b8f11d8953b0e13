pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "metrics")]
pub mod comparison;

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(feature = "recommendations")]
pub mod recommendations;

#[cfg(feature = "dataset")]
pub mod dataset;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "directory")]
pub mod directory;

pub use error::FiscalError;
pub use types::*;

/// Standard result type for all fiscal-core operations
pub type FiscalResult<T> = Result<T, FiscalError>;
