pub mod error;
pub mod types;

#[cfg(feature = "schedule")]
pub mod schedule;

#[cfg(feature = "display")]
pub mod display;

#[cfg(feature = "policy")]
pub mod policy;

pub use error::InstallmentError;
pub use types::*;

/// Standard result type for all installment operations
pub type InstallmentResult<T> = Result<T, InstallmentError>;
