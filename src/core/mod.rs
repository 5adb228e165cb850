//! Core Module - Business Logic
//!
//! Fair-rent estimation, price flags, nearby ZIP comparison, landlord
//! resolution and scoring, and the orchestrator that combines them.

pub mod analyzer;
pub mod estimator;
pub mod landlord;
pub mod landlord_score;
pub mod nearby;
pub mod price_flag;

pub use analyzer::*;
pub use estimator::*;
pub use landlord::*;
pub use landlord_score::*;
pub use nearby::*;
pub use price_flag::*;
