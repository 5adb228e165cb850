//! Utils Module - Reference Data & Shared Helpers
//!
//! Static tables loaded at startup and the constants they default to.

pub mod constants;
pub mod landlord_cache;
pub mod reference;

pub use constants::*;
pub use landlord_cache::*;
pub use reference::*;
