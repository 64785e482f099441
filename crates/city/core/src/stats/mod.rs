//! Stat data model.
//!
//! ```text
//! [ Stat ]      one named channel
//!    ↓
//! [ Stats ]     one value per channel
//!    ↓
//! [ StatMap ]   labeled buckets of Stats (base, percent, final)
//! ```
//!
//! [`HappinessMap`] is the scalar counterpart used for happiness breakdowns.

pub mod bucket;
pub mod stat;
pub mod vector;

pub use bucket::{HappinessMap, StatMap};
pub use stat::Stat;
pub use vector::Stats;
