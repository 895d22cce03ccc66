//! Core types for the co-occurrence kernel.

pub mod threshold;
pub mod membership;
pub mod pair;

pub use threshold::{Threshold, ThresholdError};
pub use membership::{ListIndex, MembershipSet};
pub use pair::Pair;
