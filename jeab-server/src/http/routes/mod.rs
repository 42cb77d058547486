//! Route handlers organized by resource

pub mod articles;
pub mod health;
pub mod math;
pub mod principles;
pub mod procedures;
pub mod stats;
