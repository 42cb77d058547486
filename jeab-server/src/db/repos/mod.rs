//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Lists order by id, i.e. insertion order
//! - `get` returns `Ok(None)` for a missing id
//! - `create` inserts once and re-reads the stored row; no check-then-insert

pub mod articles;
pub mod math_models;
pub mod principles;
pub mod procedures;
pub mod stats;

pub use articles::ArticleRepo;
pub use math_models::MathModelRepo;
pub use principles::PrincipleRepo;
pub use procedures::ProcedureRepo;
pub use stats::StatsRepo;
