pub mod db;
pub mod serve;

pub use db::{run_migrate, run_stats};
pub use serve::run_serve;
