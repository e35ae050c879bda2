pub mod create_distribution;
pub mod reclaim_funds;

pub use create_distribution::*;
pub use reclaim_funds::*;
