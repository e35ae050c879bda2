pub mod claim;
pub mod reclaim_user_data;

pub use claim::*;
pub use reclaim_user_data::*;
