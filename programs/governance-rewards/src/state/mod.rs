pub mod claim_data;
pub mod distribution;
pub mod distribution_option;
pub mod escrow;
pub mod preferences;
pub mod voter_weight_record;

pub use claim_data::*;
pub use distribution::*;
pub use distribution_option::*;
pub use escrow::*;
pub use preferences::*;
pub use voter_weight_record::*;
