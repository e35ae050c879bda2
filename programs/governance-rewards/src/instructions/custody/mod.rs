pub mod create_escrow;
pub mod transfer_from_escrow;

pub use create_escrow::*;
pub use transfer_from_escrow::*;
