pub mod set_preferred_mint;
pub mod set_resolution_preference;

pub use set_preferred_mint::*;
pub use set_resolution_preference::*;
