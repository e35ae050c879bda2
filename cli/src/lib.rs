pub mod provider;
pub mod utils;

pub use provider::*;
