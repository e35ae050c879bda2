pub mod instructions;
pub mod parsers;
pub mod send_utils;

pub use instructions::*;
pub use parsers::*;
pub use send_utils::*;
