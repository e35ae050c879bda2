pub mod register;
pub mod update_registration;

pub use register::*;
pub use update_registration::*;
