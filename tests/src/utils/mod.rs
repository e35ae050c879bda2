
pub use assert::*;
pub use test_builder::*;
