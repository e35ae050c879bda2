pub mod claiming;
pub mod custody;
pub mod funding;
pub mod initialize;
pub mod registration;
pub mod settings;

pub use claiming::*;
pub use custody::*;
pub use funding::*;
pub use initialize::*;
pub use registration::*;
pub use settings::*;
