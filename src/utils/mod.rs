/// Module containing financial calculation utilities
pub mod finance;
/// Module containing logging utilities
pub mod logger;

pub use finance::*;
pub use logger::*;
