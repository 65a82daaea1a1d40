/// Module containing the balance report table
pub mod report;

pub use report::*;
