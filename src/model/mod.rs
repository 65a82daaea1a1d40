/// Module containing the account entity and the static-data normalizer
pub mod account;
/// Module containing the holding entities and the holdings normalizers
pub mod holdings;

pub use account::*;
pub use holdings::*;
