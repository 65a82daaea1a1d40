/// Module containing the account service over the gateway boundary
pub mod account_service;
/// Module containing the broker gateway contract
pub mod gateway;
/// Module containing the in-memory mock gateway
pub mod mock;
