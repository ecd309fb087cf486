//! HTTP gateway translating between English, Twi, Ga and Ewe.
//!
//! - `languages`: fixed registry of language keys, provider codes and display names
//! - `provider`: the external translation provider and its Google Cloud implementation
//! - `gateway`: resolves keys and delegates a single translation to the provider
//! - `server`: axum routes and HTTP error mapping

pub mod config;
pub mod error;
pub mod gateway;
pub mod languages;
pub mod provider;
pub mod server;
