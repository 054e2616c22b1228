pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod geocode;
pub mod http;
pub mod iplookup;
pub mod route;
pub mod simplify;
