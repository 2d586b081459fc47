//! # catalog_web - Catalog Preview Server
//!
//! A small Axum service that renders Gripline catalog pages on demand
//! from a directory of family documents. One route per concern:
//!
//! - `app`: router assembly and shared state
//! - `routes`: HTTP handlers
//! - `errors`: consistent JSON error responses
//! - `assets`: the embedded stylesheet and friends

pub mod app;
pub mod assets;
pub mod errors;
pub mod routes;
