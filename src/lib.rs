//! # calaf-setup
//!
//! Post-deployment provisioning for the CALAF application: creates the
//! relational schema and seeds default reference data into the SQL database
//! and into the hosted KV store. Every step is idempotent.

pub mod config;
pub mod db;
pub mod kv;
pub mod models;
pub mod schema;
pub mod seeds;
pub mod setup;
pub mod telemetry;
