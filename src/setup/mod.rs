//! The two provisioning entry points.
//!
//! They share the seeding procedure but apply opposite failure policies:
//! [`database::run`] fails closed (any error is returned and should end the
//! process with a failure status), [`kv::run`] fails open (errors are logged
//! and reported through [`kv::KvSetupOutcome`], never returned).

pub mod database;
pub mod kv;
