//! Core primitives shared across the crate:
//! - model: the CacheRecord data model
//! - paths: path normalization and resolution helpers
//! - util: filesystem size/timestamp helpers

pub mod model;
pub mod paths;
pub mod util;
