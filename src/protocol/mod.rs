//! Serialized forms of licenses and keys.

pub mod models;
