//! Authentication primitives.
//!
//! Identity issuance is owned by the external identity provider; this module
//! only validates the bearer tokens it issues. [`jwt`] also provides token
//! generation for integration tests and operational tooling.

pub mod jwt;
