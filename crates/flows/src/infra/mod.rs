//! Infrastructure Layer
//!
//! Concrete backends for the domain collaborator traits.

pub mod http;
