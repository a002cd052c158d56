//! Domain Layer
//!
//! Value objects, the validation engine and the collaborator traits the
//! flows are written against. Implementations live in the infrastructure
//! layer (or in the host application, for the router).

pub mod gateway;
pub mod identity;
pub mod validation;
