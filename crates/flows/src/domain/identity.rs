//! Identity Value Object
//!
//! Minimal record of the currently authenticated user. Held in memory by
//! the session store for the lifetime of the process; no persistence.

use serde::{Deserialize, Serialize};

/// Authenticated-user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name
    pub name: String,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_json_ignores_extra_fields() {
        let identity: Identity =
            serde_json::from_value(serde_json::json!({ "name": "Mau", "avatar_url": null }))
                .unwrap();
        assert_eq!(identity, Identity::new("Mau"));
    }
}
