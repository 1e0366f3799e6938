//! Single-user access gate. A static allow list of size one, not a policy
//! engine: the signed-in identity's email is compared against the configured
//! allowed email and anything else is denied.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub display_name: Option<String>,
}

/// Bypass identity used when no credential check is configured.
pub fn mock_identity() -> Identity {
    Identity {
        email: "ileana@example.com".to_owned(),
        display_name: Some("Ileana Mock".to_owned()),
    }
}

/// Email addresses are compared ASCII-case-insensitively.
pub fn is_allowed(allowed_email: &str, identity: &Identity) -> bool {
    allowed_email.eq_ignore_ascii_case(&identity.email)
}
