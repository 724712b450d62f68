use serde::{Deserialize, Serialize};

/// Site settings are owned by the backend; the gateway passes them through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteSettings(pub serde_json::Value);
