//! Configuration for the static tenant directory plugin.

use serde::{Deserialize, Serialize};
use tenant_branding_sdk::Tenant;

/// Plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticDirectoryConfig {
    /// Static tenant records, in display order.
    pub tenants: Vec<Tenant>,
}
