//! Auth Config

use clap::Args;

/// Development bearer tokens. Session issuance is owned by an external
/// identity service; these stand in for it until that integration lands.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Bearer token resolved to a customer principal
    #[arg(long, env = "CUSTOMER_TOKEN", default_value = "dev-customer-token")]
    pub customer_token: String,

    /// Bearer token resolved to an admin principal
    #[arg(long, env = "ADMIN_TOKEN", default_value = "dev-admin-token")]
    pub admin_token: String,
}
