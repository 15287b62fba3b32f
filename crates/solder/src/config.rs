//! Deserializable bot settings.

use serde::{Deserialize, Serialize};

/// Bot settings as they appear in a host application's configuration.
///
/// The library itself takes configuration programmatically through
/// [`Bot::builder`](crate::Bot::builder); this struct exists so deployments
/// can keep the credential and default policy in their config layer and feed
/// it to [`Bot::from_config`](crate::Bot::from_config).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Bot credential token (required — an empty token fails at build time).
    pub token: String,

    /// Downgrade remote/transport failures to soft outcomes by default.
    pub soft_fail: bool,
}

// ============================================================================
// Tests
// ============================================================================
