use std::env;

use crate::error::{BackendError, Result};

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Connection settings for the hosted backend.
///
/// `public_key` is the project's publishable (anon) key. It is meant to be
/// handed to untrusted clients, but it still stays out of logs.
#[derive(Clone)]
pub struct SupabaseConfig {
    pub endpoint: String,
    pub public_key: String,
}

impl SupabaseConfig {
    pub fn new(endpoint: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            public_key: public_key.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(BackendError::MissingEnv(name))
        };

        Ok(Self {
            endpoint: read(SUPABASE_URL_VAR)?,
            public_key: read(SUPABASE_ANON_KEY_VAR)?,
        })
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("endpoint", &self.endpoint)
            .field("public_key", &"<redacted>")
            .finish()
    }
}

pub fn server_address() -> String {
    env::var(SERVER_ADDRESS_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}
