//! Multi-network toolchain configuration management
//!
//! This module provides typed, strongly-validated configuration for the
//! chainsmith build and deployment toolchain. Configuration is resolved in
//! priority order:
//!
//! 1. Environment variables (`NODE_PROVIDER_URL`, `SIGNING_PRIVATE_KEY`,
//!    `VERIFICATION_API_KEY`)
//! 2. `chainsmith.toml` project file
//! 3. Baked-in defaults (solc 0.8.7, single network "primary")
//!
//! Validation happens at load time and is fatal: a malformed private key,
//! endpoint URL or compiler version fails the load before any downstream
//! tool action runs, never at signing time.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chainsmith_tools::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! println!("Compiler: {}", config.solc);
//! println!("Default network: {}", config.default_network);
//! # Ok(())
//! # }
//! ```

use crate::env::{EnvSource, ProcessEnv};
use crate::secret::{mask, PrivateKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Compiler version baked into the defaults.
pub const DEFAULT_SOLC_VERSION: &str = "0.8.7";

/// The network populated from the environment; also the default
/// `default_network` value.
pub const PRIMARY_NETWORK: &str = "primary";

/// Well-known project file name, discovered in the working directory.
pub const PROJECT_FILE: &str = "chainsmith.toml";

/// Sets the primary network endpoint URL.
pub const ENV_NODE_PROVIDER_URL: &str = "NODE_PROVIDER_URL";

/// Sets the primary network signing keys (comma-separated for multiple).
pub const ENV_SIGNING_PRIVATE_KEY: &str = "SIGNING_PRIVATE_KEY";

/// Sets the contract-verification service credential.
pub const ENV_VERIFICATION_API_KEY: &str = "VERIFICATION_API_KEY";

/// Configuration error types
///
/// Every variant is fatal at load time: there is no partial-success mode, so
/// a malformed configuration never reaches a signing or deployment step.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Default network {0} is not declared under [networks]")]
    DanglingNetworkReference(String),

    #[error(
        "Invalid private key for network {network} (account {index}). Must be 0x followed by 64 hex digits"
    )]
    MalformedSecret { network: String, index: usize },

    #[error("Invalid URL for network {network}: {url}. Must start with http:// or https://")]
    InvalidUrl { network: String, url: String },

    #[error("Invalid compiler version: {0}. Must look like MAJOR.MINOR.PATCH, e.g. 0.8.7")]
    InvalidCompilerVersion(String),
}

/// Per-network table in `chainsmith.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkProfile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `[verification]` table in `chainsmith.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationProfile {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Complete `chainsmith.toml` document.
///
/// Everything is optional; the file only overrides the baked-in defaults it
/// mentions. Secrets declared here are validated exactly like
/// environment-supplied ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectToml {
    #[serde(default)]
    pub solc: Option<String>,
    #[serde(default)]
    pub default_network: Option<String>,
    #[serde(default)]
    pub networks: HashMap<String, NetworkProfile>,
    #[serde(default)]
    pub verification: Option<VerificationProfile>,
}

/// A named network endpoint: node-provider URL plus signing accounts.
///
/// A missing URL or an empty account list is fine at load time; it becomes an
/// error only when the network is actually used (see [`Config::rpc_url`] and
/// [`Config::signer`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    /// Node-provider endpoint URL, validated as HTTP(S) when present.
    pub url: Option<String>,
    /// Ordered signing keys. Well-formed by construction: malformed secrets
    /// are rejected while loading and never become values.
    pub accounts: Vec<PrivateKey>,
    /// Free-form operator note from the project file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contract-verification service credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Opaque API key; may stay empty if verification is never invoked.
    pub api_key: String,
}

/// Resolved toolchain configuration.
///
/// Built once per process invocation by [`Config::load`] and immutable
/// thereafter: consumers receive `&Config`, nothing in this crate mutates a
/// value after construction, and it can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Solidity compiler version handed to the build step.
    pub solc: String,
    /// Name of the network used when none is specified explicitly.
    pub default_network: String,
    /// Declared networks, keyed by name. Always contains `"primary"`.
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Verification service credential.
    pub verification: VerificationConfig,
}

impl Config {
    /// Load configuration from the process environment and `chainsmith.toml`
    ///
    /// # Resolution Order
    ///
    /// 1. Load a `.env` file into the process environment if one exists
    ///    (non-fatal)
    /// 2. Start from baked-in defaults
    /// 3. Overlay `chainsmith.toml` from the working directory, if present
    /// 4. Overlay environment variables (highest priority)
    /// 5. Validate and fail fast
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The default network is not declared
    /// - Any signing key or endpoint URL is malformed
    /// - The compiler version is not a dotted numeric triple
    /// - The project file exists but cannot be read or parsed
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (non-fatal)
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), ".env file loaded");
        }
        Self::load_from(&ProcessEnv)
    }

    /// Load configuration from an injected environment source.
    ///
    /// Reads `chainsmith.toml` from the working directory like [`Config::load`]
    /// but performs no `.env` loading and touches no process state, so tests
    /// can drive it with a [`MapEnv`](crate::env::MapEnv).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Config::load`].
    pub fn load_from(env: &impl EnvSource) -> Result<Self, ConfigError> {
        Self::load_with(env, Path::new(PROJECT_FILE))
    }

    /// Load configuration from an injected environment source and an explicit
    /// project file path. A missing file is not an error; the baked-in
    /// defaults apply.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Config::load`].
    pub fn load_with(env: &impl EnvSource, project_file: &Path) -> Result<Self, ConfigError> {
        let file = Self::read_project_file(project_file)?;
        Self::resolve(env, file)
    }

    /// Read and parse the project file, if present.
    fn read_project_file(path: &Path) -> Result<Option<ProjectToml>, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no project file, using built-in defaults");
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let parsed = toml::from_str(&content)?;
        debug!(path = %path.display(), "project file loaded");
        Ok(Some(parsed))
    }

    /// Merge defaults, project file and environment into a validated config.
    fn resolve(env: &impl EnvSource, file: Option<ProjectToml>) -> Result<Self, ConfigError> {
        let mut solc = DEFAULT_SOLC_VERSION.to_string();
        let mut default_network = PRIMARY_NETWORK.to_string();
        let mut networks: BTreeMap<String, NetworkConfig> = BTreeMap::new();
        networks.insert(PRIMARY_NETWORK.to_string(), NetworkConfig::default());
        let mut api_key = String::new();

        // Project file overlay
        if let Some(file) = file {
            if let Some(version) = file.solc {
                solc = version;
            }
            if let Some(name) = file.default_network {
                default_network = name;
            }
            for (name, profile) in file.networks {
                if !profile.accounts.is_empty() {
                    warn!(
                        network = %name,
                        "project file declares plaintext signing keys; prefer SIGNING_PRIVATE_KEY"
                    );
                }
                let accounts = parse_accounts(&name, profile.accounts.iter().map(String::as_str))?;
                networks.insert(
                    name,
                    NetworkConfig {
                        url: profile.url,
                        accounts,
                        description: profile.description,
                    },
                );
            }
            if let Some(key) = file.verification.and_then(|v| v.api_key) {
                api_key = key;
            }
        }

        // Environment overlay: always targets the primary network
        let primary = networks.entry(PRIMARY_NETWORK.to_string()).or_default();
        if let Some(url) = env.var(ENV_NODE_PROVIDER_URL) {
            primary.url = Some(url);
        }
        if let Some(raw) = env.var(ENV_SIGNING_PRIVATE_KEY) {
            primary.accounts = parse_accounts(
                PRIMARY_NETWORK,
                raw.split(',').map(str::trim).filter(|key| !key.is_empty()),
            )?;
        }
        if let Some(key) = env.var(ENV_VERIFICATION_API_KEY) {
            api_key = key;
        }

        let config = Config {
            solc,
            default_network,
            networks,
            verification: VerificationConfig { api_key },
        };
        config.validate()?;

        debug!(
            networks = config.networks.len(),
            default = %config.default_network,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Signing keys need no pass here: they were parsed into [`PrivateKey`]
    /// while resolving, so a malformed secret cannot reach this point.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.networks.contains_key(&self.default_network) {
            return Err(ConfigError::DanglingNetworkReference(
                self.default_network.clone(),
            ));
        }

        for (name, network) in &self.networks {
            if let Some(url) = &network.url {
                if !is_http_url(url) {
                    return Err(ConfigError::InvalidUrl {
                        network: name.clone(),
                        url: url.clone(),
                    });
                }
            }
        }

        if !is_version_triple(&self.solc) {
            return Err(ConfigError::InvalidCompilerVersion(self.solc.clone()));
        }

        Ok(())
    }

    /// Look up a network by name.
    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    /// Endpoint URL of a network that is about to be used.
    ///
    /// # Errors
    ///
    /// `DanglingNetworkReference` if the name is not declared,
    /// `MissingField` if the network has no URL.
    pub fn rpc_url(&self, name: &str) -> Result<&str, ConfigError> {
        let network = self
            .networks
            .get(name)
            .ok_or_else(|| ConfigError::DanglingNetworkReference(name.to_string()))?;
        network
            .url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField(format!("networks.{name}.url")))
    }

    /// First signing key of a network that is about to sign.
    ///
    /// # Errors
    ///
    /// `DanglingNetworkReference` if the name is not declared,
    /// `MissingField` if the network has no accounts.
    pub fn signer(&self, name: &str) -> Result<&PrivateKey, ConfigError> {
        let network = self
            .networks
            .get(name)
            .ok_or_else(|| ConfigError::DanglingNetworkReference(name.to_string()))?;
        network
            .accounts
            .first()
            .ok_or_else(|| ConfigError::MissingField(format!("networks.{name}.accounts")))
    }

    /// Print the resolved configuration. Secrets appear only in masked form.
    pub fn print_summary(&self) {
        println!("╔════════════════════════════════════════════════════════════════╗");
        println!("║               CHAINSMITH CONFIGURATION RESOLVED                ║");
        println!("╚════════════════════════════════════════════════════════════════╝");
        println!("  Solc Version:        {}", self.solc);
        println!("  Default Network:     {}", self.default_network);
        println!("  Networks:");

        for (name, network) in &self.networks {
            let marker = if name == &self.default_network {
                " (default)"
            } else {
                ""
            };
            let url = network.url.as_deref().unwrap_or("(no url)");
            println!(
                "    {:<16} {}  [{} account(s)]{}",
                name,
                url,
                network.accounts.len(),
                marker
            );
        }

        if self.verification.api_key.is_empty() {
            println!("  Verification Key:    (not configured)");
        } else {
            println!("  Verification Key:    {}", mask(&self.verification.api_key));
        }
    }

    /// Get the configuration as JSON, secrets masked.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// Manual Serialize impl since the credential must leave the process masked
impl Serialize for VerificationConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        if self.api_key.is_empty() {
            map.serialize_entry("api_key", "")?;
        } else {
            map.serialize_entry("api_key", &mask(&self.api_key))?;
        }
        map.end()
    }
}

/// Parse raw key material into validated accounts, naming the network and
/// account index on failure. The key text itself never enters the error.
fn parse_accounts<'a, I>(network: &str, keys: I) -> Result<Vec<PrivateKey>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut accounts = Vec::new();
    for (index, key) in keys.into_iter().enumerate() {
        let parsed = key.parse().map_err(|_| ConfigError::MalformedSecret {
            network: network.to_string(),
            index,
        })?;
        accounts.push(parsed);
    }
    Ok(accounts)
}

/// Recognized endpoint shape: http(s) scheme plus a non-empty host.
fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.starts_with('/'),
        None => false,
    }
}

/// Dotted all-numeric triple, e.g. "0.8.7".
fn is_version_triple(version: &str) -> bool {
    let mut parts = 0;
    for part in version.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const KEY_ONES: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
    const KEY_TWOS: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

    /// Load against an environment only; the project file path points into a
    /// fresh temporary directory where no file exists.
    fn load_env_only(env: &MapEnv) -> Result<Config, ConfigError> {
        let dir = TempDir::new().unwrap();
        Config::load_with(env, &dir.path().join(PROJECT_FILE))
    }

    /// Write a project file into a fresh temporary directory and return both
    /// (the directory keeps the file alive).
    fn write_project_file(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_full_environment() {
        let env = MapEnv::new()
            .set(ENV_NODE_PROVIDER_URL, "https://node.example/v1/abc")
            .set(ENV_SIGNING_PRIVATE_KEY, KEY_ONES)
            .set(ENV_VERIFICATION_API_KEY, "key123");

        let config = load_env_only(&env).unwrap();

        assert_eq!(config.solc, DEFAULT_SOLC_VERSION);
        assert_eq!(config.default_network, PRIMARY_NETWORK);
        let primary = config.network(PRIMARY_NETWORK).unwrap();
        assert_eq!(primary.url.as_deref(), Some("https://node.example/v1/abc"));
        assert_eq!(primary.accounts.len(), 1);
        assert_eq!(primary.accounts[0].expose(), KEY_ONES);
        assert_eq!(config.verification.api_key, "key123");
    }

    #[test]
    fn test_load_without_signing_key() {
        let env = MapEnv::new().set(ENV_NODE_PROVIDER_URL, "https://node.example/v1/abc");

        let config = load_env_only(&env).unwrap();

        let primary = config.network(PRIMARY_NETWORK).unwrap();
        assert!(primary.accounts.is_empty());
    }

    #[test]
    fn test_load_defaults_with_empty_environment() {
        let config = load_env_only(&MapEnv::new()).unwrap();

        assert_eq!(config.solc, "0.8.7");
        assert_eq!(config.default_network, "primary");
        assert!(config.networks.contains_key(&config.default_network));
        let primary = config.network(PRIMARY_NETWORK).unwrap();
        assert_eq!(primary.url, None);
        assert!(primary.accounts.is_empty());
        assert_eq!(config.verification.api_key, "");
    }

    #[test]
    fn test_load_rejects_malformed_secret() {
        let env = MapEnv::new().set(ENV_SIGNING_PRIVATE_KEY, "not-hex");

        let err = load_env_only(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedSecret { ref network, index: 0 } if network == "primary"
        ));
    }

    #[test]
    fn test_load_multiple_accounts_from_env() {
        let env = MapEnv::new().set(ENV_SIGNING_PRIVATE_KEY, format!("{KEY_ONES}, {KEY_TWOS}"));

        let config = load_env_only(&env).unwrap();

        let primary = config.network(PRIMARY_NETWORK).unwrap();
        assert_eq!(primary.accounts.len(), 2);
        assert_eq!(primary.accounts[0].expose(), KEY_ONES);
        assert_eq!(primary.accounts[1].expose(), KEY_TWOS);
    }

    #[test]
    fn test_load_names_offending_account_index() {
        let env = MapEnv::new().set(ENV_SIGNING_PRIVATE_KEY, format!("{KEY_ONES},broken"));

        let err = load_env_only(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedSecret { index: 1, .. }));
    }

    #[test]
    fn test_load_rejects_invalid_url() {
        for bad in ["ftp://node.example", "node.example", "https://", "https:///v1"] {
            let env = MapEnv::new().set(ENV_NODE_PROVIDER_URL, bad);
            let err = load_env_only(&env).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidUrl { ref url, .. } if url == bad),
                "expected InvalidUrl for {bad}"
            );
        }
    }

    #[test]
    fn test_load_accepts_http_and_https() {
        for good in ["https://node.example/v1/abc", "http://localhost:8545"] {
            let env = MapEnv::new().set(ENV_NODE_PROVIDER_URL, good);
            let config = load_env_only(&env).unwrap();
            assert_eq!(config.rpc_url(PRIMARY_NETWORK).unwrap(), good);
        }
    }

    #[test]
    fn test_load_is_idempotent() {
        let env = MapEnv::new()
            .set(ENV_NODE_PROVIDER_URL, "https://node.example/v1/abc")
            .set(ENV_SIGNING_PRIVATE_KEY, KEY_ONES)
            .set(ENV_VERIFICATION_API_KEY, "key123");

        let first = load_env_only(&env).unwrap();
        let second = load_env_only(&env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_file_declares_networks() {
        let (_dir, path) = write_project_file(
            r#"
[networks.sepolia]
url = "https://sepolia.example/v2/key"
description = "public testnet"

[networks.mainnet]
url = "https://mainnet.example/v2/key"
"#,
        );

        let config = Config::load_with(&MapEnv::new(), &path).unwrap();

        assert_eq!(config.networks.len(), 3);
        assert_eq!(
            config.rpc_url("sepolia").unwrap(),
            "https://sepolia.example/v2/key"
        );
        assert_eq!(
            config.network("sepolia").unwrap().description.as_deref(),
            Some("public testnet")
        );
        // Primary still present and still the default
        assert_eq!(config.default_network, "primary");
        assert!(config.networks.contains_key("primary"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let (_dir, path) = write_project_file(
            r#"
solc = "0.8.21"
default_network = "sepolia"

[networks.sepolia]
url = "https://sepolia.example/v2/key"
"#,
        );

        let config = Config::load_with(&MapEnv::new(), &path).unwrap();

        assert_eq!(config.solc, "0.8.21");
        assert_eq!(config.default_network, "sepolia");
    }

    #[test]
    fn test_project_file_dangling_default_network() {
        let (_dir, path) = write_project_file(r#"default_network = "nowhere""#);

        let err = Config::load_with(&MapEnv::new(), &path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DanglingNetworkReference(ref name) if name == "nowhere"
        ));
    }

    #[test]
    fn test_environment_overrides_project_file() {
        let (_dir, path) = write_project_file(
            r#"
[networks.primary]
url = "https://from-file.example"

[verification]
api_key = "file-key"
"#,
        );
        let env = MapEnv::new()
            .set(ENV_NODE_PROVIDER_URL, "https://from-env.example")
            .set(ENV_VERIFICATION_API_KEY, "env-key");

        let config = Config::load_with(&env, &path).unwrap();

        assert_eq!(
            config.rpc_url(PRIMARY_NETWORK).unwrap(),
            "https://from-env.example"
        );
        assert_eq!(config.verification.api_key, "env-key");
    }

    #[test]
    fn test_project_file_values_stand_without_env() {
        let (_dir, path) = write_project_file(
            r#"
[networks.primary]
url = "https://from-file.example"

[verification]
api_key = "file-key"
"#,
        );

        let config = Config::load_with(&MapEnv::new(), &path).unwrap();

        assert_eq!(
            config.rpc_url(PRIMARY_NETWORK).unwrap(),
            "https://from-file.example"
        );
        assert_eq!(config.verification.api_key, "file-key");
    }

    #[test]
    fn test_project_file_accounts_are_validated() {
        let (_dir, path) = write_project_file(&format!(
            r#"
[networks.sepolia]
url = "https://sepolia.example/v2/key"
accounts = ["{KEY_ONES}", "{KEY_TWOS}"]
"#
        ));

        let config = Config::load_with(&MapEnv::new(), &path).unwrap();
        let sepolia = config.network("sepolia").unwrap();
        assert_eq!(sepolia.accounts.len(), 2);
        assert_eq!(config.signer("sepolia").unwrap().expose(), KEY_ONES);
    }

    #[test]
    fn test_project_file_malformed_account_names_network_and_index() {
        let (_dir, path) = write_project_file(&format!(
            r#"
[networks.sepolia]
accounts = ["{KEY_ONES}", "0xnothex"]
"#
        ));

        let err = Config::load_with(&MapEnv::new(), &path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedSecret { ref network, index: 1 } if network == "sepolia"
        ));
    }

    #[test]
    fn test_project_file_invalid_url_names_network() {
        let (_dir, path) = write_project_file(
            r#"
[networks.sepolia]
url = "ws://sepolia.example"
"#,
        );

        let err = Config::load_with(&MapEnv::new(), &path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl { ref network, .. } if network == "sepolia"
        ));
    }

    #[test]
    fn test_project_file_invalid_compiler_version() {
        for bad in ["0.8", "0.8.x", "v0.8.7", ""] {
            let (_dir, path) = write_project_file(&format!("solc = \"{bad}\""));
            let err = Config::load_with(&MapEnv::new(), &path).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidCompilerVersion(_)),
                "expected InvalidCompilerVersion for {bad:?}"
            );
        }
    }

    #[test]
    fn test_project_file_invalid_toml() {
        let (_dir, path) = write_project_file("networks = not valid toml");

        let err = Config::load_with(&MapEnv::new(), &path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_rpc_url_missing() {
        let config = load_env_only(&MapEnv::new()).unwrap();

        let err = config.rpc_url(PRIMARY_NETWORK).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField(ref field) if field == "networks.primary.url"
        ));
    }

    #[test]
    fn test_rpc_url_unknown_network() {
        let config = load_env_only(&MapEnv::new()).unwrap();

        let err = config.rpc_url("nowhere").unwrap_err();
        assert!(matches!(err, ConfigError::DanglingNetworkReference(_)));
    }

    #[test]
    fn test_signer_missing() {
        let config = load_env_only(&MapEnv::new()).unwrap();

        let err = config.signer(PRIMARY_NETWORK).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField(ref field) if field == "networks.primary.accounts"
        ));
    }

    #[test]
    fn test_to_json_masks_secrets() {
        let env = MapEnv::new()
            .set(ENV_SIGNING_PRIVATE_KEY, KEY_ONES)
            .set(ENV_VERIFICATION_API_KEY, "etherscan-token-123");

        let config = load_env_only(&env).unwrap();
        let json = config.to_json().unwrap();

        assert!(json.contains("0x1111***1111"));
        assert!(!json.contains(KEY_ONES));
        assert!(json.contains("eth***123"));
        assert!(!json.contains("etherscan-token-123"));
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let env = MapEnv::new().set(ENV_SIGNING_PRIVATE_KEY, KEY_ONES);

        let config = load_env_only(&env).unwrap();
        let debug = format!("{config:?}");

        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(KEY_ONES));
    }

    #[test]
    fn test_is_version_triple() {
        assert!(is_version_triple("0.8.7"));
        assert!(is_version_triple("1.0.0"));
        assert!(!is_version_triple("0.8"));
        assert!(!is_version_triple("0.8.7.1"));
        assert!(!is_version_triple("0..7"));
        assert!(!is_version_triple("a.b.c"));
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://node.example/v1/abc"));
        assert!(is_http_url("http://localhost:8545"));
        assert!(!is_http_url("ftp://node.example"));
        assert!(!is_http_url("node.example"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url(""));
    }
}
