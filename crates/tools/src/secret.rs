//! Signing-secret handling.
//!
//! Private keys are the one piece of configuration that must never appear in
//! logs, summaries or serialized output. This module provides:
//!
//! - Shape validation at parse time (a malformed key never becomes a value)
//! - Redacted `Debug`/`Display` implementations
//! - Masked previews for human-facing output
//! - Memory zeroing on drop

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Error returned when a private key does not have the required shape.
///
/// Carries no payload: the rejected value is a would-be secret and never
/// travels inside error messages.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("private key must be 0x followed by 64 hex digits")]
pub struct InvalidPrivateKey;

/// A 0x-prefixed, 64-hex-digit signing key.
///
/// Parsing is the only way to construct a value, so every `PrivateKey` in a
/// loaded configuration is well-formed. The backing storage is zeroed when
/// the value is dropped.
///
/// # Example
///
/// ```
/// use chainsmith_tools::PrivateKey;
///
/// let key: PrivateKey = "0x1111111111111111111111111111111111111111111111111111111111111111"
///     .parse()
///     .unwrap();
/// assert_eq!(key.preview(), "0x1111***1111");
/// assert!("not-hex".parse::<PrivateKey>().is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    inner: String,
}

impl PrivateKey {
    /// Exposes the full key text for the downstream signer.
    ///
    /// The returned reference should not be stored, logged or serialized.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Masked form for summaries: `0x` plus the first and last four hex
    /// digits, middle elided.
    #[must_use]
    pub fn preview(&self) -> String {
        // Validated shape: always 66 ASCII characters.
        format!("{}***{}", &self.inner[..6], &self.inner[62..])
    }
}

impl FromStr for PrivateKey {
    type Err = InvalidPrivateKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0x") {
            Some(hex) if hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Ok(Self {
                    inner: s.to_string(),
                })
            }
            _ => Err(InvalidPrivateKey),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison to prevent timing attacks
        if self.inner.len() != other.inner.len() {
            return false;
        }
        let mut result = 0u8;
        for (a, b) in self.inner.bytes().zip(other.inner.bytes()) {
            result |= a ^ b;
        }
        result == 0
    }
}

impl Eq for PrivateKey {}

impl Serialize for PrivateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.preview())
    }
}

/// Masks an opaque credential for display: first three and last three
/// characters with the middle elided. Values too short to mask safely
/// collapse to `***`.
#[must_use]
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 6 {
        "***".to_string()
    } else {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 3..].iter().collect();
        format!("{prefix}***{suffix}")
    }
}
