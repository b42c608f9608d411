use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataSourceError;

const REDACTED: &str = "***REDACTED***";

const PASSWORD_KEYS: [&str; 3] = ["password", "passwd", "pwd"];

/// Copy of a connection URL safe to log: userinfo before `@` in the
/// authority and password-like `key=value` parameters are replaced.
pub fn redact_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len());

    let rest = match url.find("://") {
        Some(pos) => {
            let (scheme, rest) = url.split_at(pos + 3);
            result.push_str(scheme);
            let authority_end = rest.find(&['/', '?', ';'][..]).unwrap_or(rest.len());
            let (authority, tail) = rest.split_at(authority_end);
            match authority.rfind('@') {
                Some(at) => {
                    result.push_str(REDACTED);
                    result.push_str(&authority[at..]);
                }
                None => result.push_str(authority),
            }
            tail
        }
        None => url,
    };

    // Parameters come after `?`/`&` (MySQL style) or `;` (H2 style).
    for segment in rest.split_inclusive(&['?', '&', ';'][..]) {
        let (body, sep) = match segment.char_indices().last() {
            Some((i, c)) if matches!(c, '?' | '&' | ';') => segment.split_at(i),
            _ => (segment, ""),
        };
        match body.split_once('=') {
            Some((key, _)) if PASSWORD_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)) => {
                result.push_str(key);
                result.push('=');
                result.push_str(REDACTED);
            }
            _ => result.push_str(body),
        }
        result.push_str(sep);
    }

    result
}

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    H2,
    Mysql,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 2] = [PlatformKind::H2, PlatformKind::Mysql];

    /// Canonical configuration tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            PlatformKind::H2 => "h2",
            PlatformKind::Mysql => "mysql",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PlatformKind {
    type Err = DataSourceError;

    // Exact, case-sensitive match. No trimming.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "h2" => Ok(PlatformKind::H2),
            "mysql" => Ok(PlatformKind::Mysql),
            _ => Err(DataSourceError::UnknownPlatform(raw.to_string())),
        }
    }
}

/// Connection parameters handed to the data-access layer.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConnectionSpec {
    pub driver_id: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ConnectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSpec")
            .field("driver_id", &self.driver_id)
            .field("url", &redact_url(&self.url))
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl ConnectionSpec {
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

/// Raw `db.*` values as read from configuration, before the platform is validated.
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub platform: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("platform", &self.platform)
            .field("url", &redact_url(&self.url))
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}
