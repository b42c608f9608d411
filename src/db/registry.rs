use std::collections::BTreeMap;

use crate::models::PlatformKind;

pub const H2_DRIVER: &str = "org.h2.Driver";
pub const MYSQL_DRIVER: &str = "com.mysql.cj.jdbc.Driver";

/// Immutable mapping from platform to driver identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRegistry {
    drivers: BTreeMap<PlatformKind, String>,
}

impl DriverRegistry {
    /// Registry covering every [`PlatformKind`].
    pub fn standard() -> Self {
        Self::from_entries([
            (PlatformKind::H2, H2_DRIVER),
            (PlatformKind::Mysql, MYSQL_DRIVER),
        ])
    }

    /// Builds a registry from arbitrary entries. A later entry for the same
    /// kind replaces the earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PlatformKind, S)>,
        S: Into<String>,
    {
        Self {
            drivers: entries
                .into_iter()
                .map(|(kind, driver)| (kind, driver.into()))
                .collect(),
        }
    }

    pub fn get(&self, kind: PlatformKind) -> Option<&str> {
        self.drivers.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Kinds that have no driver entry.
    pub fn missing(&self) -> Vec<PlatformKind> {
        PlatformKind::ALL
            .into_iter()
            .filter(|kind| !self.drivers.contains_key(kind))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
