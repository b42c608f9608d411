use tracing::{debug, error};

use crate::error::{DataSourceError, Result};
use crate::models::{ConnectionSpec, DbSettings, PlatformKind};

pub mod registry;

pub use registry::DriverRegistry;

/// Maps platform names to driver identifiers using an injected registry.
#[derive(Debug, Clone, Default)]
pub struct DriverResolver {
    registry: DriverRegistry,
}

impl DriverResolver {
    pub fn new(registry: DriverRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn parse_platform(&self, raw: &str) -> Result<PlatformKind> {
        raw.parse()
    }

    /// Looks up the driver for `kind`.
    ///
    /// A miss means the registry does not cover the full enumeration. That
    /// cannot happen with [`DriverRegistry::standard`], so it is reported as
    /// [`DataSourceError::UnsupportedPlatform`] and logged as an error.
    pub fn resolve_driver(&self, kind: PlatformKind) -> Result<String> {
        match self.registry.get(kind) {
            Some(driver) => {
                debug!(platform = %kind, driver, "resolved database driver");
                Ok(driver.to_string())
            }
            None => {
                error!(platform = %kind, "driver registry has no entry for platform");
                Err(DataSourceError::UnsupportedPlatform(kind))
            }
        }
    }

    pub fn build_connection_spec(
        &self,
        raw: &str,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<ConnectionSpec> {
        let kind = self.parse_platform(raw)?;
        let driver_id = self.resolve_driver(kind)?;

        Ok(ConnectionSpec {
            driver_id,
            url: url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn build_from_settings(&self, settings: &DbSettings) -> Result<ConnectionSpec> {
        self.build_connection_spec(
            &settings.platform,
            &settings.url,
            &settings.username,
            &settings.password,
        )
    }
}
