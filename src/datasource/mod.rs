use tracing::{error, info};

use crate::db::{DriverRegistry, DriverResolver};
use crate::error::Result;
use crate::models::{ConnectionSpec, DbSettings};

/// Startup factory for the application's data source.
pub struct DataSourceConfig {
    settings: DbSettings,
    resolver: DriverResolver,
}

impl DataSourceConfig {
    pub fn new(settings: DbSettings, resolver: DriverResolver) -> Self {
        Self { settings, resolver }
    }

    pub fn with_standard_drivers(settings: DbSettings) -> Self {
        Self::new(settings, DriverResolver::new(DriverRegistry::standard()))
    }

    pub fn settings(&self) -> &DbSettings {
        &self.settings
    }

    pub fn data_source(&self) -> Result<ConnectionSpec> {
        match self.resolver.build_from_settings(&self.settings) {
            Ok(spec) => {
                info!(
                    platform = %self.settings.platform,
                    driver = %spec.driver_id,
                    url = %spec.redacted_url(),
                    username = %spec.username,
                    "data source configured"
                );
                Ok(spec)
            }
            Err(e) => {
                error!(platform = %self.settings.platform, "failed to configure data source: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataSourceError;
    use crate::models::PlatformKind;

    fn settings(platform: &str) -> DbSettings {
        DbSettings {
            platform: platform.to_string(),
            url: "jdbc:mysql://localhost/db".to_string(),
            username: "root".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn builds_mysql_data_source() {
        let spec = DataSourceConfig::with_standard_drivers(settings("mysql"))
            .data_source()
            .unwrap();
        assert_eq!(spec.driver_id, "com.mysql.cj.jdbc.Driver");
        assert_eq!(spec.url, "jdbc:mysql://localhost/db");
        assert_eq!(spec.username, "root");
        assert_eq!(spec.password, "secret");
    }

    #[test]
    fn unknown_platform_aborts() {
        let err = DataSourceConfig::with_standard_drivers(settings("oracle"))
            .data_source()
            .unwrap_err();
        assert!(matches!(err, DataSourceError::UnknownPlatform(ref raw) if raw == "oracle"));
    }

    #[test]
    fn uses_injected_resolver() {
        let resolver = DriverResolver::new(DriverRegistry::from_entries([(
            PlatformKind::Mysql,
            "org.mariadb.jdbc.Driver",
        )]));
        let config = DataSourceConfig::new(settings("mysql"), resolver);
        assert_eq!(config.settings().platform, "mysql");
        assert_eq!(config.data_source().unwrap().driver_id, "org.mariadb.jdbc.Driver");
    }
}
