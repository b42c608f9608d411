pub mod datasource;
pub mod db;
pub mod error;
pub mod models;
pub mod settings;

use std::path::Path;

pub use datasource::DataSourceConfig;
pub use db::registry::{H2_DRIVER, MYSQL_DRIVER};
pub use db::{DriverRegistry, DriverResolver};
pub use error::{DataSourceError, Result};
pub use models::{ConnectionSpec, DbSettings, PlatformKind};

/// Loads the `db.*` settings and builds the connection spec with the
/// standard driver registry. Any error here should abort startup.
pub fn load_data_source(config_file: Option<&Path>) -> Result<ConnectionSpec> {
    let settings = DbSettings::load(config_file)?;
    DataSourceConfig::with_standard_drivers(settings).data_source()
}
