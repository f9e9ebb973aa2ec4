mod config;
mod logging;
mod report;

pub use config::DriverConfig;
pub use logging::init_logging;
pub use report::{build_reports, RateReport};

pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
