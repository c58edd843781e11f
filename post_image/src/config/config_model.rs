use std::path::PathBuf;

use crates::infra::web_driver::driver::WebDriverConfig;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub web_driver: WebDriverConfig,
    pub brand: Brand,
}

#[derive(Debug, Clone)]
pub struct Brand {
    pub logo_path: PathBuf,
}
