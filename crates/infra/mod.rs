pub mod assets;
pub mod http;
pub mod web_driver;
