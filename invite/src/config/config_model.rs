use std::time::Duration;

use url::Url;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub rekan_api: RekanApi,
    pub polling: Polling,
    pub support: Support,
}

#[derive(Debug, Clone)]
pub struct RekanApi {
    pub base_url: Url,
    pub request_timeout: Duration,
    /// Raw `pb_auth=...` cookie header, when the caller is signed in.
    pub auth_cookie: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Polling {
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct Support {
    pub whatsapp_number: String,
}
