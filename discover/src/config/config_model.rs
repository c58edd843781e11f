use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub browser: Browser,
    pub pacing: Pacing,
}

#[derive(Debug, Clone)]
pub struct Browser {
    pub webdriver_url: String,
    pub user_agent: String,
}

/// Random pause between two searches, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub min_pause: Duration,
    pub max_pause: Duration,
}
