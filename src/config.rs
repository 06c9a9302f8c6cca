/// Origins fetched by both demo strategies, in report order.
pub const DEMO_URLS: [&str; 6] = [
    "https://github.com",
    "https://pypi.org",
    "https://nasa.gov",
    "https://espn.com",
    "https://cnn.com",
    "https://nfl.com",
];

/// Everything a demo run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub urls: Vec<String>,
}

impl DemoConfig {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(DEMO_URLS.iter().map(|url| url.to_string()).collect())
    }
}
