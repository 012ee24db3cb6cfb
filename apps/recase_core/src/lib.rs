pub mod convert;
pub mod serializers;
pub mod urls;
pub mod views;

#[derive(Clone)]
pub struct AppConfig {
    /// Listen port (default 5700). Override with PORT.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5700);

        Self { port }
    }
}
