// Application configuration
use serde::Deserialize;

pub const DEFAULT_BASE_API_URL: &str = "https://api.xen.network";
pub const DEFAULT_TRENDS_ENDPOINT: &str = "/v1/trends/events";

/// The component's configuration surface: where to fetch from and how to
/// present the chart. Loaded from an optional `config/app` file with
/// `TREND_CHART_*` environment overrides (e.g. `TREND_CHART_BASE_API_URL`).
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_base_api_url")]
    pub base_api_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Named built-in palette: "default", "alt", "retro", or "pastel".
    #[serde(default)]
    pub palette: Option<String>,
}

fn default_base_api_url() -> String {
    DEFAULT_BASE_API_URL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_TRENDS_ENDPOINT.to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("TREND_CHART"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
