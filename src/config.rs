use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "activity-signup", about = "Browse extracurricular activities and sign up")]
pub struct Config {
    /// Backend root that serves `/activities`.
    #[arg(long, env = "ACTIVITIES_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: Url,

    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, env = "ACTIVITIES_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, default_value_t = 960.0)]
    pub window_width: f32,

    #[arg(long, default_value_t = 720.0)]
    pub window_height: f32,
}
