use anyhow::{bail, Context, Result};

/// Largest accepted `LATENCY_SCALE`.
pub const MAX_LATENCY_SCALE: f64 = 100.0;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Multiplier applied to the simulated per-operation latency. 0.0 disables it.
    pub latency_scale: f64,
    /// A random draw above this value is reported as a clash.
    pub clash_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            latency_scale: 0.0,
            clash_threshold: 0.8,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let latency_scale =
            parse_latency_scale(optional_env("LATENCY_SCALE"), defaults.latency_scale)?;
        let clash_threshold = parse_clash_threshold(
            optional_env("CLASH_PROBABILITY_THRESHOLD"),
            defaults.clash_threshold,
        )?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            latency_scale,
            clash_threshold,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_latency_scale(raw: Option<String>, default: f64) -> Result<f64> {
    let scale = raw
        .map(|v| v.trim().parse::<f64>().context("LATENCY_SCALE must be a number"))
        .transpose()?
        .unwrap_or(default);
    if !(0.0..=MAX_LATENCY_SCALE).contains(&scale) {
        bail!("LATENCY_SCALE must be within 0.0..={MAX_LATENCY_SCALE}, got {scale}");
    }
    Ok(scale)
}

fn parse_clash_threshold(raw: Option<String>, default: f64) -> Result<f64> {
    let threshold = raw
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .context("CLASH_PROBABILITY_THRESHOLD must be a number")
        })
        .transpose()?
        .unwrap_or(default);
    if !(0.0..=1.0).contains(&threshold) {
        bail!("CLASH_PROBABILITY_THRESHOLD must be within 0.0..=1.0, got {threshold}");
    }
    Ok(threshold)
}
