use anyhow::Context;
use chrono_tz::Tz;

use crate::models::calendar::Holiday;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub cors_origins: Vec<String>,
    pub timezone: Tz,
    pub window_days: u32,
    pub max_window_days: u32,
    pub holidays_file: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let timezone_name =
            std::env::var("ATTENDANCE_TIMEZONE").unwrap_or_else(|_| "Asia/Jakarta".into());
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| anyhow::anyhow!("ATTENDANCE_TIMEZONE is not a valid IANA timezone: {}", timezone_name))?;

        let window_days: u32 = std::env::var("WINDOW_DAYS")
            .unwrap_or_else(|_| "7".into())
            .parse()
            .context("WINDOW_DAYS must be a number")?;
        let max_window_days: u32 = std::env::var("MAX_WINDOW_DAYS")
            .unwrap_or_else(|_| "62".into())
            .parse()
            .context("MAX_WINDOW_DAYS must be a number")?;
        if window_days == 0 {
            anyhow::bail!("WINDOW_DAYS must be at least 1");
        }
        if window_days > max_window_days {
            anyhow::bail!("WINDOW_DAYS ({}) exceeds MAX_WINDOW_DAYS ({})", window_days, max_window_days);
        }

        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            timezone,
            window_days,
            max_window_days,
            holidays_file: std::env::var("HOLIDAYS_FILE").ok().filter(|p| !p.trim().is_empty()),
        })
    }

    /// Company holidays from `HOLIDAYS_FILE`, empty when unset.
    pub fn load_extra_holidays(&self) -> anyhow::Result<Vec<Holiday>> {
        let Some(path) = &self.holidays_file else {
            return Ok(Vec::new());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read HOLIDAYS_FILE {}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("HOLIDAYS_FILE {} is not a JSON array of holidays", path))
    }
}
