use crate::core::gaps::GapConfig;
use crate::core::interval::Interval;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_minute_of_day;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub workspace_id: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,
    #[serde(default = "default_lunch_start")]
    pub lunch_start: String,
    #[serde(default = "default_lunch_end")]
    pub lunch_end: String,
    #[serde(default = "default_filler_description")]
    pub filler_description: String,
    /// Fallback metadata for days that have gaps but no entry to copy
    /// project/task from. Both must be set for the fallback to apply.
    #[serde(default)]
    pub default_project_id: Option<String>,
    #[serde(default)]
    pub default_task_id: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_timezone() -> String {
    "Asia/Manila".to_string()
}
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "18:00".to_string()
}
fn default_lunch_start() -> String {
    "12:00".to_string()
}
fn default_lunch_end() -> String {
    "13:00".to_string()
}
fn default_filler_description() -> String {
    "[Dev Work, Reviewing code]".to_string()
}
fn default_api_base_url() -> String {
    "https://api.clockify.me/api/v1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            workspace_id: String::new(),
            timezone: default_timezone(),
            work_start: default_work_start(),
            work_end: default_work_end(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            filler_description: default_filler_description(),
            default_project_id: None,
            default_task_id: None,
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gapfill")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gapfill")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gapfill.conf")
    }

    /// Load configuration from the given file (or the default location),
    /// then apply the CLOCKIFY_KEY / CLOCKIFY_WORKSPACE_ID environment
    /// overrides. Missing file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        };

        if let Ok(key) = env::var("CLOCKIFY_KEY")
            && !key.is_empty()
        {
            cfg.api_key = key;
        }
        if let Ok(ws) = env::var("CLOCKIFY_WORKSPACE_ID")
            && !ws.is_empty()
        {
            cfg.workspace_id = ws;
        }

        cfg
    }

    /// Create the config directory and write a config file skeleton.
    /// An existing file is left untouched.
    pub fn init_all(custom_path: Option<&Path>) -> AppResult<PathBuf> {
        let path = match custom_path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        if path.exists() {
            return Ok(path);
        }

        let yaml =
            serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Fatal check run before any network call.
    pub fn require_credentials(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config(
                "Please set your API key in the config file or the CLOCKIFY_KEY environment variable".to_string(),
            ));
        }
        if self.workspace_id.is_empty() {
            return Err(AppError::Config(
                "Please set your workspace ID in the config file or the CLOCKIFY_WORKSPACE_ID environment variable".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured IANA time zone.
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    /// Work and blocked windows as minute-of-day intervals.
    pub fn gap_config(&self) -> AppResult<GapConfig> {
        let work = Interval::new(
            parse_minute_of_day(&self.work_start)?,
            parse_minute_of_day(&self.work_end)?,
        )?;
        let lunch = Interval::new(
            parse_minute_of_day(&self.lunch_start)?,
            parse_minute_of_day(&self.lunch_end)?,
        )?;
        Ok(GapConfig {
            work,
            blocked: vec![lunch],
        })
    }

    /// List the problems `config --check` reports: missing credentials and
    /// unparsable time zone or window fields.
    pub fn check_missing(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.api_key.is_empty() {
            problems.push("api_key is not set (or CLOCKIFY_KEY)".to_string());
        }
        if self.workspace_id.is_empty() {
            problems.push("workspace_id is not set (or CLOCKIFY_WORKSPACE_ID)".to_string());
        }
        if self.tz().is_err() {
            problems.push(format!("timezone '{}' is not a valid IANA zone", self.timezone));
        }
        if let Err(e) = self.gap_config() {
            problems.push(format!("work/lunch window: {e}"));
        }
        problems
    }
}
