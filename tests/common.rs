#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gf() -> Command {
    cargo_bin_cmd!("gapfill")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gapfill.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a config file pointing at a mock API server. UTC keeps the
/// wall-clock math in the assertions trivial.
pub fn write_test_config(name: &str, base_url: &str) -> String {
    let path = setup_test_config(name);
    let yaml = format!(
        "api_key: test-key\n\
         workspace_id: ws1\n\
         timezone: UTC\n\
         work_start: \"09:00\"\n\
         work_end: \"18:00\"\n\
         lunch_start: \"12:00\"\n\
         lunch_end: \"13:00\"\n\
         filler_description: \"[Dev Work, Reviewing code]\"\n\
         api_base_url: {}\n",
        base_url
    );
    fs::write(&path, yaml).expect("failed to write test config");
    path
}

/// JSON body for one wire-format time entry.
pub fn entry_json(id: &str, project: &str, task: &str, start: &str, end: &str) -> String {
    format!(
        "{{\"id\":\"{id}\",\"projectId\":\"{project}\",\"taskId\":\"{task}\",\
         \"billable\":true,\"description\":\"meeting\",\
         \"timeInterval\":{{\"start\":\"{start}\",\"end\":\"{end}\"}}}}"
    )
}

pub const USER_JSON: &str =
    "{\"id\":\"u1\",\"name\":\"Test User\",\"email\":\"test@example.com\"}";
