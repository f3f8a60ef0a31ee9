pub mod config;
pub mod fill;
pub mod init;
pub mod preview;
pub mod whoami;

use crate::api::ClockifyClient;
use crate::config::Config;
use crate::core::preview::{PreviewLogic, PreviewOutcome};
use crate::core::week::parse_reference;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::today_in;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Resolve the user-supplied reference date. Absent → today in the
/// configured zone; unparsable → today, with a visible notice.
pub(crate) fn resolve_reference(input: Option<&str>, tz: Tz) -> NaiveDate {
    match input {
        None => today_in(tz),
        Some(raw) => match parse_reference(raw) {
            Ok(date) => date,
            Err(_) => {
                messages::warning(format!("Invalid date '{raw}'; using today instead."));
                today_in(tz)
            }
        },
    }
}

/// Shared prologue of `preview` and `fill`: validate config, resolve the
/// reference date, authenticate and build the week report.
pub(crate) fn preview_week(
    cfg: &Config,
    date: Option<&str>,
) -> AppResult<(PreviewOutcome, ClockifyClient, Tz)> {
    cfg.require_credentials()?;
    let tz = cfg.tz()?;
    let gap_cfg = cfg.gap_config()?;
    let reference = resolve_reference(date, tz);

    let client = ClockifyClient::from_config(cfg);
    let user = client.current_user()?;
    messages::info(format!(
        "Logged in as {} (user_id={})",
        user.display_name(),
        user.id
    ));

    let outcome = PreviewLogic::build_report(&client, tz, &gap_cfg, reference)?;
    Ok((outcome, client, tz))
}
