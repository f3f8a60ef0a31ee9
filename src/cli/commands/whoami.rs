use crate::api::ClockifyClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `whoami` command: resolve the user behind the API key.
pub fn handle(cfg: &Config) -> AppResult<()> {
    cfg.require_credentials()?;

    let client = ClockifyClient::from_config(cfg);
    let user = client.current_user()?;

    messages::success(format!(
        "Logged in as {} (user_id={})",
        user.display_name(),
        user.id
    ));
    if let Some(email) = &user.email {
        println!("   e-mail:    {}", email);
    }
    println!("   workspace: {}", cfg.workspace_id);

    Ok(())
}
