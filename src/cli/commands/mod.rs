pub mod ask;
pub mod auth;
pub mod diary;
pub mod fields;
pub mod record;

use anyhow::Result;
use serde_json::Value;

use crate::api::InsyteClient;
use crate::auth::Connection;
use crate::config::{Config, Settings};

/// Resolve the active connection: the selected config environment when one
/// exists, otherwise the `INSYTE_*` environment variables.
pub(crate) fn load_client() -> Result<(InsyteClient, Settings)> {
    let config = Config::load()?;

    let connection = match config.get_current_connection() {
        Some(connection_config) => connection_config.to_connection()?,
        None => Connection::from_env().map_err(|e| {
            anyhow::anyhow!(
                "No environment configured. Run 'insyte-cli auth setup' or set INSYTE_* variables ({})",
                e
            )
        })?,
    };

    let settings = config.settings.clone();
    let client = InsyteClient::new(connection)
        .with_page_limits(settings.default_page_size, settings.max_pages);
    Ok((client, settings))
}

pub(crate) fn print_records(records: &[Value], pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    println!("{}", output);
    Ok(())
}
