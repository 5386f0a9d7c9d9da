//! Node information and status.

use serde_json::Value;

use kong_api::KongClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn field(value: &Value, key: &str) -> String {
    value.get(key).map(output::cell).unwrap_or_default()
}

pub async fn handle_info(client: &KongClient, global: &GlobalOpts) -> Result<(), CliError> {
    let info = client.info().get_node_info().await?;
    let out = output::render_single(&global.format(), &info, |v| {
        format!("{}\t{}", field(v, "hostname"), field(v, "version"))
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_status(client: &KongClient, global: &GlobalOpts) -> Result<(), CliError> {
    let status = client.info().get_node_status().await?;
    let out = output::render_single(&global.format(), &status, |s| {
        s.database
            .as_ref()
            .map(|db| db.reachable.to_string())
            .unwrap_or_default()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
