//! Plugin command handlers.

use serde_json::Value;
use tabled::Tabled;

use kong_api::{KongClient, NewPlugin, Plugin};

use crate::cli::{GlobalOpts, OutputFormat, PluginsArgs, PluginsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PluginRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Scope")]
    scope: String,
}

impl PluginRow {
    fn new(p: &Plugin, color: bool) -> Self {
        let scope = [
            ("route", &p.route),
            ("service", &p.service),
            ("consumer", &p.consumer),
        ]
        .into_iter()
        .filter_map(|(kind, r)| r.as_ref().map(|r| format!("{kind}:{}", r.id)))
        .collect::<Vec<_>>();

        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            enabled: output::paint_flag(p.enabled, color),
            scope: if scope.is_empty() {
                "global".into()
            } else {
                scope.join(" ")
            },
        }
    }
}

pub(super) fn print_plugins(plugins: &[Plugin], global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.format(),
        plugins,
        |p| PluginRow::new(p, color),
        |p| p.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_plugin(plugin: &Plugin, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), plugin, |p| p.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    client: &KongClient,
    args: PluginsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let plugins = client.plugins();
    match args.command {
        PluginsCommand::List(list) => {
            let all = plugins.list(list.tags.as_deref()).await?;
            print_plugins(&all, global)
        }

        PluginsCommand::Get { plugin } => {
            let found = plugins
                .get(&plugin)
                .await
                .map_err(|e| CliError::for_resource(e, "plugin", &plugin))?;
            print_plugin(&found, global)
        }

        PluginsCommand::Create {
            name,
            route,
            service,
            consumer,
            config,
            config_file,
            disabled,
            tags,
        } => {
            let config = match config_file {
                Some(path) => util::read_json_object(&path)?,
                None => util::parse_assignments(&config, "config")?,
            };
            let new = NewPlugin {
                route_id: route,
                service_id: service,
                consumer_id: consumer,
                config: Some(config),
                enabled: !disabled,
                tags: util::non_empty(tags),
                ..NewPlugin::new(name.clone())
            };
            let created = plugins
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "plugin", &name))?;
            output::notice(&format!("Plugin '{name}' created"), global.quiet);
            print_plugin(&created, global)
        }

        PluginsCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = plugins
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "plugin", &update.id))?;
            print_plugin(&updated, global)
        }

        PluginsCommand::Delete { plugin } => {
            if !util::confirm(&format!("Delete plugin '{plugin}'?"), global.yes)? {
                return Ok(());
            }
            plugins
                .delete(&plugin)
                .await
                .map_err(|e| CliError::for_resource(e, "plugin", &plugin))?;
            output::notice(&format!("Plugin '{plugin}' deleted"), global.quiet);
            Ok(())
        }

        PluginsCommand::Enabled => {
            let enabled = plugins.list_enabled().await?;
            let names: Vec<String> = enabled
                .get("enabled_plugins")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default();
            let out = match global.format() {
                OutputFormat::Table | OutputFormat::Plain => {
                    names.join("\n")
                }
                format => output::render_single(&format, &enabled, |_| String::new())?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PluginsCommand::Schema { name } => {
            let schema = plugins
                .get_schema(&name)
                .await
                .map_err(|e| CliError::for_resource(e, "plugin schema", &name))?;
            // A schema is deeply nested; a field table would be unreadable.
            let format = match global.format() {
                OutputFormat::Table | OutputFormat::Plain => {
                    OutputFormat::Json
                }
                other => other,
            };
            let out = output::render_single(&format, &schema, |_| String::new())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
