//! Target command handlers.

use tabled::Tabled;

use kong_api::{KongClient, NewTarget, Target, UpstreamHealth};

use crate::cli::{GlobalOpts, OutputFormat, TargetHealthArgs, TargetsArgs, TargetsCommand};
use crate::error::CliError;
use crate::output;

use super::upstreams;
use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Upstream")]
    upstream: String,
}

impl From<&Target> for TargetRow {
    fn from(t: &Target) -> Self {
        Self {
            id: t.id.clone(),
            target: t.target.clone(),
            weight: t.weight.map(|w| w.to_string()).unwrap_or_default(),
            upstream: t
                .upstream
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct HealthRow {
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Health")]
    health: String,
}

pub(super) fn print_targets(targets: &[Target], global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        targets,
        |t| TargetRow::from(t),
        |t| t.target.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub(super) fn print_health(health: &UpstreamHealth, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match global.format() {
        // Structured formats keep node_id and total alongside the targets.
        OutputFormat::Table => {
            let color = output::should_color(&global.color);
            output::render_list(
                &OutputFormat::Table,
                &health.data,
                |t| HealthRow {
                    target: t.target.clone(),
                    weight: t.weight.map(|w| w.to_string()).unwrap_or_default(),
                    health: output::paint_health(t.health.as_deref().unwrap_or("UNKNOWN"), color),
                },
                |t| t.target.clone(),
            )?
        }
        OutputFormat::Plain => health
            .data
            .iter()
            .map(|t| format!("{}\t{}", t.target, t.health.as_deref().unwrap_or("UNKNOWN")))
            .collect::<Vec<_>>()
            .join("\n"),
        format => output::render_single(&format, health, |_| String::new())?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_target(target: &Target, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), target, |t| t.target.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

async fn set_health(
    client: &KongClient,
    args: &TargetHealthArgs,
    healthy: bool,
) -> Result<(), CliError> {
    let targets = client.targets();
    let (upstream, target) = (args.upstream.as_str(), args.target.as_str());
    let result = match (&args.address, healthy) {
        (None, true) => targets.set_healthy_target_by_upstream(upstream, target).await,
        (None, false) => targets.set_unhealthy_target_by_upstream(upstream, target).await,
        (Some(address), true) => {
            targets
                .set_healthy_address_by_upstream(upstream, target, address)
                .await
        }
        (Some(address), false) => {
            targets
                .set_unhealthy_address_by_upstream(upstream, target, address)
                .await
        }
    };
    result.map_err(|e| CliError::for_resource(e, "target", target))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &KongClient,
    args: TargetsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let targets = client.targets();
    match args.command {
        TargetsCommand::List { upstream, all } => {
            let members = if all {
                targets.list_all_by_upstream(&upstream).await
            } else {
                targets.list_by_upstream(&upstream).await
            }
            .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            print_targets(&members, global)
        }

        TargetsCommand::Create {
            upstream,
            target,
            weight,
            tags,
        } => {
            let new = NewTarget {
                weight,
                tags: util::non_empty(tags),
                ..NewTarget::new(target.clone())
            };
            let created = targets
                .create_by_upstream(&upstream, &new)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            output::notice(
                &format!("Target '{target}' added to '{upstream}'"),
                global.quiet,
            );
            print_target(&created, global)
        }

        TargetsCommand::Update { upstream, update } => {
            let changes = util::update_changes(&update)?;
            let updated = targets
                .update_by_upstream(&upstream, &update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "target", &update.id))?;
            print_target(&updated, global)
        }

        TargetsCommand::Delete { upstream, target } => {
            if !util::confirm(
                &format!("Remove target '{target}' from '{upstream}'?"),
                global.yes,
            )? {
                return Ok(());
            }
            targets
                .delete_target_by_upstream(&upstream, &target)
                .await
                .map_err(|e| CliError::for_resource(e, "target", &target))?;
            output::notice(&format!("Target '{target}' removed"), global.quiet);
            Ok(())
        }

        TargetsCommand::Healthy(args) => {
            set_health(client, &args, true).await?;
            output::notice(&format!("Target '{}' marked healthy", args.target), global.quiet);
            Ok(())
        }

        TargetsCommand::Unhealthy(args) => {
            set_health(client, &args, false).await?;
            output::notice(
                &format!("Target '{}' marked unhealthy", args.target),
                global.quiet,
            );
            Ok(())
        }

        TargetsCommand::Upstream { target } => {
            let upstream = targets
                .get_upstream(&target)
                .await
                .map_err(|e| CliError::for_resource(e, "target", &target))?;
            upstreams::print_upstream(&upstream, global)
        }
    }
}
