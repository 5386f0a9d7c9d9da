//! Upstream command handlers.

use tabled::Tabled;

use kong_api::{KongClient, NewUpstream, Upstream};

use crate::cli::{GlobalOpts, UpstreamsArgs, UpstreamsCommand};
use crate::error::CliError;
use crate::output;

use super::targets;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UpstreamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Algorithm")]
    algorithm: String,
    #[tabled(rename = "Hash On")]
    hash_on: String,
    #[tabled(rename = "Slots")]
    slots: String,
}

impl From<&Upstream> for UpstreamRow {
    fn from(u: &Upstream) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            algorithm: u.algorithm.clone().unwrap_or_default(),
            hash_on: u.hash_on.clone().unwrap_or_default(),
            slots: u.slots.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

pub(super) fn print_upstream(upstream: &Upstream, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), upstream, |u| u.name.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &KongClient,
    args: UpstreamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let upstreams = client.upstreams();
    match args.command {
        UpstreamsCommand::List(list) => {
            let all = upstreams.list(list.tags.as_deref()).await?;
            let out = output::render_list(
                &global.format(),
                &all,
                |u| UpstreamRow::from(u),
                |u| u.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UpstreamsCommand::Get { upstream } => {
            let found = upstreams
                .get(&upstream)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            print_upstream(&found, global)
        }

        UpstreamsCommand::Create {
            name,
            algorithm,
            hash_on,
            hash_fallback,
            slots,
            host_header,
            tags,
        } => {
            let new = NewUpstream {
                algorithm,
                hash_on,
                hash_fallback,
                slots,
                host_header,
                tags: util::non_empty(tags),
                ..NewUpstream::new(name.clone())
            };
            let created = upstreams
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &name))?;
            output::notice(&format!("Upstream '{name}' created"), global.quiet);
            print_upstream(&created, global)
        }

        UpstreamsCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = upstreams
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &update.id))?;
            print_upstream(&updated, global)
        }

        UpstreamsCommand::Delete { upstream } => {
            if !util::confirm(
                &format!("Delete upstream '{upstream}' and its targets?"),
                global.yes,
            )? {
                return Ok(());
            }
            upstreams
                .delete(&upstream)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            output::notice(&format!("Upstream '{upstream}' deleted"), global.quiet);
            Ok(())
        }

        UpstreamsCommand::Health { upstream } => {
            let health = upstreams
                .get_health(&upstream)
                .await
                .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            targets::print_health(&health, global)
        }

        UpstreamsCommand::Targets { upstream, all } => {
            let members = if all {
                upstreams.list_all_targets(&upstream).await
            } else {
                upstreams.list_targets(&upstream).await
            }
            .map_err(|e| CliError::for_resource(e, "upstream", &upstream))?;
            targets::print_targets(&members, global)
        }
    }
}
