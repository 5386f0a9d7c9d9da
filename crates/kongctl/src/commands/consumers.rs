//! Consumer command handlers.

use tabled::Tabled;

use kong_api::{Consumer, KongClient, NewConsumer};

use crate::cli::{ConsumersArgs, ConsumersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::plugins;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConsumerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Custom ID")]
    custom_id: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Consumer> for ConsumerRow {
    fn from(c: &Consumer) -> Self {
        Self {
            id: c.id.clone(),
            username: c.username.clone().unwrap_or_default(),
            custom_id: c.custom_id.clone().unwrap_or_default(),
            tags: output::join(c.tags.as_ref()),
        }
    }
}

fn print_consumer(consumer: &Consumer, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), consumer, |c| c.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &KongClient,
    args: ConsumersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let consumers = client.consumers();
    match args.command {
        ConsumersCommand::List(list) => {
            let all = consumers.list(list.tags.as_deref()).await?;
            let out = output::render_list(
                &global.format(),
                &all,
                |c| ConsumerRow::from(c),
                |c| c.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConsumersCommand::Get { consumer } => {
            let found = consumers
                .get(&consumer)
                .await
                .map_err(|e| CliError::for_resource(e, "consumer", &consumer))?;
            print_consumer(&found, global)
        }

        ConsumersCommand::Create {
            username,
            custom_id,
            tags,
        } => {
            let label = username
                .clone()
                .or_else(|| custom_id.clone())
                .unwrap_or_default();
            let new = NewConsumer {
                username,
                custom_id,
                tags: util::non_empty(tags),
            };
            let created = consumers
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "consumer", &label))?;
            output::notice(&format!("Consumer '{label}' created"), global.quiet);
            print_consumer(&created, global)
        }

        ConsumersCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = consumers
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "consumer", &update.id))?;
            print_consumer(&updated, global)
        }

        ConsumersCommand::Delete { consumer } => {
            if !util::confirm(&format!("Delete consumer '{consumer}'?"), global.yes)? {
                return Ok(());
            }
            consumers
                .delete(&consumer)
                .await
                .map_err(|e| CliError::for_resource(e, "consumer", &consumer))?;
            output::notice(&format!("Consumer '{consumer}' deleted"), global.quiet);
            Ok(())
        }

        ConsumersCommand::Plugins { consumer } => {
            let scoped = consumers
                .list_plugins(&consumer)
                .await
                .map_err(|e| CliError::for_resource(e, "consumer", &consumer))?;
            plugins::print_plugins(&scoped, global)
        }
    }
}
