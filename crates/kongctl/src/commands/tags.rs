//! Tag command handlers.

use tabled::Tabled;

use kong_api::{KongClient, TaggedEntity};

use crate::cli::{GlobalOpts, TagsArgs, TagsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Entity")]
    entity_name: String,
    #[tabled(rename = "ID")]
    entity_id: String,
}

impl From<&TaggedEntity> for TagRow {
    fn from(t: &TaggedEntity) -> Self {
        Self {
            tag: t.tag.clone(),
            entity_name: t.entity_name.clone(),
            entity_id: t.entity_id.clone(),
        }
    }
}

pub async fn handle(client: &KongClient, args: TagsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let tagged = match args.command {
        TagsCommand::List => client.tags().list().await?,
        TagsCommand::Get { tag } => client
            .tags()
            .get(&tag)
            .await
            .map_err(|e| CliError::for_resource(e, "tag", &tag))?,
    };

    let out = output::render_list(
        &global.format(),
        &tagged,
        |t| TagRow::from(t),
        |t| format!("{}\t{}", t.entity_name, t.entity_id),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
