//! SNI command handlers.

use tabled::Tabled;

use kong_api::{KongClient, NewSni, Sni};

use crate::cli::{GlobalOpts, SnisArgs, SnisCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SniRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Certificate")]
    certificate: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Sni> for SniRow {
    fn from(s: &Sni) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            certificate: s
                .certificate
                .as_ref()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            tags: output::join(s.tags.as_ref()),
        }
    }
}

pub(super) fn print_snis(snis: &[Sni], global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        snis,
        |s| SniRow::from(s),
        |s| s.name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_sni(sni: &Sni, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), sni, |s| s.name.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(client: &KongClient, args: SnisArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let snis = client.snis();
    match args.command {
        SnisCommand::List { list, certificate } => {
            let all = match certificate {
                Some(cert) => snis
                    .list_by_certificate(&cert)
                    .await
                    .map_err(|e| CliError::for_resource(e, "certificate", &cert))?,
                None => snis.list(list.tags.as_deref()).await?,
            };
            print_snis(&all, global)
        }

        SnisCommand::Get { sni } => {
            let found = snis
                .get(&sni)
                .await
                .map_err(|e| CliError::for_resource(e, "sni", &sni))?;
            print_sni(&found, global)
        }

        SnisCommand::Create {
            name,
            certificate,
            tags,
        } => {
            let new = NewSni {
                tags: util::non_empty(tags),
                ..NewSni::new(name.clone(), certificate)
            };
            let created = snis
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "sni", &name))?;
            output::notice(&format!("SNI '{name}' created"), global.quiet);
            print_sni(&created, global)
        }

        SnisCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = snis
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "sni", &update.id))?;
            print_sni(&updated, global)
        }

        SnisCommand::Delete { sni } => {
            if !util::confirm(&format!("Delete SNI '{sni}'?"), global.yes)? {
                return Ok(());
            }
            snis.delete(&sni)
                .await
                .map_err(|e| CliError::for_resource(e, "sni", &sni))?;
            output::notice(&format!("SNI '{sni}' deleted"), global.quiet);
            Ok(())
        }
    }
}
