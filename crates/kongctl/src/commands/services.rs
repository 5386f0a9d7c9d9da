//! Service command handlers.

use tabled::Tabled;

use kong_api::{KongClient, NewService, Service};

use crate::cli::{GlobalOpts, ServicesArgs, ServicesCommand};
use crate::error::CliError;
use crate::output;

use super::util;
use super::{plugins, routes};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(super) struct ServiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Service> for ServiceRow {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone().unwrap_or_default(),
            protocol: s.protocol.clone().unwrap_or_default(),
            host: s.host.clone().unwrap_or_default(),
            port: s.port.map(|p| p.to_string()).unwrap_or_default(),
            path: s.path.clone().unwrap_or_default(),
            tags: output::join(s.tags.as_ref()),
        }
    }
}

pub(super) fn print_services(services: &[Service], global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        services,
        |s| ServiceRow::from(s),
        |s| s.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub(super) fn print_service(service: &Service, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), service, |s| s.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &KongClient,
    args: ServicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let services = client.services();
    match args.command {
        ServicesCommand::List(list) => {
            let all = services.list(list.tags.as_deref()).await?;
            print_services(&all, global)
        }

        ServicesCommand::Get { service } => {
            let found = services
                .get(&service)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &service))?;
            print_service(&found, global)
        }

        ServicesCommand::Create {
            name,
            url,
            protocol,
            host,
            port,
            path,
            retries,
            connect_timeout,
            write_timeout,
            read_timeout,
            client_certificate,
            tags,
        } => {
            let new = NewService {
                url,
                protocol,
                host,
                port,
                path,
                retries,
                connect_timeout,
                write_timeout,
                read_timeout,
                client_certificate,
                tags: util::non_empty(tags),
                ..NewService::new(name.clone())
            };
            let created = services
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &name))?;
            output::notice(&format!("Service '{name}' created"), global.quiet);
            print_service(&created, global)
        }

        ServicesCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = services
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &update.id))?;
            print_service(&updated, global)
        }

        ServicesCommand::Delete { service } => {
            if !util::confirm(&format!("Delete service '{service}'?"), global.yes)? {
                return Ok(());
            }
            services
                .delete(&service)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &service))?;
            output::notice(&format!("Service '{service}' deleted"), global.quiet);
            Ok(())
        }

        ServicesCommand::Routes { service } => {
            let attached = services
                .list_routes(&service)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &service))?;
            routes::print_routes(&attached, global)
        }

        ServicesCommand::Plugins { service } => {
            let scoped = services
                .list_plugins(&service)
                .await
                .map_err(|e| CliError::for_resource(e, "service", &service))?;
            plugins::print_plugins(&scoped, global)
        }
    }
}
