//! Route command handlers.

use tabled::Tabled;

use kong_api::{KongClient, NewRoute, Route};

use crate::cli::{GlobalOpts, RoutesArgs, RoutesCommand};
use crate::error::CliError;
use crate::output;

use super::util;
use super::{plugins, services};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Hosts")]
    hosts: String,
    #[tabled(rename = "Paths")]
    paths: String,
    #[tabled(rename = "Methods")]
    methods: String,
    #[tabled(rename = "Service")]
    service: String,
}

impl From<&Route> for RouteRow {
    fn from(r: &Route) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone().unwrap_or_default(),
            hosts: output::join(r.hosts.as_ref()),
            paths: output::join(r.paths.as_ref()),
            methods: output::join(r.methods.as_ref()),
            service: r.service.as_ref().map(|s| s.id.clone()).unwrap_or_default(),
        }
    }
}

pub(super) fn print_routes(routes: &[Route], global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.format(),
        routes,
        |r| RouteRow::from(r),
        |r| r.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_route(route: &Route, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), route, |r| r.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    client: &KongClient,
    args: RoutesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let routes = client.routes();
    match args.command {
        RoutesCommand::List { list, service } => {
            let all = match service {
                Some(service) => routes
                    .list_by_service(&service)
                    .await
                    .map_err(|e| CliError::for_resource(e, "service", &service))?,
                None => routes.list(list.tags.as_deref()).await?,
            };
            print_routes(&all, global)
        }

        RoutesCommand::Get { route } => {
            let found = routes
                .get(&route)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &route))?;
            print_route(&found, global)
        }

        RoutesCommand::Create {
            name,
            service,
            hosts,
            paths,
            methods,
            protocols,
            snis,
            strip_path,
            preserve_host,
            regex_priority,
            https_redirect_status_code,
            tags,
        } => {
            let mut new = NewRoute {
                service_id: service,
                hosts: util::non_empty(hosts),
                paths: util::non_empty(paths),
                snis: util::non_empty(snis),
                strip_path,
                preserve_host,
                regex_priority,
                https_redirect_status_code,
                tags: util::non_empty(tags),
                ..NewRoute::new(name.clone())
            };
            if let Some(methods) = util::non_empty(methods) {
                new.methods = methods.into_iter().map(|m| m.to_uppercase()).collect();
            }
            if let Some(protocols) = util::non_empty(protocols) {
                new.protocols = protocols;
            }

            let created = routes
                .create(&new)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &name))?;
            output::notice(&format!("Route '{name}' created"), global.quiet);
            print_route(&created, global)
        }

        RoutesCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = routes
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &update.id))?;
            print_route(&updated, global)
        }

        RoutesCommand::Delete { route } => {
            if !util::confirm(&format!("Delete route '{route}'?"), global.yes)? {
                return Ok(());
            }
            routes
                .delete(&route)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &route))?;
            output::notice(&format!("Route '{route}' deleted"), global.quiet);
            Ok(())
        }

        RoutesCommand::Service { route } => {
            let service = routes
                .get_service(&route)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &route))?;
            services::print_service(&service, global)
        }

        RoutesCommand::Plugins { route } => {
            let scoped = routes
                .list_plugins(&route)
                .await
                .map_err(|e| CliError::for_resource(e, "route", &route))?;
            plugins::print_plugins(&scoped, global)
        }
    }
}
