// Service endpoints
//
// `/services` plus the views reachable from routes, plugins and
// certificates. Also creates routes and plugins scoped to a service.

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::{Plugin, Route, Service};
use crate::requests::{NewPlugin, NewRoute, NewService};

#[derive(Debug, Clone, Copy)]
pub struct ServiceManager<'a> {
    api: Manager<'a>,
}

impl<'a> ServiceManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// List services, optionally filtered by tag expression.
    ///
    /// `GET /services[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Service>, Error> {
        self.api.list(&tagged_path("/services", tags)).await
    }

    /// Services presenting the given client certificate.
    ///
    /// `GET /certificates/{cert}/services`
    pub async fn list_by_certificate(&self, cert: &str) -> Result<Vec<Service>, Error> {
        self.api
            .list(&format!("/certificates/{}/services", segment(cert)))
            .await
    }

    /// `GET /services/{id}`
    pub async fn get(&self, id: &str) -> Result<Service, Error> {
        self.api.fetch(&format!("/services/{}", segment(id))).await
    }

    /// `GET /routes/{route}/service`
    pub async fn get_by_route(&self, route: &str) -> Result<Service, Error> {
        self.api.fetch(&format!("/routes/{}/service", segment(route))).await
    }

    /// `GET /plugins/{plugin}/service`
    pub async fn get_by_plugin(&self, plugin: &str) -> Result<Service, Error> {
        self.api.fetch(&format!("/plugins/{}/service", segment(plugin))).await
    }

    /// Create a service.
    ///
    /// `POST /services`. When `url` is set the four-part
    /// protocol/host/port/path form is not sent.
    pub async fn create(&self, service: &NewService) -> Result<Service, Error> {
        debug!(name = %service.name, "creating service");
        self.api.create("/services", &service.to_body()).await
    }

    /// `PATCH /services/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Service, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(service_id = id, "updating service");
        self.api
            .update_shaped(&format!("/services/{}", segment(id)), &fields::SERVICE, changes)
            .await
    }

    /// `PATCH /routes/{route}/service`
    pub async fn update_by_route<C>(&self, route: &str, changes: &C) -> Result<Service, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(route_id = route, "updating service by route");
        self.api
            .update_shaped(&format!("/routes/{}/service", segment(route)), &fields::SERVICE, changes)
            .await
    }

    /// `PATCH /plugins/{plugin}/service`
    pub async fn update_by_plugin<C>(&self, plugin: &str, changes: &C) -> Result<Service, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(plugin_id = plugin, "updating service by plugin");
        self.api
            .update_shaped(
                &format!("/plugins/{}/service", segment(plugin)),
                &fields::SERVICE,
                changes,
            )
            .await
    }

    /// `PATCH /certificates/{cert}/services/{id}`
    pub async fn update_by_certificate<C>(
        &self,
        cert: &str,
        id: &str,
        changes: &C,
    ) -> Result<Service, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(certificate_id = cert, service_id = id, "updating service by certificate");
        self.api
            .update_shaped(
                &format!("/certificates/{}/services/{}", segment(cert), segment(id)),
                &fields::SERVICE,
                changes,
            )
            .await
    }

    /// `DELETE /services/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(service_id = id, "deleting service");
        self.api.delete(&format!("/services/{}", segment(id))).await
    }

    /// `DELETE /routes/{route}/service`
    pub async fn delete_by_route(&self, route: &str) -> Result<(), Error> {
        debug!(route_id = route, "deleting service by route");
        self.api.delete(&format!("/routes/{}/service", segment(route))).await
    }

    /// `DELETE /certificates/{cert}/services/{id}`
    pub async fn delete_by_certificate(&self, cert: &str, id: &str) -> Result<(), Error> {
        debug!(certificate_id = cert, service_id = id, "deleting service by certificate");
        self.api
            .delete(&format!("/certificates/{}/services/{}", segment(cert), segment(id)))
            .await
    }

    /// `GET /services/{id}/routes`
    pub async fn list_routes(&self, id: &str) -> Result<Vec<Route>, Error> {
        self.api.list(&format!("/services/{}/routes", segment(id))).await
    }

    /// Create a route attached to this service.
    ///
    /// `POST /services/{id}/routes`
    pub async fn add_route(&self, id: &str, route: &NewRoute) -> Result<Route, Error> {
        debug!(service_id = id, name = %route.name, "adding route to service");
        self.api
            .create(&format!("/services/{}/routes", segment(id)), &route.to_body())
            .await
    }

    /// `GET /services/{id}/plugins`
    pub async fn list_plugins(&self, id: &str) -> Result<Vec<Plugin>, Error> {
        self.api.list(&format!("/services/{}/plugins", segment(id))).await
    }

    /// `GET /services/{id}/plugins/{plugin}`
    pub async fn get_plugin(&self, id: &str, plugin: &str) -> Result<Plugin, Error> {
        self.api
            .fetch(&format!("/services/{}/plugins/{}", segment(id), segment(plugin)))
            .await
    }

    /// `POST /services/{id}/plugins`
    pub async fn add_plugin(&self, id: &str, plugin: &NewPlugin) -> Result<Plugin, Error> {
        debug!(service_id = id, name = %plugin.name, "adding plugin to service");
        self.api
            .create(&format!("/services/{}/plugins", segment(id)), &plugin.to_body())
            .await
    }
}
