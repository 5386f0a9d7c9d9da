// Route endpoints

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::{Plugin, Route, Service};
use crate::requests::{NewPlugin, NewRoute};

#[derive(Debug, Clone, Copy)]
pub struct RouteManager<'a> {
    api: Manager<'a>,
}

impl<'a> RouteManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /routes[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Route>, Error> {
        self.api.list(&tagged_path("/routes", tags)).await
    }

    /// `GET /services/{service}/routes`
    pub async fn list_by_service(&self, service: &str) -> Result<Vec<Route>, Error> {
        self.api.list(&format!("/services/{}/routes", segment(service))).await
    }

    /// `GET /routes/{id}`
    pub async fn get(&self, id: &str) -> Result<Route, Error> {
        self.api.fetch(&format!("/routes/{}", segment(id))).await
    }

    /// `GET /services/{service}/routes/{id}`
    pub async fn get_by_service(&self, service: &str, id: &str) -> Result<Route, Error> {
        self.api
            .fetch(&format!("/services/{}/routes/{}", segment(service), segment(id)))
            .await
    }

    /// `GET /plugins/{plugin}/route`
    pub async fn get_by_plugin(&self, plugin: &str) -> Result<Route, Error> {
        self.api.fetch(&format!("/plugins/{}/route", segment(plugin))).await
    }

    /// The service a route forwards to.
    ///
    /// `GET /routes/{id}/service`
    pub async fn get_service(&self, id: &str) -> Result<Service, Error> {
        self.api.fetch(&format!("/routes/{}/service", segment(id))).await
    }

    /// `POST /routes`. `service_id`, when set, is sent as `service: { id }`.
    pub async fn create(&self, route: &NewRoute) -> Result<Route, Error> {
        debug!(name = %route.name, service_id = ?route.service_id, "creating route");
        self.api.create("/routes", &route.to_body()).await
    }

    /// `POST /services/{service}/routes`
    pub async fn create_by_service(&self, service: &str, route: &NewRoute) -> Result<Route, Error> {
        debug!(service_id = service, name = %route.name, "creating route by service");
        self.api
            .create(&format!("/services/{}/routes", segment(service)), &route.to_body())
            .await
    }

    /// `PATCH /routes/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Route, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(route_id = id, "updating route");
        self.api
            .update_shaped(&format!("/routes/{}", segment(id)), &fields::ROUTE, changes)
            .await
    }

    /// `PATCH /services/{service}/routes/{id}`
    pub async fn update_by_service<C>(
        &self,
        service: &str,
        id: &str,
        changes: &C,
    ) -> Result<Route, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(service_id = service, route_id = id, "updating route by service");
        self.api
            .update_shaped(
                &format!("/services/{}/routes/{}", segment(service), segment(id)),
                &fields::ROUTE,
                changes,
            )
            .await
    }

    /// `PATCH /plugins/{plugin}/route`
    pub async fn update_by_plugin<C>(&self, plugin: &str, changes: &C) -> Result<Route, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(plugin_id = plugin, "updating route by plugin");
        self.api
            .update_shaped(&format!("/plugins/{}/route", segment(plugin)), &fields::ROUTE, changes)
            .await
    }

    /// `DELETE /routes/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(route_id = id, "deleting route");
        self.api.delete(&format!("/routes/{}", segment(id))).await
    }

    /// `DELETE /services/{service}/routes/{id}`
    pub async fn delete_by_service(&self, service: &str, id: &str) -> Result<(), Error> {
        debug!(service_id = service, route_id = id, "deleting route by service");
        self.api
            .delete(&format!("/services/{}/routes/{}", segment(service), segment(id)))
            .await
    }

    /// `GET /routes/{id}/plugins`
    pub async fn list_plugins(&self, id: &str) -> Result<Vec<Plugin>, Error> {
        self.api.list(&format!("/routes/{}/plugins", segment(id))).await
    }

    /// `GET /routes/{id}/plugins/{plugin}`
    pub async fn get_plugin(&self, id: &str, plugin: &str) -> Result<Plugin, Error> {
        self.api
            .fetch(&format!("/routes/{}/plugins/{}", segment(id), segment(plugin)))
            .await
    }

    /// `POST /routes/{id}/plugins`
    pub async fn add_plugin(&self, id: &str, plugin: &NewPlugin) -> Result<Plugin, Error> {
        debug!(route_id = id, name = %plugin.name, "adding plugin to route");
        self.api
            .create(&format!("/routes/{}/plugins", segment(id)), &plugin.to_body())
            .await
    }
}
