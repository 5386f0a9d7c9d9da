// Plugin endpoints
//
// Plugin instances plus the two catalogue views (`/plugins/enabled` and
// `/plugins/schema/{name}`), which are returned as raw JSON since their
// shape depends on the gateway version and installed plugins.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::Plugin;
use crate::requests::NewPlugin;

#[derive(Debug, Clone, Copy)]
pub struct PluginManager<'a> {
    api: Manager<'a>,
}

impl<'a> PluginManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /plugins[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Plugin>, Error> {
        self.api.list(&tagged_path("/plugins", tags)).await
    }

    /// `GET /plugins/{id}`
    pub async fn get(&self, id: &str) -> Result<Plugin, Error> {
        self.api.fetch(&format!("/plugins/{}", segment(id))).await
    }

    /// Names of the plugins this node has loaded.
    ///
    /// `GET /plugins/enabled`
    pub async fn list_enabled(&self) -> Result<Value, Error> {
        self.api.fetch("/plugins/enabled").await
    }

    /// Config schema of one plugin.
    ///
    /// `GET /plugins/schema/{name}`
    pub async fn get_schema(&self, name: &str) -> Result<Value, Error> {
        self.api.fetch(&format!("/plugins/schema/{}", segment(name))).await
    }

    /// Create a plugin instance.
    ///
    /// `POST /plugins`. Route, service and consumer ids scope the plugin;
    /// with none of them it applies globally.
    pub async fn create(&self, plugin: &NewPlugin) -> Result<Plugin, Error> {
        debug!(
            name = %plugin.name,
            route_id = ?plugin.route_id,
            service_id = ?plugin.service_id,
            consumer_id = ?plugin.consumer_id,
            "creating plugin"
        );
        self.api.create("/plugins", &plugin.to_body()).await
    }

    /// `PATCH /plugins/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Plugin, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(plugin_id = id, "updating plugin");
        self.api
            .update_shaped(&format!("/plugins/{}", segment(id)), &fields::PLUGIN, changes)
            .await
    }

    /// `DELETE /plugins/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(plugin_id = id, "deleting plugin");
        self.api.delete(&format!("/plugins/{}", segment(id))).await
    }
}
