// Consumer endpoints

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::{Consumer, Plugin};
use crate::requests::{NewConsumer, NewPlugin};

#[derive(Debug, Clone, Copy)]
pub struct ConsumerManager<'a> {
    api: Manager<'a>,
}

impl<'a> ConsumerManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /consumers[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Consumer>, Error> {
        self.api.list(&tagged_path("/consumers", tags)).await
    }

    /// Look up a consumer by id or username.
    ///
    /// `GET /consumers/{id}`
    pub async fn get(&self, id: &str) -> Result<Consumer, Error> {
        self.api.fetch(&format!("/consumers/{}", segment(id))).await
    }

    /// `GET /plugins/{plugin}/consumer`
    pub async fn get_by_plugin(&self, plugin: &str) -> Result<Consumer, Error> {
        self.api.fetch(&format!("/plugins/{}/consumer", segment(plugin))).await
    }

    /// Create a consumer.
    ///
    /// `POST /consumers`. Fails with `InvalidPayload` before any request is
    /// made when neither `username` nor `custom_id` is set.
    pub async fn create(&self, consumer: &NewConsumer) -> Result<Consumer, Error> {
        let body = consumer.to_body()?;
        debug!(username = ?consumer.username, custom_id = ?consumer.custom_id, "creating consumer");
        self.api.create("/consumers", &body).await
    }

    /// `PATCH /consumers/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Consumer, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(consumer_id = id, "updating consumer");
        self.api
            .update_shaped(&format!("/consumers/{}", segment(id)), &fields::CONSUMER, changes)
            .await
    }

    /// `PATCH /plugins/{plugin}/consumer`
    pub async fn update_by_plugin<C>(&self, plugin: &str, changes: &C) -> Result<Consumer, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(plugin_id = plugin, "updating consumer by plugin");
        self.api
            .update_shaped(
                &format!("/plugins/{}/consumer", segment(plugin)),
                &fields::CONSUMER,
                changes,
            )
            .await
    }

    /// `DELETE /consumers/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(consumer_id = id, "deleting consumer");
        self.api.delete(&format!("/consumers/{}", segment(id))).await
    }

    /// `GET /consumers/{id}/plugins`
    pub async fn list_plugins(&self, id: &str) -> Result<Vec<Plugin>, Error> {
        self.api.list(&format!("/consumers/{}/plugins", segment(id))).await
    }

    /// `GET /consumers/{id}/plugins/{plugin}`
    pub async fn get_plugin(&self, id: &str, plugin: &str) -> Result<Plugin, Error> {
        self.api
            .fetch(&format!("/consumers/{}/plugins/{}", segment(id), segment(plugin)))
            .await
    }

    /// `POST /consumers/{id}/plugins`
    pub async fn add_plugin(&self, id: &str, plugin: &NewPlugin) -> Result<Plugin, Error> {
        debug!(consumer_id = id, name = %plugin.name, "adding plugin to consumer");
        self.api
            .create(&format!("/consumers/{}/plugins", segment(id)), &plugin.to_body())
            .await
    }
}
