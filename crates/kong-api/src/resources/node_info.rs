// Node information endpoints

use serde_json::Value;

use crate::error::Error;
use crate::manager::Manager;
use crate::models::NodeStatus;

#[derive(Debug, Clone, Copy)]
pub struct NodeInfoManager<'a> {
    api: Manager<'a>,
}

impl<'a> NodeInfoManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// Version, hostname, loaded plugins and configuration of the node.
    ///
    /// `GET /`
    pub async fn get_node_info(&self) -> Result<Value, Error> {
        self.api.fetch("/").await
    }

    /// Connection and database health of the node.
    ///
    /// `GET /status`
    pub async fn get_node_status(&self) -> Result<NodeStatus, Error> {
        self.api.fetch("/status").await
    }
}
