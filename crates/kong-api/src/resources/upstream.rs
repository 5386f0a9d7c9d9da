// Upstream endpoints
//
// Load-balancer pools. Target membership lives under
// `/upstreams/{id}/targets`; per-target health is in `target.rs`.

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::{Target, Upstream, UpstreamHealth};
use crate::requests::{NewTarget, NewUpstream};

#[derive(Debug, Clone, Copy)]
pub struct UpstreamManager<'a> {
    api: Manager<'a>,
}

impl<'a> UpstreamManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /upstreams[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Upstream>, Error> {
        self.api.list(&tagged_path("/upstreams", tags)).await
    }

    /// Active targets (weight > 0) of an upstream.
    ///
    /// `GET /upstreams/{id}/targets`
    pub async fn list_targets(&self, id: &str) -> Result<Vec<Target>, Error> {
        self.api.list(&format!("/upstreams/{}/targets", segment(id))).await
    }

    /// Every target, including disabled ones.
    ///
    /// `GET /upstreams/{id}/targets/all/`
    pub async fn list_all_targets(&self, id: &str) -> Result<Vec<Target>, Error> {
        self.api
            .list(&format!("/upstreams/{}/targets/all/", segment(id)))
            .await
    }

    /// `GET /upstreams/{id}`
    pub async fn get(&self, id: &str) -> Result<Upstream, Error> {
        self.api.fetch(&format!("/upstreams/{}", segment(id))).await
    }

    /// `GET /targets/{target}/upstream`
    pub async fn get_by_target(&self, target: &str) -> Result<Upstream, Error> {
        self.api.fetch(&format!("/targets/{}/upstream", segment(target))).await
    }

    /// Per-target health as seen by this node.
    ///
    /// `GET /upstreams/{id}/health/`
    pub async fn get_health(&self, id: &str) -> Result<UpstreamHealth, Error> {
        self.api.fetch(&format!("/upstreams/{}/health/", segment(id))).await
    }

    /// `POST /upstreams`
    pub async fn create(&self, upstream: &NewUpstream) -> Result<Upstream, Error> {
        debug!(name = %upstream.name, algorithm = %upstream.algorithm, "creating upstream");
        self.api.create("/upstreams", &upstream.to_body()).await
    }

    /// `PATCH /upstreams/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Upstream, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(upstream_id = id, "updating upstream");
        self.api
            .update_shaped(&format!("/upstreams/{}", segment(id)), &fields::UPSTREAM, changes)
            .await
    }

    /// `PATCH /targets/{target}/upstream`
    pub async fn update_by_target<C>(&self, target: &str, changes: &C) -> Result<Upstream, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(target_id = target, "updating upstream by target");
        self.api
            .update_shaped(
                &format!("/targets/{}/upstream", segment(target)),
                &fields::UPSTREAM,
                changes,
            )
            .await
    }

    /// `DELETE /upstreams/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(upstream_id = id, "deleting upstream");
        self.api.delete(&format!("/upstreams/{}", segment(id))).await
    }

    /// `DELETE /targets/{target}/upstream`
    pub async fn delete_by_target(&self, target: &str) -> Result<(), Error> {
        debug!(target_id = target, "deleting upstream by target");
        self.api.delete(&format!("/targets/{}/upstream", segment(target))).await
    }

    /// `POST /upstreams/{id}/targets`
    pub async fn add_target(&self, id: &str, target: &NewTarget) -> Result<Target, Error> {
        debug!(upstream_id = id, target = %target.target, "adding target to upstream");
        self.api
            .create(&format!("/upstreams/{}/targets", segment(id)), &target.to_body())
            .await
    }
}
