// Target endpoints
//
// Targets only exist under an upstream. The health overrides are
// side-effect POSTs: empty body, 204 No Content.

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment};
use crate::manager::Manager;
use crate::models::{Target, Upstream};
use crate::requests::NewTarget;

#[derive(Debug, Clone, Copy)]
pub struct TargetManager<'a> {
    api: Manager<'a>,
}

impl<'a> TargetManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /upstreams/{upstream}/targets`
    pub async fn list_by_upstream(&self, upstream: &str) -> Result<Vec<Target>, Error> {
        self.api
            .list(&format!("/upstreams/{}/targets", segment(upstream)))
            .await
    }

    /// `GET /upstreams/{upstream}/targets/all/`
    pub async fn list_all_by_upstream(&self, upstream: &str) -> Result<Vec<Target>, Error> {
        self.api
            .list(&format!("/upstreams/{}/targets/all/", segment(upstream)))
            .await
    }

    /// `GET /targets/{target}/upstream`
    pub async fn get_upstream(&self, target: &str) -> Result<Upstream, Error> {
        self.api.fetch(&format!("/targets/{}/upstream", segment(target))).await
    }

    /// `POST /upstreams/{upstream}/targets`
    pub async fn create_by_upstream(
        &self,
        upstream: &str,
        target: &NewTarget,
    ) -> Result<Target, Error> {
        debug!(upstream_id = upstream, target = %target.target, weight = target.weight, "creating target");
        self.api
            .create(&format!("/upstreams/{}/targets", segment(upstream)), &target.to_body())
            .await
    }

    /// `PATCH /upstreams/{upstream}/targets/{target}`
    pub async fn update_by_upstream<C>(
        &self,
        upstream: &str,
        target: &str,
        changes: &C,
    ) -> Result<Target, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(upstream_id = upstream, target_id = target, "updating target");
        self.api
            .update_shaped(
                &format!("/upstreams/{}/targets/{}", segment(upstream), segment(target)),
                &fields::TARGET,
                changes,
            )
            .await
    }

    /// `DELETE /upstreams/{upstream}/targets/{target}`
    pub async fn delete_target_by_upstream(&self, upstream: &str, target: &str) -> Result<(), Error> {
        debug!(upstream_id = upstream, target_id = target, "deleting target");
        self.api
            .delete(&format!("/upstreams/{}/targets/{}", segment(upstream), segment(target)))
            .await
    }

    /// Force a target healthy across the cluster.
    ///
    /// `POST /upstreams/{upstream}/targets/{target}/healthy`
    pub async fn set_healthy_target_by_upstream(
        &self,
        upstream: &str,
        target: &str,
    ) -> Result<(), Error> {
        debug!(upstream_id = upstream, target_id = target, "marking target healthy");
        self.api
            .set_flag(
                &format!("/upstreams/{}/targets/{}/healthy", segment(upstream), segment(target)),
                None,
            )
            .await
    }

    /// `POST /upstreams/{upstream}/targets/{target}/unhealthy`
    pub async fn set_unhealthy_target_by_upstream(
        &self,
        upstream: &str,
        target: &str,
    ) -> Result<(), Error> {
        debug!(upstream_id = upstream, target_id = target, "marking target unhealthy");
        self.api
            .set_flag(
                &format!("/upstreams/{}/targets/{}/unhealthy", segment(upstream), segment(target)),
                None,
            )
            .await
    }

    /// Force one resolved address of a target healthy.
    ///
    /// `POST /upstreams/{upstream}/targets/{target}/{address}/healthy`
    pub async fn set_healthy_address_by_upstream(
        &self,
        upstream: &str,
        target: &str,
        address: &str,
    ) -> Result<(), Error> {
        debug!(upstream_id = upstream, target_id = target, address, "marking address healthy");
        self.api
            .set_flag(
                &format!(
                    "/upstreams/{}/targets/{}/{}/healthy",
                    segment(upstream),
                    segment(target),
                    segment(address)
                ),
                None,
            )
            .await
    }

    /// `POST /upstreams/{upstream}/targets/{target}/{address}/unhealthy`
    pub async fn set_unhealthy_address_by_upstream(
        &self,
        upstream: &str,
        target: &str,
        address: &str,
    ) -> Result<(), Error> {
        debug!(upstream_id = upstream, target_id = target, address, "marking address unhealthy");
        self.api
            .set_flag(
                &format!(
                    "/upstreams/{}/targets/{}/{}/unhealthy",
                    segment(upstream),
                    segment(target),
                    segment(address)
                ),
                None,
            )
            .await
    }
}
