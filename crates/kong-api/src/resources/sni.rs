// SNI endpoints

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::Sni;
use crate::requests::NewSni;

#[derive(Debug, Clone, Copy)]
pub struct SniManager<'a> {
    api: Manager<'a>,
}

impl<'a> SniManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /snis[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Sni>, Error> {
        self.api.list(&tagged_path("/snis", tags)).await
    }

    /// `GET /certificates/{cert}/snis`
    pub async fn list_by_certificate(&self, cert: &str) -> Result<Vec<Sni>, Error> {
        self.api.list(&format!("/certificates/{}/snis", segment(cert))).await
    }

    /// `GET /snis/{id}`
    pub async fn get(&self, id: &str) -> Result<Sni, Error> {
        self.api.fetch(&format!("/snis/{}", segment(id))).await
    }

    /// `GET /certificates/{cert}/snis/{id}`
    pub async fn get_by_certificate(&self, cert: &str, id: &str) -> Result<Sni, Error> {
        self.api
            .fetch(&format!("/certificates/{}/snis/{}", segment(cert), segment(id)))
            .await
    }

    /// `POST /snis`. The body carries `certificate: { id }`.
    pub async fn create(&self, sni: &NewSni) -> Result<Sni, Error> {
        if sni.certificate_id.as_deref().is_none_or(str::is_empty) {
            return Err(Error::InvalidPayload(format!(
                "sni {} needs a certificate id",
                sni.name
            )));
        }
        debug!(name = %sni.name, certificate_id = ?sni.certificate_id, "creating sni");
        self.api.create("/snis", &sni.to_body()).await
    }

    /// `POST /certificates/{cert}/snis`
    pub async fn create_by_certificate(&self, cert: &str, sni: &NewSni) -> Result<Sni, Error> {
        debug!(certificate_id = cert, name = %sni.name, "creating sni by certificate");
        self.api
            .create(&format!("/certificates/{}/snis", segment(cert)), &sni.to_body())
            .await
    }

    /// `PATCH /snis/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Sni, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(sni_id = id, "updating sni");
        self.api
            .update_shaped(&format!("/snis/{}", segment(id)), &fields::SNI, changes)
            .await
    }

    /// `PATCH /certificates/{cert}/snis/{id}`
    pub async fn update_by_certificate<C>(
        &self,
        cert: &str,
        id: &str,
        changes: &C,
    ) -> Result<Sni, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(certificate_id = cert, sni_id = id, "updating sni by certificate");
        self.api
            .update_shaped(
                &format!("/certificates/{}/snis/{}", segment(cert), segment(id)),
                &fields::SNI,
                changes,
            )
            .await
    }

    /// `DELETE /snis/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(sni_id = id, "deleting sni");
        self.api.delete(&format!("/snis/{}", segment(id))).await
    }

    /// `DELETE /certificates/{cert}/snis/{id}`
    pub async fn delete_by_certificate(&self, cert: &str, id: &str) -> Result<(), Error> {
        debug!(certificate_id = cert, sni_id = id, "deleting sni by certificate");
        self.api
            .delete(&format!("/certificates/{}/snis/{}", segment(cert), segment(id)))
            .await
    }
}
