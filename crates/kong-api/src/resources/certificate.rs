// Certificate endpoints

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::fields::{self, segment, tagged_path};
use crate::manager::Manager;
use crate::models::{Certificate, Service, Sni};
use crate::requests::{NewCertificate, NewService};

#[derive(Debug, Clone, Copy)]
pub struct CertificateManager<'a> {
    api: Manager<'a>,
}

impl<'a> CertificateManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// `GET /certificates[?tags=...]`
    pub async fn list(&self, tags: Option<&str>) -> Result<Vec<Certificate>, Error> {
        self.api.list(&tagged_path("/certificates", tags)).await
    }

    /// `GET /certificates/{id}`
    pub async fn get(&self, id: &str) -> Result<Certificate, Error> {
        self.api.fetch(&format!("/certificates/{}", segment(id))).await
    }

    /// `POST /certificates`
    pub async fn create(&self, certificate: &NewCertificate) -> Result<Certificate, Error> {
        debug!(snis = ?certificate.snis, "creating certificate");
        self.api
            .create("/certificates", &certificate.to_body())
            .await
    }

    /// `PATCH /certificates/{id}`
    pub async fn update<C>(&self, id: &str, changes: &C) -> Result<Certificate, Error>
    where
        C: Serialize + ?Sized,
    {
        debug!(certificate_id = id, "updating certificate");
        self.api
            .update_shaped(
                &format!("/certificates/{}", segment(id)),
                &fields::CERTIFICATE,
                changes,
            )
            .await
    }

    /// `DELETE /certificates/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(certificate_id = id, "deleting certificate");
        self.api.delete(&format!("/certificates/{}", segment(id))).await
    }

    /// `GET /certificates/{id}/snis`
    pub async fn list_snis(&self, id: &str) -> Result<Vec<Sni>, Error> {
        self.api.list(&format!("/certificates/{}/snis", segment(id))).await
    }

    /// `GET /certificates/{id}/services`
    pub async fn list_services(&self, id: &str) -> Result<Vec<Service>, Error> {
        self.api
            .list(&format!("/certificates/{}/services", segment(id)))
            .await
    }

    /// Create a service that presents this certificate upstream.
    ///
    /// `POST /certificates/{id}/services`, shaped exactly like
    /// `ServiceManager::create`.
    pub async fn add_service(&self, id: &str, service: &NewService) -> Result<Service, Error> {
        debug!(certificate_id = id, name = %service.name, "adding service to certificate");
        self.api
            .create(&format!("/certificates/{}/services", segment(id)), &service.to_body())
            .await
    }
}
