// Generic resource manager
//
// The six primitives every resource manager is built from. Each one issues
// exactly one request and enforces the status code its verb requires:
// GET/PATCH -> 200, POST (create) -> 201, POST (flag) / DELETE -> 204.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::fields::{ResourceSchema, shape_update};
use crate::transport::Transport;

/// Collection envelope: `{ "data": [...], "next": ... }`.
#[derive(Debug, Deserialize)]
struct Collection<T> {
    data: Vec<T>,
}

/// Status-checking request primitives over a borrowed [`Transport`].
#[derive(Debug, Clone, Copy)]
pub struct Manager<'a> {
    transport: &'a Transport,
}

impl<'a> Manager<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET` a collection and unwrap its `data` array. Requires 200.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let resp = self
            .transport
            .send(Method::GET, path, None)
            .await?
            .expect(StatusCode::OK)?;
        let collection: Collection<T> = resp.decode()?;
        Ok(collection.data)
    }

    /// `GET` a single document. Requires 200.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.transport
            .send(Method::GET, path, None)
            .await?
            .expect(StatusCode::OK)?
            .decode()
    }

    /// `POST` a new entity. Requires 201.
    pub async fn create<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, Error> {
        self.transport
            .send(Method::POST, path, Some(body))
            .await?
            .expect(StatusCode::CREATED)?
            .decode()
    }

    /// `POST` a side effect that answers with no content. Requires 204.
    pub async fn set_flag(&self, path: &str, body: Option<&Value>) -> Result<(), Error> {
        self.transport
            .send(Method::POST, path, body)
            .await?
            .expect(StatusCode::NO_CONTENT)?;
        Ok(())
    }

    /// `PATCH` an entity. Requires 200.
    pub async fn update<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, Error> {
        self.transport
            .send(Method::PATCH, path, Some(body))
            .await?
            .expect(StatusCode::OK)?
            .decode()
    }

    /// Shape `changes` against `schema`, then `PATCH` the result. Requires 200.
    pub async fn update_shaped<T, C>(
        &self,
        path: &str,
        schema: &ResourceSchema,
        changes: &C,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        C: Serialize + ?Sized,
    {
        let body = Value::Object(shape_update(schema, changes)?);
        self.update(path, &body).await
    }

    /// `DELETE` an entity. Requires 204.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.transport
            .send(Method::DELETE, path, None)
            .await?
            .expect(StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
