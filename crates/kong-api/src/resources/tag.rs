// Tag endpoints (read-only)

use crate::error::Error;
use crate::fields::segment;
use crate::manager::Manager;
use crate::models::TaggedEntity;

#[derive(Debug, Clone, Copy)]
pub struct TagManager<'a> {
    api: Manager<'a>,
}

impl<'a> TagManager<'a> {
    pub(crate) fn new(api: Manager<'a>) -> Self {
        Self { api }
    }

    /// Every tag on every entity.
    ///
    /// `GET /tags`
    pub async fn list(&self) -> Result<Vec<TaggedEntity>, Error> {
        self.api.list("/tags").await
    }

    /// Entities carrying `tag`. This is a collection, not a single record.
    ///
    /// `GET /tags/{tag}`
    pub async fn get(&self, tag: &str) -> Result<Vec<TaggedEntity>, Error> {
        self.api.list(&format!("/tags/{}", segment(tag))).await
    }
}
