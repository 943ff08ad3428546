use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use catalog_model::{CreateSpecificationRequest, UpdateSpecificationRequest};

use crate::error::Result;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpecificationRepository: Send + Sync {
    async fn add_specification(
        &self,
        request: CreateSpecificationRequest,
    ) -> Result<i32>;

    async fn update_specification(
        &self,
        request: UpdateSpecificationRequest,
    ) -> Result<String>;

    /// Removing a specification also removes every item that references it.
    async fn remove_specification(&self, id: i32) -> Result<String>;
}
