//! Category service

use spot_core::value_objects::CategoryId;
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories ordered by name
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        Ok(self
            .ctx
            .category_repo()
            .list()
            .await?
            .into_iter()
            .map(CategoryResponse::from)
            .collect())
    }

    /// Create a category; names are unique
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Category name must not be blank"));
        }

        let category = self.ctx.category_repo().create(name).await?;
        info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(CategoryResponse::from(category))
    }

    /// Delete a category and its spot assignments
    #[instrument(skip(self))]
    pub async fn delete_category(&self, category_id: CategoryId) -> ServiceResult<()> {
        if !self.ctx.category_repo().delete(category_id).await? {
            return Err(DomainError::CategoryNotFound(category_id).into());
        }

        info!(category_id = %category_id, "Category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;

    fn request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let t = TestContext::new();
        let service = CategoryService::new(&t.ctx);
        service.create_category(request("Park")).await.unwrap();
        service.create_category(request("Cafe")).await.unwrap();
        service.create_category(request("Museum")).await.unwrap();

        let names: Vec<String> = service
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Cafe", "Museum", "Park"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_validation_error() {
        let t = TestContext::new();
        let service = CategoryService::new(&t.ctx);
        service.create_category(request("Cafe")).await.unwrap();

        let err = service.create_category(request(" Cafe ")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "CATEGORY_NAME_TAKEN");
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let t = TestContext::new();
        let err = CategoryService::new(&t.ctx)
            .create_category(request("   "))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_delete() {
        let t = TestContext::new();
        let service = CategoryService::new(&t.ctx);
        let category = service.create_category(request("Bridge")).await.unwrap();

        service.delete_category(category.id).await.unwrap();
        assert!(service.list_categories().await.unwrap().is_empty());

        let err = service.delete_category(category.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
