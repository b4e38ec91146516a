//! Category model -> entity mapper

use spot_core::entities::Category;
use spot_core::value_objects::CategoryId;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::from_uuid(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
