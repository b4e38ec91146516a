//! User profile model -> entity mapper

use spot_core::entities::UserProfile;
use spot_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for UserProfile {
    fn from(model: UserModel) -> Self {
        UserProfile {
            id: UserId::from_uuid(model.id),
            username: model.username,
            full_name: model.full_name,
            bio: model.bio,
            profile_picture: model.profile_picture,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
