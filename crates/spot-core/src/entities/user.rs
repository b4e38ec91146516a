//! User profile entity
//!
//! Accounts live in the identity provider; this is the application-side profile row
//! keyed by the same user id.

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Application profile for an identity-provider user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Empty profile for a user seen for the first time
    pub fn new(id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: None,
            full_name: None,
            bio: None,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown next to the user's reviews
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().or(self.username.as_deref())
    }

    /// Apply a partial update
    pub fn apply(&mut self, changes: ProfileChanges) {
        if let Some(username) = changes.username {
            self.username = Some(username);
        }
        if let Some(bio) = changes.bio {
            self.bio = Some(bio);
        }
        self.updated_at = Utc::now();
    }
}

/// Editable profile fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut profile = UserProfile::new(UserId::generate());
        assert_eq!(profile.display_name(), None);

        profile.username = Some("wanderer".to_string());
        assert_eq!(profile.display_name(), Some("wanderer"));

        profile.full_name = Some("Jo Park".to_string());
        assert_eq!(profile.display_name(), Some("Jo Park"));
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let mut profile = UserProfile::new(UserId::generate());
        profile.bio = Some("hello".to_string());
        profile.apply(ProfileChanges {
            username: Some("new_name".to_string()),
            bio: None,
        });
        assert_eq!(profile.username.as_deref(), Some("new_name"));
        assert_eq!(profile.bio.as_deref(), Some("hello"));
    }
}
