use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record held in session memory. Created synthetically when a mock
/// sign-in or verification completes; never backed by real storage.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: DateTime<Utc>,
    pub is_verified: bool,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserRecord {
    pub fn new(id: i64, name: String, email: String, phone: String, join_date: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            join_date,
            is_verified: true,
            bio: None,
        }
    }

    /// Merge saved profile edits into the record.
    pub fn apply_profile(&mut self, edits: &ProfileForm) {
        self.name = edits.name.clone();
        self.email = edits.email.clone();
        self.phone = edits.phone.clone();
        self.bio = if edits.bio.trim().is_empty() {
            None
        } else {
            Some(edits.bio.clone())
        };
    }
}

/// Editable subset of the profile page.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

impl ProfileForm {
    /// Prefill from the current record (also used by cancel to discard edits).
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }

    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "bio" => self.bio = value,
            _ => log::warn!("Unknown profile field: {field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord::new(
            1700000000000,
            "Alice".into(),
            "alice@x.com".into(),
            "555-1111".into(),
            Utc::now(),
        )
    }

    #[test]
    fn new_user_is_verified_without_bio() {
        let user = sample_user();
        assert!(user.is_verified);
        assert!(user.bio.is_none());
    }

    #[test]
    fn apply_profile_merges_edits() {
        let mut user = sample_user();
        let mut form = ProfileForm::from_user(&user);
        form.set_field("name", "Alice B".into());
        form.set_field("bio", "Security enthusiast".into());
        user.apply_profile(&form);
        assert_eq!(user.name, "Alice B");
        assert_eq!(user.email, "alice@x.com");
        assert_eq!(user.bio.as_deref(), Some("Security enthusiast"));
    }

    #[test]
    fn blank_bio_stays_none() {
        let mut user = sample_user();
        let mut form = ProfileForm::from_user(&user);
        form.set_field("bio", "   ".into());
        user.apply_profile(&form);
        assert!(user.bio.is_none());
    }

    #[test]
    fn cancel_restores_record_values() {
        let user = sample_user();
        let mut form = ProfileForm::from_user(&user);
        form.set_field("email", "typo@".into());
        let restored = ProfileForm::from_user(&user);
        assert_eq!(restored.email, "alice@x.com");
        assert_ne!(form.email, restored.email);
    }
}
