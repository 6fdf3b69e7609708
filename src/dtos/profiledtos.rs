use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::profilemodel::{Profile, UserRole};
use crate::utils::currency::paise_to_rupees;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateProfileDto {
    pub role: UserRole,

    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: String,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub skills: Option<Vec<String>>,

    #[validate(range(min = 0.0, message = "Hourly rate must be positive"))]
    pub hourly_rate: Option<f64>,

    #[validate(url(message = "Invalid portfolio URL"))]
    pub portfolio_url: Option<String>,

    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,

    pub location: Option<String>,
}

// Role is absent on purpose; it cannot change after creation.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub skills: Option<Vec<String>>,

    #[validate(range(min = 0.0, message = "Hourly rate must be positive"))]
    pub hourly_rate: Option<f64>,

    #[validate(url(message = "Invalid portfolio URL"))]
    pub portfolio_url: Option<String>,

    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,

    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub role: UserRole,
    pub full_name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileResponseDto {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            role: profile.role,
            full_name: profile.full_name.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
            hourly_rate: profile.hourly_rate.map(paise_to_rupees),
            portfolio_url: profile.portfolio_url.clone(),
            avatar_url: profile.avatar_url.clone(),
            location: profile.location.clone(),
            is_blocked: profile.is_blocked,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_profile_rejects_empty_name() {
        let dto = CreateProfileDto {
            role: UserRole::Client,
            full_name: "".to_string(),
            bio: None,
            skills: None,
            hourly_rate: None,
            portfolio_url: None,
            avatar_url: None,
            location: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_profile_rejects_bad_portfolio_url() {
        let dto = CreateProfileDto {
            role: UserRole::Freelancer,
            full_name: "Asha Rao".to_string(),
            bio: None,
            skills: Some(vec!["rust".to_string()]),
            hourly_rate: Some(25.0),
            portfolio_url: Some("not a url".to_string()),
            avatar_url: None,
            location: None,
        };
        assert!(dto.validate().is_err());
    }
}
