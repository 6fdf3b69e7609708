use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::jobmodel::{Job, JobStatus};
use crate::utils::currency::paise_to_rupees;

// Job DTOs
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateJobDto {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(min = 20, max = 2000, message = "Description must be between 20 and 2000 characters"))]
    pub description: String,

    #[validate(range(min = 1.0, message = "Budget must be a positive number"))]
    pub budget: f64,

    pub deadline: DateTime<Utc>,

    pub required_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct JobListQueryDto {
    pub status: Option<JobStatus>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HireFreelancerDto {
    pub bid_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobResponseDto {
    pub id: Uuid,
    pub client_id: Uuid,
    pub hired_freelancer_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub deadline: DateTime<Utc>,
    pub required_skills: Vec<String>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobResponseDto {
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            client_id: job.client_id,
            hired_freelancer_id: job.hired_freelancer_id,
            title: job.title.clone(),
            description: job.description.clone(),
            budget: paise_to_rupees(job.budget),
            deadline: job.deadline,
            required_skills: job.required_skills.clone(),
            status: job.status,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HireResponseDto {
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub job_status: JobStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_job() -> CreateJobDto {
        CreateJobDto {
            title: "Build a landing page".to_string(),
            description: "A responsive landing page with a contact form and basic SEO.".to_string(),
            budget: 1000.0,
            deadline: Utc::now(),
            required_skills: Some(vec!["react".to_string()]),
        }
    }

    #[test]
    fn valid_job_passes_validation() {
        assert!(valid_job().validate().is_ok());
    }

    #[test]
    fn non_positive_budget_is_rejected() {
        let mut dto = valid_job();
        dto.budget = 0.0;
        assert!(dto.validate().is_err());

        dto.budget = -50.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut dto = valid_job();
        dto.title = "".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut dto = valid_job();
        dto.description = "too short".to_string();
        assert!(dto.validate().is_err());
    }
}
