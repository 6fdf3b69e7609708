use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::biddb::{BidWithFreelancerRow, BidWithJobRow};
use crate::models::jobmodel::{Bid, BidStatus, JobStatus};
use crate::utils::currency::paise_to_rupees;

// Bid DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateBidDto {
    pub job_id: Uuid,

    #[validate(range(min = 1.0, message = "Amount must be a positive number"))]
    pub amount: f64,

    #[validate(length(min = 20, max = 2500, message = "Proposal must be between 20 and 2500 characters"))]
    pub proposal: String,

    #[validate(range(min = 1, max = 365, message = "Delivery time must be between 1 and 365 days"))]
    pub delivery_time: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BidListQueryDto {
    pub status: Option<BidStatus>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidResponseDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub amount: f64,
    pub proposal: String,
    pub delivery_time: i32,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
}

impl BidResponseDto {
    pub fn from_bid(bid: &Bid) -> Self {
        Self {
            id: bid.id,
            job_id: bid.job_id,
            freelancer_id: bid.freelancer_id,
            amount: paise_to_rupees(bid.amount),
            proposal: bid.proposal.clone(),
            delivery_time: bid.delivery_time,
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FreelancerSummaryDto {
    pub id: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidWithFreelancerDto {
    #[serde(flatten)]
    pub bid: BidResponseDto,
    pub freelancer: FreelancerSummaryDto,
}

impl BidWithFreelancerDto {
    pub fn from_row(row: &BidWithFreelancerRow) -> Self {
        Self {
            bid: BidResponseDto {
                id: row.id,
                job_id: row.job_id,
                freelancer_id: row.freelancer_id,
                amount: paise_to_rupees(row.amount),
                proposal: row.proposal.clone(),
                delivery_time: row.delivery_time,
                status: row.status,
                created_at: row.created_at,
            },
            freelancer: FreelancerSummaryDto {
                id: row.freelancer_id,
                full_name: row.freelancer_full_name.clone(),
                avatar_url: row.freelancer_avatar_url.clone(),
                skills: row.freelancer_skills.clone(),
                bio: row.freelancer_bio.clone(),
                hourly_rate: row.freelancer_hourly_rate.map(paise_to_rupees),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientSummaryDto {
    pub id: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub budget: f64,
    pub status: JobStatus,
    pub client: ClientSummaryDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidWithJobDto {
    #[serde(flatten)]
    pub bid: BidResponseDto,
    pub job: JobSummaryDto,
}

impl BidWithJobDto {
    pub fn from_row(row: &BidWithJobRow) -> Self {
        Self {
            bid: BidResponseDto {
                id: row.id,
                job_id: row.job_id,
                freelancer_id: row.freelancer_id,
                amount: paise_to_rupees(row.amount),
                proposal: row.proposal.clone(),
                delivery_time: row.delivery_time,
                status: row.status,
                created_at: row.created_at,
            },
            job: JobSummaryDto {
                id: row.job_id,
                title: row.job_title.clone(),
                budget: paise_to_rupees(row.job_budget),
                status: row.job_status,
                client: ClientSummaryDto {
                    id: row.client_id,
                    full_name: row.client_full_name.clone(),
                    avatar_url: row.client_avatar_url.clone(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bid() -> CreateBidDto {
        CreateBidDto {
            job_id: Uuid::new_v4(),
            amount: 900.0,
            proposal: "I have shipped three similar projects and can start immediately.".to_string(),
            delivery_time: 14,
        }
    }

    #[test]
    fn valid_bid_passes_validation() {
        assert!(valid_bid().validate().is_ok());
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut dto = valid_bid();
        dto.amount = 0.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn non_positive_delivery_time_is_rejected() {
        let mut dto = valid_bid();
        dto.delivery_time = 0;
        assert!(dto.validate().is_err());
    }
}
