// db/profiledb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::profilemodel::{Profile, UserRole};

const PROFILE_COLUMNS: &str = r#"
    id, role, full_name, bio, skills, hourly_rate,
    portfolio_url, avatar_url, location, is_blocked,
    created_at, updated_at
"#;

#[async_trait]
pub trait ProfileExt {
    async fn create_profile(
        &self,
        user_id: Uuid,
        role: UserRole,
        full_name: String,
        bio: Option<String>,
        skills: Vec<String>,
        hourly_rate: Option<i64>,
        portfolio_url: Option<String>,
        avatar_url: Option<String>,
        location: Option<String>,
    ) -> Result<Profile, Error>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, Error>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<String>,
        bio: Option<String>,
        skills: Option<Vec<String>>,
        hourly_rate: Option<i64>,
        portfolio_url: Option<String>,
        avatar_url: Option<String>,
        location: Option<String>,
    ) -> Result<Profile, Error>;
}

#[async_trait]
impl ProfileExt for DBClient {
    async fn create_profile(
        &self,
        user_id: Uuid,
        role: UserRole,
        full_name: String,
        bio: Option<String>,
        skills: Vec<String>,
        hourly_rate: Option<i64>,
        portfolio_url: Option<String>,
        avatar_url: Option<String>,
        location: Option<String>,
    ) -> Result<Profile, Error> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profiles
            (id, role, full_name, bio, skills, hourly_rate, portfolio_url, avatar_url, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(role)
        .bind(full_name)
        .bind(bio)
        .bind(skills)
        .bind(hourly_rate)
        .bind(portfolio_url)
        .bind(avatar_url)
        .bind(location)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, Error> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM profiles
            WHERE id = $1
            "#
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    // Role is deliberately absent from the update set; it is fixed at
    // creation time.
    async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<String>,
        bio: Option<String>,
        skills: Option<Vec<String>>,
        hourly_rate: Option<i64>,
        portfolio_url: Option<String>,
        avatar_url: Option<String>,
        location: Option<String>,
    ) -> Result<Profile, Error> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles
            SET full_name = COALESCE($2, full_name),
                bio = COALESCE($3, bio),
                skills = COALESCE($4, skills),
                hourly_rate = COALESCE($5, hourly_rate),
                portfolio_url = COALESCE($6, portfolio_url),
                avatar_url = COALESCE($7, avatar_url),
                location = COALESCE($8, location),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(full_name)
        .bind(bio)
        .bind(skills)
        .bind(hourly_rate)
        .bind(portfolio_url)
        .bind(avatar_url)
        .bind(location)
        .fetch_one(&self.pool)
        .await
    }
}
