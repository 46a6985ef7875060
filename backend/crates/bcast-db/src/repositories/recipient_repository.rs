use crate::{DbError, Result as DbErrorResult};

use bcast_core::{
    CoreError, Recipient, RecipientDirectory, RecipientId, RecipientProfile, RecipientSet,
    Result as CoreResult,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct RecipientRow {
    recipient_id: i64,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    is_blocked: bool,
    last_active: i64,
}

impl TryFrom<RecipientRow> for Recipient {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: RecipientRow) -> Result<Self, Self::Error> {
        let last_active =
            DateTime::from_timestamp(row.last_active, 0).ok_or_else(|| DbError::InvalidRow {
                message: format!(
                    "last_active {} out of range for recipient {}",
                    row.last_active, row.recipient_id
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Recipient {
            id: RecipientId(row.recipient_id),
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            is_blocked: row.is_blocked,
            last_active,
        })
    }
}

/// SQLite-backed recipient directory.
#[derive(Clone)]
pub struct RecipientRepository {
    pool: SqlitePool,
}

impl RecipientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a recipient, or refresh its profile and activity time.
    /// The blocked flag of an existing row is left alone.
    pub async fn upsert(&self, profile: &RecipientProfile) -> DbErrorResult<()> {
        self.upsert_at(profile, Utc::now()).await
    }

    pub async fn upsert_at(
        &self,
        profile: &RecipientProfile,
        seen_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO recipients (recipient_id, username, first_name, last_name, is_blocked, last_active)
              VALUES (?, ?, ?, ?, 0, ?)
              ON CONFLICT(recipient_id) DO UPDATE SET
                  username = excluded.username,
                  first_name = excluded.first_name,
                  last_name = excluded.last_name,
                  last_active = excluded.last_active
              "#,
        )
        .bind(profile.id.get())
        .bind(&profile.username)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(seen_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: RecipientId) -> DbErrorResult<Option<Recipient>> {
        let row = sqlx::query_as::<_, RecipientRow>(
            r#"
              SELECT recipient_id, username, first_name, last_name, is_blocked, last_active
              FROM recipients
              WHERE recipient_id = ?
              "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Recipient::try_from).transpose()
    }

    /// Ids of every recipient not marked blocked, ascending.
    pub async fn list_active_ids(&self) -> DbErrorResult<Vec<RecipientId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT recipient_id FROM recipients WHERE is_blocked = 0 ORDER BY recipient_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(RecipientId).collect())
    }

    pub async fn count_active(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipients WHERE is_blocked = 0")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns false when the recipient is unknown.
    pub async fn set_blocked(&self, id: RecipientId, blocked: bool) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE recipients SET is_blocked = ? WHERE recipient_id = ?")
            .bind(blocked)
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Cheap connectivity probe for readiness checks.
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RecipientDirectory for RecipientRepository {
    async fn list_active_recipients(&self) -> CoreResult<RecipientSet> {
        let ids = self.list_active_ids().await.map_err(CoreError::from)?;
        debug!("Recipient snapshot taken: {} active", ids.len());
        Ok(ids.into_iter().collect())
    }

    async fn upsert_recipient(&self, profile: &RecipientProfile) -> CoreResult<()> {
        self.upsert(profile).await.map_err(CoreError::from)
    }
}
