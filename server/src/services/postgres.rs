//! Postgres-backed device repository.
//!
//! Ids are `UUID` columns; a path id that does not parse as a UUID cannot
//! exist and is reported as not found. A `BIGSERIAL` `seq` column breaks
//! `created_at` ties in insertion order, newest first, matching the memory
//! store. Each operation is one statement, so row-level atomicity is all the
//! coordination needed.

use device_model::{Device, DeviceCreate, DeviceUpdate};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::device::{DeviceError, DeviceRepository, Page, format_timestamp};

type DeviceRow = (Uuid, String, Option<String>, OffsetDateTime, OffsetDateTime);

fn row_to_device((id, name, assigned_to, created_at, updated_at): DeviceRow) -> Device {
    Device {
        id: id.to_string(),
        name,
        assigned_to,
        created_at: format_timestamp(created_at),
        updated_at: format_timestamp(updated_at),
    }
}

fn parse_id(id: &str) -> Result<Uuid, DeviceError> {
    Uuid::parse_str(id).map_err(|_| DeviceError::NotFound(id.to_owned()))
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub struct PgDeviceRepository {
    pool: PgPool,
}

impl PgDeviceRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DeviceRepository for PgDeviceRepository {
    async fn list(&self, page: Page) -> Result<Vec<Device>, DeviceError> {
        let rows = sqlx::query_as::<_, DeviceRow>(
            "SELECT id, name, assigned_to, created_at, updated_at
             FROM devices
             ORDER BY created_at DESC, seq DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(to_i64(page.limit))
        .bind(to_i64(page.skip))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_device).collect())
    }

    async fn get(&self, id: &str) -> Result<Device, DeviceError> {
        let uuid = parse_id(id)?;
        let row = sqlx::query_as::<_, DeviceRow>(
            "SELECT id, name, assigned_to, created_at, updated_at FROM devices WHERE id = $1",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DeviceError::NotFound(id.to_owned()))?;

        Ok(row_to_device(row))
    }

    async fn create(&self, input: DeviceCreate) -> Result<Device, DeviceError> {
        let row = sqlx::query_as::<_, DeviceRow>(
            "INSERT INTO devices (id, name, assigned_to, created_at, updated_at)
             VALUES ($1, $2, $3, now(), now())
             RETURNING id, name, assigned_to, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.assigned_to)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_device(row))
    }

    async fn update(&self, id: &str, update: DeviceUpdate) -> Result<Device, DeviceError> {
        let uuid = parse_id(id)?;
        let set_assignee = update.assigned_to.is_some();
        let assignee = update.assigned_to.flatten();
        let row = sqlx::query_as::<_, DeviceRow>(
            "UPDATE devices
             SET name = COALESCE($2, name),
                 assigned_to = CASE WHEN $3 THEN $4 ELSE assigned_to END,
                 updated_at = GREATEST(now(), updated_at + interval '1 microsecond')
             WHERE id = $1
             RETURNING id, name, assigned_to, created_at, updated_at",
        )
        .bind(uuid)
        .bind(&update.name)
        .bind(set_assignee)
        .bind(&assignee)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DeviceError::NotFound(id.to_owned()))?;

        Ok(row_to_device(row))
    }

    async fn delete(&self, id: &str) -> Result<(), DeviceError> {
        let uuid = parse_id(id)?;
        let result = sqlx::query("DELETE FROM devices WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DeviceError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
mod tests {
    use super::*;

    async fn live_repo() -> PgDeviceRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        let pool = crate::db::init_pool(&url, 2).await.expect("database init failed");
        PgDeviceRepository::new(pool)
    }

    #[tokio::test]
    async fn live_create_update_delete_round_trip() {
        let repo = live_repo().await;
        let created = repo
            .create(DeviceCreate { name: "live-test".to_owned(), assigned_to: Some("QA".to_owned()) })
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let cleared = repo
            .update(&created.id, DeviceUpdate { name: None, assigned_to: Some(None) })
            .await
            .unwrap();
        assert_eq!(cleared.name, "live-test");
        assert_eq!(cleared.assigned_to, None);
        assert_ne!(cleared.updated_at, created.updated_at);

        repo.delete(&created.id).await.unwrap();
        assert!(matches!(repo.get(&created.id).await, Err(DeviceError::NotFound(_))));
    }

    #[tokio::test]
    async fn live_equal_created_at_lists_last_inserted_first() {
        let repo = live_repo().await;
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for (i, id) in ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO devices (id, name, created_at, updated_at)
                 VALUES ($1, $2, '2999-01-01T00:00:00Z', '2999-01-01T00:00:00Z')",
            )
            .bind(id)
            .bind(format!("tie-{i}"))
            .execute(&repo.pool)
            .await
            .unwrap();
        }

        let listed = repo.list(Page { skip: 0, limit: 3 }).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["tie-2", "tie-1", "tie-0"]);

        for id in &ids {
            repo.delete(&id.to_string()).await.unwrap();
        }
    }
}
