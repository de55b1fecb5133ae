use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Ingested e-statement. Append-only: nothing in the API updates or deletes
/// these rows, and `processed` stays false until a downstream consumer exists.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Statement {
    pub id: Uuid,
    pub user_email: String,
    pub data: Value,
    pub processed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Statement {
    pub async fn insert(db: &PgPool, user_email: &str, data: &Value) -> sqlx::Result<Statement> {
        sqlx::query_as::<_, Statement>(
            r#"
            INSERT INTO statements (user_email, data)
            VALUES ($1, $2)
            RETURNING id, user_email, data, processed, created_at
            "#,
        )
        .bind(user_email)
        .bind(data)
        .fetch_one(db)
        .await
    }
}
