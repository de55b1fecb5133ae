use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// User row as stored. Never serialized to the wire; profile reads go
/// through [`UserProfile`] so the hash cannot leak.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub created_at: OffsetDateTime,
}

/// Sanitized projection of a user for the profile endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT email, full_name, hashed_password, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        email: &str,
        full_name: &str,
        hashed_password: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, full_name, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING email, full_name, hashed_password, created_at
            "#,
        )
        .bind(email)
        .bind(full_name)
        .bind(hashed_password)
        .fetch_one(db)
        .await
    }

    pub async fn exists(db: &PgPool, email: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(email)
            .fetch_one(db)
            .await
    }
}

impl UserProfile {
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT email, full_name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn profile_serializes_without_password_hash() {
        let profile = UserProfile {
            email: "a@x.com".into(),
            full_name: "Ada".into(),
            created_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["full_name"], "Ada");
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("password").is_none());
    }
}
