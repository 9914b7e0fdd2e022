//! Postgres user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres user repository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new Postgres user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    firstname: String,
    lastname: String,
    email: String,
    password: String,
    address: String,
    phone: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            password: row.password,
            address: row.address,
            phone: row.phone,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &NewUser) -> RosterResult<User> {
        debug!("Inserting user: {}", user.email);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (firstname, lastname, email, password, address, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, firstname, lastname, email, password, address, phone
            "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.address)
        .bind(&user.phone)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, firstname, lastname, email, password, address, phone
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> RosterResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, firstname, lastname, email, password, address, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: &User) -> RosterResult<Option<User>> {
        debug!("Updating user: {}", user.id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET firstname = $1, lastname = $2, email = $3,
                password = $4, address = $5, phone = $6
            WHERE id = $7
            RETURNING id, firstname, lastname, email, password, address, phone
            "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.address)
        .bind(&user.phone)
        .bind(user.id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> RosterResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserRepository").finish_non_exhaustive()
    }
}
