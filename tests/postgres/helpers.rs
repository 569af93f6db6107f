//! Shared helpers for `PostgreSQL` integration tests.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use taskline::task::adapters::postgres::PostgresTaskRepository;

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "TASKLINE_TEST_DATABASE_URL";

/// Connects to the test database and applies the schema, or returns `None`
/// when no database is configured.
pub async fn repository() -> Option<PostgresTaskRepository> {
    let url = std::env::var(DATABASE_URL_ENV).ok()?;
    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .expect("test database pool should build");
    let repository = PostgresTaskRepository::new(pool);
    repository
        .apply_schema()
        .await
        .expect("schema should apply");
    Some(repository)
}
