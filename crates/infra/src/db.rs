/// Shared connection pool alias used across the workspace.
pub type Db = sqlx::PgPool;
