/**
 * User Database Operations
 *
 * Passwords are stored and compared as plaintext, exactly as submitted.
 */

use chrono::NaiveDate;
use sqlx::SqliteConnection;

/// Values submitted on the registration form
///
/// Fields are optional so a missing form field reaches the store as NULL and
/// fails its constraint there.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub join_date: NaiveDate,
}

/// Create a new user
///
/// # Returns
/// The new user's id
pub async fn create_user(conn: &mut SqliteConnection, user: &NewUser) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "User" (username, email, join_date, password)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(user.join_date)
    .bind(&user.password)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Look up the id of the user with exactly this username and password
///
/// A missing value is bound as NULL and matches no row.
///
/// # Returns
/// The user id, or `None` if no row matches both values
pub async fn find_user_id_by_credentials(
    conn: &mut SqliteConnection,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT user_id
        FROM "User"
        WHERE username = ? AND password = ?
        "#,
    )
    .bind(username)
    .bind(password)
    .fetch_optional(&mut *conn)
    .await
}
