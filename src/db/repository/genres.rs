//! Genres repository

use sqlx::MySqlConnection;

/// All distinct genre names, in the order MySQL returns them
pub async fn distinct_genres(conn: &mut MySqlConnection) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT DISTINCT genre FROM genres")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(|(genre,)| genre).collect())
}

/// Show ids tagged with `genre`
pub async fn tvids_by_genre(
    conn: &mut MySqlConnection,
    genre: &str,
) -> Result<Vec<i64>, sqlx::Error> {
    let rows: Vec<(i64,)> =
        sqlx::query_as("SELECT CAST(tvid AS SIGNED) AS tvid FROM genres WHERE genre = ?")
            .bind(genre)
            .fetch_all(&mut *conn)
            .await?;

    Ok(rows.into_iter().map(|(tvid,)| tvid).collect())
}
