//! TV shows repository

use sqlx::{MySql, MySqlConnection, QueryBuilder};

use crate::db::models::{ShowDetailRow, ShowSummaryRow};

/// Maximum rows returned by a genre listing
pub const SHOW_LIST_LIMIT: u32 = 20;

/// MySQL rejects prepared statements with more placeholders than this
pub const MAX_BIND_PARAMS: usize = 65_535;

/// Build the name lookup for a list of ids.
///
/// An empty list renders `IN (NULL)`: still a valid statement, matching nothing.
/// Lists longer than [`MAX_BIND_PARAMS`] are written as integer literals.
pub fn names_query(tvids: &[i64]) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(
        "SELECT CAST(tvid AS SIGNED) AS tvid, name FROM tv_shows WHERE tvid IN (",
    );

    if tvids.is_empty() {
        builder.push("NULL");
    } else {
        let mut separated = builder.separated(", ");
        if tvids.len() <= MAX_BIND_PARAMS {
            for tvid in tvids {
                separated.push_bind(*tvid);
            }
        } else {
            for tvid in tvids {
                separated.push(*tvid);
            }
        }
    }

    builder.push(") ORDER BY name DESC LIMIT ");
    builder.push(SHOW_LIST_LIMIT);
    builder
}

/// Names of the given shows, name descending, capped at [`SHOW_LIST_LIMIT`]
pub async fn names_by_ids(
    conn: &mut MySqlConnection,
    tvids: &[i64],
) -> Result<Vec<ShowSummaryRow>, sqlx::Error> {
    let mut builder = names_query(tvids);
    builder
        .build_query_as::<ShowSummaryRow>()
        .fetch_all(&mut *conn)
        .await
}

/// Full row for one show
pub async fn detail_by_id(
    conn: &mut MySqlConnection,
    tvid: i64,
) -> Result<Option<ShowDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, ShowDetailRow>(
        r#"
        SELECT CAST(tvid AS SIGNED) AS tvid,
               name,
               lang,
               official_site,
               CAST(rating AS CHAR) AS rating,
               image,
               summary,
               CAST(runtime AS SIGNED) AS runtime
        FROM tv_shows
        WHERE tvid = ?
        "#,
    )
    .bind(tvid)
    .fetch_optional(&mut *conn)
    .await
}
