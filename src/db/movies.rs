use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::{Movie, NewMovie, Year};

/// A year that failed to parse is stored as SQL `NULL`.
impl ToSql for Year {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Year::Value(year) => ToSqlOutput::from(*year),
            Year::NotANumber => ToSqlOutput::Owned(Value::Null),
        })
    }
}

impl FromSql for Year {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Year::NotANumber),
            ValueRef::Integer(year) => Ok(Year::Value(year)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// SQLite reads a negative `LIMIT` as "no limit".
fn sql_limit(limit: Option<usize>) -> i64 {
    limit
        .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX))
        .unwrap_or(-1)
}

fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        year: row.get(2)?,
    })
}

/// Insert a new movie and echo the hydrated struct back with its new id.
pub fn create_movie(conn: &Connection, movie: &NewMovie) -> StoreResult<Movie> {
    conn.execute(
        "INSERT INTO movies (title, year) VALUES (?1, ?2)",
        params![movie.title, movie.year],
    )
    .map_err(StoreError::sqlite("insert movie"))?;

    Ok(Movie {
        id: conn.last_insert_rowid(),
        title: movie.title.clone(),
        year: movie.year,
    })
}

/// Replace title and year of an existing movie. Touching zero rows means the
/// id is unknown.
pub fn update_movie(conn: &Connection, id: i64, movie: &NewMovie) -> StoreResult<Movie> {
    let updated = conn
        .execute(
            "UPDATE movies SET title = ?1, year = ?2 WHERE id = ?3",
            params![movie.title, movie.year, id],
        )
        .map_err(StoreError::sqlite("update movie"))?;

    if updated == 0 {
        return Err(StoreError::NotFound { entity: "movie", id });
    }
    Ok(Movie {
        id,
        title: movie.title.clone(),
        year: movie.year,
    })
}

/// Remove a movie. The schema cascades to `movie_genres`.
pub fn delete_movie(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn
        .execute("DELETE FROM movies WHERE id = ?1", params![id])
        .map_err(StoreError::sqlite("delete movie"))?;

    if deleted == 0 {
        Err(StoreError::NotFound { entity: "movie", id })
    } else {
        Ok(())
    }
}

pub fn fetch_movie(conn: &Connection, id: i64) -> StoreResult<Option<Movie>> {
    conn.query_row(
        "SELECT id, title, year FROM movies WHERE id = ?1",
        params![id],
        movie_from_row,
    )
    .optional()
    .map_err(StoreError::sqlite("load movie"))
}

/// Movies in insertion order, optionally capped.
pub fn fetch_movies(conn: &Connection, limit: Option<usize>) -> StoreResult<Vec<Movie>> {
    let mut stmt = conn
        .prepare("SELECT id, title, year FROM movies ORDER BY id LIMIT ?1")
        .map_err(StoreError::sqlite("prepare movie query"))?;

    let movies = stmt
        .query_map(params![sql_limit(limit)], movie_from_row)
        .map_err(StoreError::sqlite("load movies"))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::sqlite("collect movies"))?;

    Ok(movies)
}

/// Movies linked to any genre whose name matches `name` exactly. Duplicate
/// genre rows with the same name are merged, so a movie appears once.
pub fn fetch_movies_for_genre_name(
    conn: &Connection,
    name: &str,
    limit: Option<usize>,
) -> StoreResult<Vec<Movie>> {
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT m.id, m.title, m.year
             FROM movies m
             INNER JOIN movie_genres mg ON mg.movie_id = m.id
             INNER JOIN genres g ON g.id = mg.genre_id
             WHERE g.name = ?1
             ORDER BY m.id
             LIMIT ?2",
        )
        .map_err(StoreError::sqlite("prepare genre movies query"))?;

    let movies = stmt
        .query_map(params![name, sql_limit(limit)], movie_from_row)
        .map_err(StoreError::sqlite("load genre movies"))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::sqlite("collect genre movies"))?;

    Ok(movies)
}
