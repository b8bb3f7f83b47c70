use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::Genre;

fn genre_from_row(row: &Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// First genre (lowest id) whose name matches exactly. Names are not unique
/// in the schema, so older rows win when duplicates exist.
pub fn find_genre_by_name(conn: &Connection, name: &str) -> StoreResult<Option<Genre>> {
    conn.query_row(
        "SELECT id, name FROM genres WHERE name = ?1 ORDER BY id LIMIT 1",
        params![name],
        genre_from_row,
    )
    .optional()
    .map_err(StoreError::sqlite("look up genre"))
}

pub fn fetch_genre(conn: &Connection, id: i64) -> StoreResult<Option<Genre>> {
    conn.query_row(
        "SELECT id, name FROM genres WHERE id = ?1",
        params![id],
        genre_from_row,
    )
    .optional()
    .map_err(StoreError::sqlite("load genre"))
}

pub fn fetch_genres(conn: &Connection) -> StoreResult<Vec<Genre>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM genres ORDER BY id")
        .map_err(StoreError::sqlite("prepare genre query"))?;

    let genres = stmt
        .query_map([], genre_from_row)
        .map_err(StoreError::sqlite("load genres"))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::sqlite("collect genres"))?;

    Ok(genres)
}

/// Genres linked to a movie, ordered by name so listings read naturally.
pub fn fetch_genres_for_movie(conn: &Connection, movie_id: i64) -> StoreResult<Vec<Genre>> {
    let mut stmt = conn
        .prepare(
            "SELECT g.id, g.name
             FROM genres g
             INNER JOIN movie_genres mg ON mg.genre_id = g.id
             WHERE mg.movie_id = ?1
             ORDER BY g.name COLLATE NOCASE, g.id",
        )
        .map_err(StoreError::sqlite("prepare movie genres query"))?;

    let genres = stmt
        .query_map([movie_id], genre_from_row)
        .map_err(StoreError::sqlite("load movie genres"))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::sqlite("collect movie genres"))?;

    Ok(genres)
}

/// Ids of every movie linked to one genre row.
pub fn fetch_movie_ids_for_genre(conn: &Connection, genre_id: i64) -> StoreResult<Vec<i64>> {
    let mut stmt = conn
        .prepare("SELECT movie_id FROM movie_genres WHERE genre_id = ?1 ORDER BY movie_id")
        .map_err(StoreError::sqlite("prepare genre links query"))?;

    let ids = stmt
        .query_map([genre_id], |row| row.get(0))
        .map_err(StoreError::sqlite("load genre links"))?
        .collect::<Result<Vec<i64>, _>>()
        .map_err(StoreError::sqlite("collect genre links"))?;

    Ok(ids)
}

/// Insert a genre and, when `link_movie_id` is given, its first movie link.
/// Both rows commit together or not at all.
pub fn create_genre(
    conn: &Connection,
    name: &str,
    link_movie_id: Option<i64>,
) -> StoreResult<Genre> {
    let tx = conn
        .unchecked_transaction()
        .map_err(StoreError::sqlite("begin genre transaction"))?;

    tx.execute("INSERT INTO genres (name) VALUES (?1)", params![name])
        .map_err(StoreError::sqlite("insert genre"))?;
    let id = tx.last_insert_rowid();

    if let Some(movie_id) = link_movie_id {
        tx.execute(
            "INSERT INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)",
            params![movie_id, id],
        )
        .map_err(StoreError::sqlite("link new genre to movie"))?;
    }

    tx.commit()
        .map_err(StoreError::sqlite("commit genre transaction"))?;

    Ok(Genre {
        id,
        name: name.to_string(),
    })
}

/// Connect an existing genre to a movie. `INSERT OR IGNORE` makes a repeated
/// link a no-op, so the pair is stored at most once.
pub fn link_genre(conn: &Connection, genre_id: i64, movie_id: i64) -> StoreResult<Genre> {
    let genre = fetch_genre(conn, genre_id)?.ok_or(StoreError::NotFound {
        entity: "genre",
        id: genre_id,
    })?;

    conn.execute(
        "INSERT OR IGNORE INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)",
        params![movie_id, genre_id],
    )
    .map_err(StoreError::sqlite("link genre to movie"))?;

    Ok(genre)
}
