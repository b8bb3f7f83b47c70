//! The storage seam used by every console workflow. Workflows only ever talk
//! to a `CatalogStore`, which keeps them testable against a failing or
//! instrumented store and keeps SQL inside `db`.

use rusqlite::Connection;

use crate::db;
use crate::error::StoreResult;
use crate::models::{Genre, Movie, NewMovie};

/// Persistent repository of movies, genres and the links between them.
pub trait CatalogStore {
    fn create_movie(&self, movie: &NewMovie) -> StoreResult<Movie>;
    /// Fails with `StoreError::NotFound` when `id` is unknown.
    fn update_movie(&self, id: i64, movie: &NewMovie) -> StoreResult<Movie>;
    /// Fails with `StoreError::NotFound` when `id` is unknown.
    fn delete_movie(&self, id: i64) -> StoreResult<()>;
    fn list_movies(&self, limit: Option<usize>) -> StoreResult<Vec<Movie>>;
    fn find_movie(&self, id: i64) -> StoreResult<Option<Movie>>;
    fn genres_for_movie(&self, movie_id: i64) -> StoreResult<Vec<Genre>>;
    fn movies_for_genre_name(&self, name: &str, limit: Option<usize>) -> StoreResult<Vec<Movie>>;
    /// First genre with exactly this name, if any.
    fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>>;
    /// Create a genre, linking it to `link_movie_id` in the same request.
    fn create_genre(&self, name: &str, link_movie_id: Option<i64>) -> StoreResult<Genre>;
    /// Add `movie_id` to an existing genre's movies.
    fn link_genre(&self, genre_id: i64, movie_id: i64) -> StoreResult<Genre>;
}

/// `CatalogStore` backed by a single SQLite connection. The connection is
/// closed when the store is dropped.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow the raw connection, mostly for inspection in tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl CatalogStore for SqliteStore {
    fn create_movie(&self, movie: &NewMovie) -> StoreResult<Movie> {
        db::create_movie(&self.conn, movie)
    }

    fn update_movie(&self, id: i64, movie: &NewMovie) -> StoreResult<Movie> {
        db::update_movie(&self.conn, id, movie)
    }

    fn delete_movie(&self, id: i64) -> StoreResult<()> {
        db::delete_movie(&self.conn, id)
    }

    fn list_movies(&self, limit: Option<usize>) -> StoreResult<Vec<Movie>> {
        db::fetch_movies(&self.conn, limit)
    }

    fn find_movie(&self, id: i64) -> StoreResult<Option<Movie>> {
        db::fetch_movie(&self.conn, id)
    }

    fn genres_for_movie(&self, movie_id: i64) -> StoreResult<Vec<Genre>> {
        db::fetch_genres_for_movie(&self.conn, movie_id)
    }

    fn movies_for_genre_name(&self, name: &str, limit: Option<usize>) -> StoreResult<Vec<Movie>> {
        db::fetch_movies_for_genre_name(&self.conn, name, limit)
    }

    fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>> {
        db::find_genre_by_name(&self.conn, name)
    }

    fn create_genre(&self, name: &str, link_movie_id: Option<i64>) -> StoreResult<Genre> {
        db::create_genre(&self.conn, name, link_movie_id)
    }

    fn link_genre(&self, genre_id: i64, movie_id: i64) -> StoreResult<Genre> {
        db::link_genre(&self.conn, genre_id, movie_id)
    }
}
