#![allow(dead_code)]

use std::cell::Cell;

use movie_catalog::error::StoreResult;
use movie_catalog::{
    open_in_memory, App, CatalogStore, Genre, Movie, NewMovie, ScriptedPrompt, SqliteStore,
    StoreError,
};
use rusqlite::ffi;

pub fn memory_store() -> SqliteStore {
    SqliteStore::new(open_in_memory().unwrap())
}

/// Run a full menu session over `answers` and return the prompt (for the
/// questions it was asked) plus everything printed to the console.
pub fn run_script<S: CatalogStore>(store: &S, answers: &[&str]) -> (ScriptedPrompt, String) {
    let mut app = App::new(store, ScriptedPrompt::new(answers.iter().copied()), Vec::new());
    app.run().unwrap();
    let (prompt, out) = app.into_parts();
    (prompt, String::from_utf8(out).unwrap())
}

pub fn count_asked(prompt: &ScriptedPrompt, question: &str) -> usize {
    prompt.asked().iter().filter(|asked| *asked == question).count()
}

/// Which store call should break.
#[derive(Debug, Clone, Copy)]
pub enum FailOn {
    CreateMovie,
    /// The n-th call (1-based) to `create_genre`.
    CreateGenre(usize),
}

/// Delegates to a real SQLite store but fails one chosen call with a
/// simulated I/O error.
pub struct FlakyStore {
    inner: SqliteStore,
    fail_on: FailOn,
    genre_creates: Cell<usize>,
}

impl FlakyStore {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            inner: memory_store(),
            fail_on,
            genre_creates: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &SqliteStore {
        &self.inner
    }
}

fn outage(action: &'static str) -> StoreError {
    StoreError::Sqlite {
        action,
        source: rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_IOERR),
            Some("simulated outage".to_string()),
        ),
    }
}

impl CatalogStore for FlakyStore {
    fn create_movie(&self, movie: &NewMovie) -> StoreResult<Movie> {
        if matches!(self.fail_on, FailOn::CreateMovie) {
            return Err(outage("insert movie"));
        }
        self.inner.create_movie(movie)
    }

    fn update_movie(&self, id: i64, movie: &NewMovie) -> StoreResult<Movie> {
        self.inner.update_movie(id, movie)
    }

    fn delete_movie(&self, id: i64) -> StoreResult<()> {
        self.inner.delete_movie(id)
    }

    fn list_movies(&self, limit: Option<usize>) -> StoreResult<Vec<Movie>> {
        self.inner.list_movies(limit)
    }

    fn find_movie(&self, id: i64) -> StoreResult<Option<Movie>> {
        self.inner.find_movie(id)
    }

    fn genres_for_movie(&self, movie_id: i64) -> StoreResult<Vec<Genre>> {
        self.inner.genres_for_movie(movie_id)
    }

    fn movies_for_genre_name(&self, name: &str, limit: Option<usize>) -> StoreResult<Vec<Movie>> {
        self.inner.movies_for_genre_name(name, limit)
    }

    fn find_genre_by_name(&self, name: &str) -> StoreResult<Option<Genre>> {
        self.inner.find_genre_by_name(name)
    }

    fn create_genre(&self, name: &str, link_movie_id: Option<i64>) -> StoreResult<Genre> {
        let call = self.genre_creates.get() + 1;
        self.genre_creates.set(call);
        if matches!(self.fail_on, FailOn::CreateGenre(n) if n == call) {
            return Err(outage("insert genre"));
        }
        self.inner.create_genre(name, link_movie_id)
    }

    fn link_genre(&self, genre_id: i64, movie_id: i64) -> StoreResult<Genre> {
        self.inner.link_genre(genre_id, movie_id)
    }
}
