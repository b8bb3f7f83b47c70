//! Core library surface for the movie catalog console.
//!
//! The binary wires these pieces together; tests drive the same `App` with a
//! scripted prompt and an in-memory store.
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod store;

/// Persistence entry points used by `main.rs` and the tests.
pub use db::{open_catalog, open_in_memory};

pub use error::{StoreError, WorkflowError};
pub use models::{Genre, Movie, MovieDetails, NewMovie, Year};

/// The interactive session and the genre workflow it is built around.
pub use console::{resolve_and_link, App, MenuChoice, Resolution, StopAnswer};
pub use prompt::{LinePrompt, PromptReader, ScriptedPrompt};
pub use store::{CatalogStore, SqliteStore};
