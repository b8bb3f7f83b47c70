//! Persistence module split across logical submodules. Each function wraps a
//! single query so the store and workflows stay free of SQL.

mod connection;
mod genres;
mod movies;

pub use connection::{ensure_schema, open_catalog, open_in_memory};
pub use genres::{
    create_genre, fetch_genre, fetch_genres, fetch_genres_for_movie, fetch_movie_ids_for_genre,
    find_genre_by_name, link_genre,
};
pub use movies::{
    create_movie, delete_movie, fetch_movie, fetch_movies, fetch_movies_for_genre_name,
    update_movie,
};
