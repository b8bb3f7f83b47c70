use log::info;

use crate::error::StoreResult;
use crate::models::Genre;
use crate::store::CatalogStore;

/// Which branch `resolve_and_link` took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No genre had the name yet; it was created already linked.
    Created(Genre),
    /// An existing genre was linked to the movie.
    Linked(Genre),
}

impl Resolution {
    pub fn genre(&self) -> &Genre {
        match self {
            Resolution::Created(genre) | Resolution::Linked(genre) => genre,
        }
    }
}

/// Make sure a genre called `genre_name` exists and is linked to `movie_id`.
///
/// The name is matched exactly, without trimming or case folding. When several
/// genres share the name the oldest one is used. Performs exactly one write on
/// the genre side and never touches the movie row.
pub fn resolve_and_link<S: CatalogStore>(
    store: &S,
    genre_name: &str,
    movie_id: i64,
) -> StoreResult<Resolution> {
    match store.find_genre_by_name(genre_name)? {
        None => {
            let genre = store.create_genre(genre_name, Some(movie_id))?;
            info!(
                "event=genre_created genre_id={} movie_id={}",
                genre.id, movie_id
            );
            Ok(Resolution::Created(genre))
        }
        Some(existing) => {
            let genre = store.link_genre(existing.id, movie_id)?;
            info!(
                "event=genre_linked genre_id={} movie_id={}",
                genre.id, movie_id
            );
            Ok(Resolution::Linked(genre))
        }
    }
}
