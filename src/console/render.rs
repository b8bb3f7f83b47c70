use crate::models::MovieDetails;

/// Menu entries in display order; `0. Exit` is printed last.
pub(crate) const MENU_ENTRIES: &[&str] = &[
    "1. Add movie",
    "2. Update movie",
    "3. Delete movie",
    "4. List movies",
    "5. List movie by ID",
    "6. List movies by genre",
    "7. Add genre",
    "0. Exit",
];

pub(crate) fn menu() -> String {
    format!("{}\n", MENU_ENTRIES.join("\n"))
}

/// `ID: 3 - Heat - 1995 - Crime, Drama`
pub(crate) fn movie_line(details: &MovieDetails) -> String {
    format!(
        "ID: {} - {} - {} - {}",
        details.movie.id,
        details.movie.title,
        details.movie.year,
        details.genre_summary()
    )
}
