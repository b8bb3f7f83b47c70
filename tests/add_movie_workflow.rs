mod common;

use common::{count_asked, memory_store, run_script, FailOn, FlakyStore};
use movie_catalog::db::{fetch_genres, fetch_movie_ids_for_genre, fetch_movies};
use movie_catalog::{App, CatalogStore, ScriptedPrompt, StopAnswer, Year};

const ANOTHER_GENRE: &str = "Do you want to add another genre?: ";
const GENRE: &str = "Enter the movie genre: ";

#[test]
fn single_genre_session_creates_movie_and_linked_genre() {
    let store = memory_store();
    let (_, out) = run_script(&store, &["1", "Inception", "2010", "Sci-Fi", "n", "0"]);

    assert!(out.contains("Movie Inception added successfully!"));

    let movies = fetch_movies(store.connection(), None).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Inception");
    assert_eq!(movies[0].year, Year::Value(2010));

    let genres = fetch_genres(store.connection()).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Sci-Fi");
    assert_eq!(
        fetch_movie_ids_for_genre(store.connection(), genres[0].id).unwrap(),
        vec![movies[0].id]
    );
}

#[test]
fn repeated_genre_in_one_session_resolves_to_one_record_and_one_link() {
    let store = memory_store();
    run_script(
        &store,
        &["1", "Inception", "2010", "Action", "y", "Action", "n", "0"],
    );

    let genres = fetch_genres(store.connection()).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Action");

    let movie_id = fetch_movies(store.connection(), None).unwrap()[0].id;
    assert_eq!(
        fetch_movie_ids_for_genre(store.connection(), genres[0].id).unwrap(),
        vec![movie_id]
    );
}

#[test]
fn existing_genre_is_reused_across_movies() {
    let store = memory_store();
    run_script(
        &store,
        &[
            "1", "Alien", "1979", "Horror", "n", "1", "The Thing", "1982", "Horror", "n", "0",
        ],
    );

    let genres = fetch_genres(store.connection()).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(
        fetch_movie_ids_for_genre(store.connection(), genres[0].id)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn only_exact_lowercase_n_ends_the_genre_loop() {
    let store = memory_store();
    let (prompt, _) = run_script(
        &store,
        &[
            "1", "Heat", "1995", "Crime", "", "Drama", "no", "Thriller", "N", "Action", "y",
            "Noir", "n", "0",
        ],
    );

    assert_eq!(count_asked(&prompt, GENRE), 5);
    assert_eq!(count_asked(&prompt, ANOTHER_GENRE), 5);

    let movie_id = store.list_movies(None).unwrap()[0].id;
    let names: Vec<_> = store
        .genres_for_movie(movie_id)
        .unwrap()
        .into_iter()
        .map(|genre| genre.name)
        .collect();
    assert_eq!(names, ["Action", "Crime", "Drama", "Noir", "Thriller"]);
}

#[test]
fn non_numeric_year_is_passed_through_to_the_store() {
    let store = memory_store();
    let (_, out) = run_script(&store, &["1", "Mystery Reel", "not-a-year", "Drama", "n", "0"]);

    assert!(out.contains("Movie Mystery Reel added successfully!"));
    let movie = &store.list_movies(None).unwrap()[0];
    assert_eq!(movie.year, Year::NotANumber);
}

#[test]
fn failing_second_genre_keeps_first_link_and_returns_to_menu() {
    let store = FlakyStore::new(FailOn::CreateGenre(2));
    let (prompt, out) = run_script(
        &store,
        &["1", "Inception", "2010", "Sci-Fi", "y", "Thriller", "0"],
    );

    assert!(out.contains("An error occurred: simulated outage"));
    assert!(out.contains("Please try again."));
    assert_eq!(out.matches("1. Add movie").count(), 2);
    assert_eq!(count_asked(&prompt, ANOTHER_GENRE), 1);
    assert_eq!(
        prompt.asked().last().map(String::as_str),
        Some("Enter your choice: ")
    );

    let conn = store.inner().connection();
    let movies = fetch_movies(conn, None).unwrap();
    assert_eq!(movies.len(), 1);
    let genres = fetch_genres(conn).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Sci-Fi");
    assert_eq!(
        fetch_movie_ids_for_genre(conn, genres[0].id).unwrap(),
        vec![movies[0].id]
    );
}

#[test]
fn failing_movie_creation_skips_genre_prompts() {
    let store = FlakyStore::new(FailOn::CreateMovie);
    let (prompt, out) = run_script(&store, &["1", "Inception", "2010", "0"]);

    assert!(out.contains("An error occurred: simulated outage"));
    assert!(!out.contains("added successfully"));
    assert_eq!(count_asked(&prompt, GENRE), 0);
    assert!(fetch_genres(store.inner().connection()).unwrap().is_empty());
}

#[test]
fn input_ending_inside_the_loop_keeps_committed_work() {
    let store = memory_store();
    let (prompt, _) = run_script(&store, &["1", "Inception", "2010", "Sci-Fi"]);

    assert_eq!(count_asked(&prompt, ANOTHER_GENRE), 1);
    assert_eq!(store.list_movies(None).unwrap().len(), 1);
    assert_eq!(fetch_genres(store.connection()).unwrap().len(), 1);
}

#[test]
fn configured_stop_answer_replaces_the_default() {
    let store = memory_store();
    let prompt = ScriptedPrompt::new(["Inception", "2010", "Sci-Fi", "n", "Drama", "STOP"]);
    let mut app = App::new(&store, prompt, Vec::new())
        .with_stop_answer(StopAnswer::ignoring_case("stop"));

    app.add_movie().unwrap();

    assert_eq!(app.prompt().remaining(), 0);
    assert_eq!(count_asked(app.prompt(), ANOTHER_GENRE), 2);
    assert_eq!(fetch_genres(store.connection()).unwrap().len(), 2);
}
