use std::io::Write;

use log::{error, info, warn};

use crate::error::WorkflowError;
use crate::models::{Movie, MovieDetails, NewMovie, Year};
use crate::prompt::PromptReader;
use crate::store::CatalogStore;

use super::genre_loop::{GenreLoop, StopAnswer};
use super::render::{menu, movie_line};
use super::resolver::resolve_and_link;

/// Maximum number of movies shown by the listing views.
pub const LIST_LIMIT: usize = 10;

const CHOICE_PROMPT: &str = "Enter your choice: ";
const TITLE_PROMPT: &str = "What is the name of the movie?: ";
const NEW_TITLE_PROMPT: &str = "What is the name of the new movie?: ";
const YEAR_PROMPT: &str = "What year was it released?: ";
const MOVIE_ID_PROMPT: &str = "What is the id of the movie?: ";
const GENRE_PROMPT: &str = "Enter the movie genre: ";
const ANOTHER_GENRE_PROMPT: &str = "Do you want to add another genre?: ";
const GENRE_NAME_PROMPT: &str = "What is the name of the genre?: ";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMovie,
    UpdateMovie,
    DeleteMovie,
    ListMovies,
    ListMovieById,
    ListMoviesByGenre,
    AddGenre,
    Exit,
}

impl MenuChoice {
    /// Map the raw answer to a menu entry. Only the bare digits are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let choice = match raw {
            "1" => MenuChoice::AddMovie,
            "2" => MenuChoice::UpdateMovie,
            "3" => MenuChoice::DeleteMovie,
            "4" => MenuChoice::ListMovies,
            "5" => MenuChoice::ListMovieById,
            "6" => MenuChoice::ListMoviesByGenre,
            "7" => MenuChoice::AddGenre,
            "0" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Console session: owns the prompt and output, borrows the store.
pub struct App<'s, S, P, W> {
    store: &'s S,
    prompt: P,
    out: W,
    stop_answer: StopAnswer,
}

impl<'s, S, P, W> App<'s, S, P, W>
where
    S: CatalogStore,
    P: PromptReader,
    W: Write,
{
    pub fn new(store: &'s S, prompt: P, out: W) -> Self {
        Self {
            store,
            prompt,
            out,
            stop_answer: StopAnswer::default(),
        }
    }

    /// Replace the answer that ends the genre loop of "add movie".
    pub fn with_stop_answer(mut self, stop_answer: StopAnswer) -> Self {
        self.stop_answer = stop_answer;
        self
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Show the menu and dispatch choices until the user picks `0` or the
    /// input runs dry. Store failures and bad ids are reported and the menu
    /// comes back; console I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<(), WorkflowError> {
        loop {
            write!(self.out, "{}", menu())?;
            let Some(raw) = self.prompt.read_line(CHOICE_PROMPT)? else {
                info!("event=input_closed where=menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                writeln!(self.out, "Invalid choice")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                info!("event=app_exit");
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(WorkflowError::InputClosed) => {
                    info!("event=input_closed where={choice:?}");
                    return Ok(());
                }
                Err(err @ WorkflowError::Prompt(_)) => {
                    error!("event=console_failed choice={choice:?} error={err}");
                    return Err(err);
                }
                Err(err) => self.report(choice, &err)?,
            }
        }
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<(), WorkflowError> {
        match choice {
            MenuChoice::AddMovie => self.add_movie(),
            MenuChoice::UpdateMovie => self.update_movie(),
            MenuChoice::DeleteMovie => self.delete_movie(),
            MenuChoice::ListMovies => self.list_movies(),
            MenuChoice::ListMovieById => self.list_movie_by_id(),
            MenuChoice::ListMoviesByGenre => self.list_movies_by_genre(),
            MenuChoice::AddGenre => self.add_genre(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Create a movie, then collect genres for it until the stop answer.
    ///
    /// Each genre link is committed on its own. If one fails the workflow
    /// stops there and the movie plus any earlier links stay in the store.
    pub fn add_movie(&mut self) -> Result<(), WorkflowError> {
        let title = self.ask(TITLE_PROMPT)?;
        let year = Year::parse(&self.ask(YEAR_PROMPT)?);
        if year == Year::NotANumber {
            warn!("event=year_not_a_number workflow=add_movie");
        }

        let movie = self.store.create_movie(&NewMovie { title, year })?;
        info!("event=movie_created movie_id={} year={}", movie.id, movie.year);
        writeln!(self.out, "Movie {} added successfully!", movie.title)?;

        let mut state = GenreLoop::start();
        while !state.is_done() {
            let genre_name = self.ask(GENRE_PROMPT)?;
            resolve_and_link(self.store, &genre_name, movie.id)?;
            let answer = self.ask(ANOTHER_GENRE_PROMPT)?;
            state = state.after_answer(&answer, &self.stop_answer);
        }
        Ok(())
    }

    pub fn update_movie(&mut self) -> Result<(), WorkflowError> {
        let id = self.ask_id(MOVIE_ID_PROMPT)?;
        let title = self.ask(NEW_TITLE_PROMPT)?;
        let year = Year::parse(&self.ask(YEAR_PROMPT)?);

        let movie = self.store.update_movie(id, &NewMovie { title, year })?;
        info!("event=movie_updated movie_id={}", movie.id);
        writeln!(self.out, "Movie {} updated successfully!", movie.title)?;
        Ok(())
    }

    pub fn delete_movie(&mut self) -> Result<(), WorkflowError> {
        let id = self.ask_id(MOVIE_ID_PROMPT)?;
        self.store.delete_movie(id)?;
        info!("event=movie_deleted movie_id={id}");
        writeln!(self.out, "Movie with id: {id} was deleted successfully!")?;
        Ok(())
    }

    pub fn list_movies(&mut self) -> Result<(), WorkflowError> {
        let movies = self.store.list_movies(Some(LIST_LIMIT))?;
        if movies.is_empty() {
            writeln!(self.out, "No movies found.")?;
            return Ok(());
        }
        self.print_movies(movies)
    }

    pub fn list_movie_by_id(&mut self) -> Result<(), WorkflowError> {
        let id = self.ask_id(MOVIE_ID_PROMPT)?;
        match self.store.find_movie(id)? {
            Some(movie) => self.print_movies(vec![movie]),
            None => {
                writeln!(self.out, "No movie found with id: {id}")?;
                Ok(())
            }
        }
    }

    pub fn list_movies_by_genre(&mut self) -> Result<(), WorkflowError> {
        let name = self.ask(GENRE_NAME_PROMPT)?;
        let movies = self.store.movies_for_genre_name(&name, Some(LIST_LIMIT))?;
        if movies.is_empty() {
            writeln!(self.out, "No movies found for genre: {name}")?;
            return Ok(());
        }
        self.print_movies(movies)
    }

    /// Create an unlinked genre unless one with the exact name exists already.
    pub fn add_genre(&mut self) -> Result<(), WorkflowError> {
        let name = self.ask(GENRE_NAME_PROMPT)?;
        if let Some(existing) = self.store.find_genre_by_name(&name)? {
            writeln!(
                self.out,
                "Genre {existing} already exists with id: {}",
                existing.id
            )?;
            return Ok(());
        }

        let genre = self.store.create_genre(&name, None)?;
        info!("event=genre_created genre_id={} linked=false", genre.id);
        writeln!(self.out, "Genre {genre} added with id: {}", genre.id)?;
        Ok(())
    }

    fn print_movies(&mut self, movies: Vec<Movie>) -> Result<(), WorkflowError> {
        for movie in movies {
            let genres = self.store.genres_for_movie(movie.id)?;
            let details = MovieDetails { movie, genres };
            writeln!(self.out, "{}", movie_line(&details))?;
        }
        Ok(())
    }

    fn report(&mut self, choice: MenuChoice, err: &WorkflowError) -> Result<(), WorkflowError> {
        error!("event=workflow_failed choice={choice:?} error={err:?}");
        writeln!(self.out, "An error occurred: {}", err.user_message())?;
        writeln!(self.out, "Please try again.")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, WorkflowError> {
        self.prompt
            .read_line(prompt)?
            .ok_or(WorkflowError::InputClosed)
    }

    fn ask_id(&mut self, prompt: &str) -> Result<i64, WorkflowError> {
        let raw = self.ask(prompt)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| WorkflowError::InvalidId(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_accepts_only_bare_digits() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddMovie));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::ListMoviesByGenre));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
