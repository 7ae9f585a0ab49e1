//! The six menu actions. Each one reloads the catalog from disk, and the mutating ones write it back.

use tokio::io::{self, AsyncBufRead, AsyncWrite};

use crate::{
    catalog::operations,
    cli::console::Console,
    model::movie::{FilterField, Movie},
    persisters::json_store::JsonStore,
};

const LIST_SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    InputClosed,
}

macro_rules! ask {
    ($console:expr, $question:expr) => {
        match $console.prompt($question).await? {
            Some(answer) => answer,
            None => return Ok(Flow::InputClosed),
        }
    };
}

pub async fn display_movies<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let movies = load_for_viewing(console, store).await?;

    console.say("=== Movie Catalog ===").await?;
    for movie in &movies {
        for line in movie.display_lines() {
            console.say(&line).await?;
        }
        console.say(LIST_SEPARATOR).await?;
    }
    Ok(Flow::Continue)
}

pub async fn add_movie<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let title = ask!(console, "Enter movie title: ");
    let director = ask!(console, "Enter movie director: ");
    let release_year = ask!(console, "Enter release year: ");
    let genre = ask!(console, "Enter movie genre: ");
    let movie = Movie::new(title, director, release_year, genre);

    let Some(movies) = load_for_change(console, store).await? else {
        return Ok(Flow::Continue);
    };

    log::info!("Adding movie '{}'", movie.title);
    persist(console, store, &operations::append(movies, movie)).await?;
    Ok(Flow::Continue)
}

pub async fn update_movie<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(movies) = load_for_change(console, store).await? else {
        return Ok(Flow::Continue);
    };
    let title = ask!(console, "Enter the title of the movie to update: ");

    let Some(index) = operations::position_of_title(&movies, &title) else {
        console.say("Movie not found.").await?;
        return Ok(Flow::Continue);
    };

    let updated_title = ask!(console, "Enter updated title: ");
    let updated_director = ask!(console, "Enter updated director: ");
    let updated_release_year = ask!(console, "Enter updated release year: ");
    let updated_genre = ask!(console, "Enter updated genre: ");
    let replacement = Movie::new(
        updated_title,
        updated_director,
        updated_release_year,
        updated_genre,
    );

    log::info!("Updating movie '{}'", title);
    let updated = operations::replace_at(movies, index, replacement);
    persist(console, store, &updated).await?;
    Ok(Flow::Continue)
}

pub async fn delete_movie<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(movies) = load_for_change(console, store).await? else {
        return Ok(Flow::Continue);
    };
    let title = ask!(console, "Enter the title of the movie to delete: ");

    let original_len = movies.len();
    match operations::delete_all(movies, &title) {
        Some(remaining) => {
            log::info!(
                "Deleting {} movie(s) titled '{}'",
                original_len - remaining.len(),
                title
            );
            persist(console, store, &remaining).await?;
        }
        None => console.say("Movie not found.").await?,
    }
    Ok(Flow::Continue)
}

pub async fn search_movies<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let movies = load_for_viewing(console, store).await?;
    let term = ask!(console, "Enter search term: ");

    let found = operations::search(&movies, &term);
    if found.is_empty() {
        console
            .say("No movies found matching the search term.")
            .await?;
    } else {
        print_results(console, "=== Search Results ===", &found).await?;
    }
    Ok(Flow::Continue)
}

pub async fn filter_movies<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let movies = load_for_viewing(console, store).await?;
    let filter_by = ask!(console, "Enter filter term (genre or release year): ");

    let field: FilterField = match filter_by.parse() {
        Ok(field) => field,
        Err(e) => {
            log::debug!("Rejected filter term {:?}", filter_by);
            console.say(&e.to_string()).await?;
            return Ok(Flow::Continue);
        }
    };
    let value = ask!(console, &format!("Enter {} to filter by: ", field));

    let found = operations::filter(&movies, field, &value);
    if found.is_empty() {
        console
            .say("No movies found matching the filter criteria.")
            .await?;
    } else {
        print_results(console, "=== Filtered Results ===", &found).await?;
    }
    Ok(Flow::Continue)
}

async fn print_results<R, W>(
    console: &mut Console<R, W>,
    header: &str,
    movies: &[&Movie],
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say(header).await?;
    for movie in movies {
        for line in movie.display_lines() {
            console.say(&line).await?;
        }
    }
    Ok(())
}

/// Views fall back to an empty catalog when the file can't be read.
async fn load_for_viewing<R, W>(
    console: &mut Console<R, W>,
    store: &JsonStore,
) -> io::Result<Vec<Movie>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match store.load().await {
        Ok(movies) => Ok(movies),
        Err(e) => {
            log::error!("Error reading movie data: {}", e);
            console
                .say(&format!("Could not read the movie catalog: {}", e))
                .await?;
            Ok(vec![])
        }
    }
}

/// `None` when the catalog can't be read; the caller makes no change.
async fn load_for_change<R, W>(
    console: &mut Console<R, W>,
    store: &JsonStore,
) -> io::Result<Option<Vec<Movie>>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match store.load().await {
        Ok(movies) => Ok(Some(movies)),
        Err(e) => {
            log::error!("Error reading movie data, refusing to modify it: {}", e);
            console
                .say(&format!(
                    "Could not read the movie catalog, no changes were made: {}",
                    e
                ))
                .await?;
            Ok(None)
        }
    }
}

async fn persist<R, W>(console: &mut Console<R, W>, store: &JsonStore, movies: &[Movie]) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match store.save(movies).await {
        Ok(()) => console.say("Movie catalog updated successfully.").await,
        Err(e) => {
            log::error!("Error saving movie data: {}", e);
            console
                .say(&format!("Failed to save movie catalog: {}", e))
                .await
        }
    }
}
