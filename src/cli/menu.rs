use tokio::io::{self, AsyncBufRead, AsyncWrite};

use crate::{
    cli::{actions, console::Console},
    persisters::json_store::JsonStore,
};

const MENU_LINES: [&str; 8] = [
    "Movie Catalog CLI Application",
    "1. Display Movie Catalog",
    "2. Add New Movie",
    "3. Update Movie Details",
    "4. Delete Movie",
    "5. Search Movies",
    "6. Filter Movies",
    "7. Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Search,
    Filter,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Filter),
            "7" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Runs one selection at a time until Quit or end of input.
pub async fn run_menu<R, W>(console: &mut Console<R, W>, store: &JsonStore) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        for line in MENU_LINES {
            console.say(line).await?;
        }

        let Some(input) = console.prompt("Enter your choice: ").await? else {
            log::debug!("Input closed at the menu, ending session");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.say("Invalid choice. Please try again.").await?;
            continue;
        };

        log::debug!("Menu selection: {:?}", choice);
        let outcome = match choice {
            MenuChoice::List => actions::display_movies(console, store).await?,
            MenuChoice::Add => actions::add_movie(console, store).await?,
            MenuChoice::Update => actions::update_movie(console, store).await?,
            MenuChoice::Delete => actions::delete_movie(console, store).await?,
            MenuChoice::Search => actions::search_movies(console, store).await?,
            MenuChoice::Filter => actions::filter_movies(console, store).await?,
            MenuChoice::Quit => return Ok(()),
        };

        if outcome == actions::Flow::InputClosed {
            log::debug!("Input closed during {:?}, ending session", choice);
            return Ok(());
        }
    }
}
