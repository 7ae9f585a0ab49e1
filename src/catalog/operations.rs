//! Collection transforms behind the interactive actions. None of these touch storage.

use crate::model::movie::{FilterField, Movie};

pub fn append(mut movies: Vec<Movie>, movie: Movie) -> Vec<Movie> {
    movies.push(movie);
    movies
}

pub fn position_of_title(movies: &[Movie], title: &str) -> Option<usize> {
    movies.iter().position(|movie| movie.title == title)
}

/// `index` must come from `position_of_title` on the same collection.
pub fn replace_at(mut movies: Vec<Movie>, index: usize, replacement: Movie) -> Vec<Movie> {
    movies[index] = replacement;
    movies
}

/// Drops every movie titled exactly `title`, not only the first.
/// `None` when nothing was removed.
pub fn delete_all(movies: Vec<Movie>, title: &str) -> Option<Vec<Movie>> {
    let original_len = movies.len();
    let remaining: Vec<Movie> = movies
        .into_iter()
        .filter(|movie| movie.title != title)
        .collect();

    if remaining.len() == original_len {
        return None;
    }
    Some(remaining)
}

pub fn search<'a>(movies: &'a [Movie], term: &str) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|movie| movie.matches_search_term(term))
        .collect()
}

pub fn filter<'a>(movies: &'a [Movie], field: FilterField, value: &str) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|movie| movie.matches_filter(field, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("Dune", "Villeneuve", "2021", "Sci-Fi"),
            Movie::new("Heat", "Mann", "1995", "Crime"),
            Movie::new("Dune", "Lynch", "1984", "Sci-Fi"),
            Movie::new("Arrival", "Villeneuve", "2016", "Drama"),
        ]
    }

    #[test]
    fn append_adds_to_the_end() {
        let added = Movie::new("Dune", "", "", "");
        let result = append(catalog(), added.clone());
        assert_eq!(result.len(), catalog().len() + 1);
        assert_eq!(&result[..4], &catalog()[..]);
        assert_eq!(result.last(), Some(&added));
    }

    #[test]
    fn update_replaces_only_the_first_match_in_place() {
        let replacement = Movie::new("Dune: Part One", "Villeneuve", "2021", "Sci-Fi");
        let index = position_of_title(&catalog(), "Dune").unwrap();
        let result = replace_at(catalog(), index, replacement.clone());

        assert_eq!(result.len(), 4);
        assert_eq!(result[0], replacement);
        assert_eq!(result[2], catalog()[2]);
        assert_eq!(&result[1..], &catalog()[1..]);
    }

    #[test]
    fn title_lookup_is_case_sensitive_and_finds_first() {
        assert_eq!(position_of_title(&catalog(), "dune"), None);
        assert_eq!(position_of_title(&catalog(), "Heat"), Some(1));
    }

    #[test]
    fn delete_removes_every_exact_title_match() {
        let result = delete_all(catalog(), "Dune").unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|movie| movie.title != "Dune"));
        assert_eq!(result[0].title, "Heat");
        assert_eq!(result[1].title, "Arrival");
    }

    #[test]
    fn delete_of_unknown_title_reports_not_found() {
        assert!(delete_all(catalog(), "Alien").is_none());
        assert!(delete_all(catalog(), "DUNE").is_none());
        assert!(delete_all(vec![], "Dune").is_none());
    }

    #[test]
    fn search_matches_director_in_any_case_and_keeps_order() {
        let movies = catalog();
        let found = search(&movies, "VILLE");
        assert_eq!(found, vec![&movies[0], &movies[3]]);
    }

    #[test]
    fn search_does_not_match_release_year() {
        assert!(search(&catalog(), "1995").is_empty());
    }

    #[test]
    fn filter_by_genre_and_year() {
        let movies = catalog();
        assert_eq!(
            filter(&movies, FilterField::Genre, "sci-fi"),
            vec![&movies[0], &movies[2]]
        );
        assert_eq!(
            filter(&movies, FilterField::ReleaseYear, "2021"),
            vec![&movies[0]]
        );
        assert!(filter(&movies, FilterField::ReleaseYear, "2022").is_empty());
    }
}
