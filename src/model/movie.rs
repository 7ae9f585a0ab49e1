use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One catalog entry. Every field is free text; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub release_year: String,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        release_year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Movie {
            title: title.into(),
            director: director.into(),
            release_year: release_year.into(),
            genre: genre.into(),
        }
    }

    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("Title: {}", self.title),
            format!("Director: {}", self.director),
            format!("Release Year: {}", self.release_year),
            format!("Genre: {}", self.genre),
        ]
    }

    /// Case-insensitive substring match on title, director or genre. The release year is not searched.
    pub fn matches_search_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.title, &self.director, &self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn matches_filter(&self, field: FilterField, value: &str) -> bool {
        match field {
            FilterField::Genre => self.genre.to_lowercase() == value.to_lowercase(),
            FilterField::ReleaseYear => self.release_year == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Genre,
    ReleaseYear,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter term '{0}'. Expected 'genre' or 'release year'.")]
pub struct UnknownFilterField(pub String);

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(FilterField::Genre),
            "release year" => Ok(FilterField::ReleaseYear),
            other => Err(UnknownFilterField(other.to_string())),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Genre => write!(f, "genre"),
            FilterField::ReleaseYear => write!(f, "release year"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Movie {
        Movie::new("Dune", "Villeneuve", "2021", "Sci-Fi")
    }

    #[test]
    fn serializes_with_original_field_names() {
        let json = serde_json::to_value(dune()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Dune",
                "director": "Villeneuve",
                "releaseYear": "2021",
                "genre": "Sci-Fi"
            })
        );
    }

    #[test]
    fn search_ignores_case_across_title_director_and_genre() {
        let movie = dune();
        assert!(movie.matches_search_term("VILLE"));
        assert!(movie.matches_search_term("une"));
        assert!(movie.matches_search_term("sci-fi"));
        assert!(movie.matches_search_term(""));
    }

    #[test]
    fn search_skips_release_year() {
        assert!(!dune().matches_search_term("2021"));
    }

    #[test]
    fn genre_filter_is_case_insensitive_exact() {
        let movie = dune();
        assert!(movie.matches_filter(FilterField::Genre, "sci-fi"));
        assert!(!movie.matches_filter(FilterField::Genre, "sci"));
    }

    #[test]
    fn release_year_filter_is_exact_text() {
        let movie = dune();
        assert!(movie.matches_filter(FilterField::ReleaseYear, "2021"));
        assert!(!movie.matches_filter(FilterField::ReleaseYear, "2022"));
        assert!(!movie.matches_filter(FilterField::ReleaseYear, " 2021"));
    }

    #[test]
    fn parses_known_filter_fields_only() {
        assert_eq!("genre".parse::<FilterField>(), Ok(FilterField::Genre));
        assert_eq!(
            "release year".parse::<FilterField>(),
            Ok(FilterField::ReleaseYear)
        );
        assert_eq!(
            "budget".parse::<FilterField>(),
            Err(UnknownFilterField("budget".to_string()))
        );
        assert!("Genre".parse::<FilterField>().is_err());
    }

    #[test]
    fn display_lines_follow_field_order() {
        assert_eq!(
            dune().display_lines(),
            vec![
                "Title: Dune",
                "Director: Villeneuve",
                "Release Year: 2021",
                "Genre: Sci-Fi"
            ]
        );
    }
}
