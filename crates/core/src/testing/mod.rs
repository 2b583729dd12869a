//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the catalog and session
//! store seams, allowing controller and E2E tests without real
//! infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use explorer_core::testing::{fixtures, MockMovieCatalog};
//!
//! let catalog = MockMovieCatalog::new();
//! catalog.set_discover_pages(vec![fixtures::movie_page(1, 20)]).await;
//!
//! // Use behind Arc<dyn MovieCatalog> in a Browser...
//! ```

mod mock_catalog;
mod mock_session_store;

pub use mock_catalog::{MockMovieCatalog, RecordedQuery};
pub use mock_session_store::MemorySessionStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{CastMember, Genre, Movie, MovieDetails, Video};

    /// Create a test movie with reasonable defaults.
    pub fn movie(title: &str, year: u32) -> Movie {
        Movie {
            id: (year as u64 * 100 + title.len() as u64) % 100_000,
            title: title.to_string(),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some(format!("{}-06-15", year)),
            vote_average: Some(7.5),
            genre_ids: vec![18, 53],
        }
    }

    /// Create a test movie with an explicit ID.
    pub fn movie_with_id(id: u64, title: &str) -> Movie {
        Movie {
            id,
            ..movie(title, 2020)
        }
    }

    /// Create a page of `count` movies with consecutive IDs starting at
    /// `start_id`. Useful for pagination assertions.
    pub fn movie_page(start_id: u64, count: usize) -> Vec<Movie> {
        (0..count as u64)
            .map(|i| movie_with_id(start_id + i, &format!("Movie {}", start_id + i)))
            .collect()
    }

    /// Create test movie details.
    pub fn movie_details(id: u64, title: &str) -> MovieDetails {
        MovieDetails {
            id,
            title: title.to_string(),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("2020-06-15".to_string()),
            runtime_minutes: Some(120),
            genres: vec![
                Genre {
                    id: 18,
                    name: "Drama".to_string(),
                },
                Genre {
                    id: 53,
                    name: "Thriller".to_string(),
                },
            ],
            vote_average: Some(7.5),
        }
    }

    /// Create a test cast member.
    pub fn cast_member(name: &str, order: u32) -> CastMember {
        CastMember {
            name: name.to_string(),
            character: Some(format!("Character {}", order)),
            profile_path: None,
            order,
        }
    }

    /// Create a test video entry.
    pub fn video(key: &str, kind: &str, site: &str) -> Video {
        Video {
            key: key.to_string(),
            name: format!("{} ({})", kind, key),
            site: site.to_string(),
            kind: kind.to_string(),
        }
    }
}
