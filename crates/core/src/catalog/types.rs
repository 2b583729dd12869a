//! Normalized types for catalog API responses.

use serde::{Deserialize, Serialize};

/// A movie as it appears in list results (discover, trending, search).
///
/// Normalized at ingestion: multi-media records carry `name` and
/// `first_air_date` instead of `title` and `release_date`, and the
/// resolution rule (title over name, release date over first air date)
/// is applied once when the raw response is converted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Catalog-issued stable ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Synopsis text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path, relative to the catalog image base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Release date (YYYY-MM-DD). None for unreleased items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average vote (0-10). A missing vote stays absent, never 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Genre IDs (list results only; detail fetches carry full genres).
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl Movie {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

/// A genre as returned by detail fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full movie details from a by-id fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    /// Catalog-issued stable ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Synopsis text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    /// Full genre records.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

/// A cast credit from the credits endpoint, in catalog-provided order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    /// Actor name.
    pub name: String,
    /// Character played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    /// Billing order (0-based).
    #[serde(default)]
    pub order: u32,
}

/// A video entry from the videos endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Site-specific video key (for YouTube, the watch ID).
    pub key: String,
    /// Video title.
    pub name: String,
    /// Hosting site, e.g. "YouTube".
    pub site: String,
    /// Video type as reported by the catalog: "Trailer", "Teaser", "Clip"...
    pub kind: String,
}

impl Video {
    /// Whether this entry is a YouTube-hosted trailer.
    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site == "YouTube"
    }
}

/// Server-side filters for discover queries.
///
/// Each dimension is omitted from the outgoing request when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscoverFilters {
    /// Genre ID (`with_genres`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<u32>,
    /// 4-digit primary release year (`primary_release_year`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Minimum average vote floor (`vote_average.gte`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
}

impl DiscoverFilters {
    /// True when no dimension is set.
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.year.is_none() && self.min_rating.is_none()
    }
}

/// Granularity of the trending window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendingWindow {
    #[default]
    Day,
    Week,
}

impl TrendingWindow {
    /// Path segment used by the trending endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}
