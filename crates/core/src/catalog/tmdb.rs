//! TMDB (The Movie Database) API client.
//!
//! TMDB requires a bearer token for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{
    CastMember, DiscoverFilters, Genre, Movie, MovieDetails, TrendingWindow, Video,
};
use super::{CatalogError, MovieCatalog};
use async_trait::async_trait;

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API read access token (required). Sent as a bearer header,
    /// never as a query parameter.
    pub api_token: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters/backdrops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// Trending window granularity (default: day).
    #[serde(default)]
    pub trending_window: TrendingWindow,
}

/// TMDB API client.
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_token: String,
    #[allow(dead_code)]
    image_base_url: String,
}

impl TmdbCatalog {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_token.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API token is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        let image_base_url = config
            .image_base_url
            .unwrap_or_else(|| "https://image.tmdb.org/t/p".to_string());

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token,
            image_base_url,
        })
    }

    async fn get_list(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<Movie>, CatalogError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(query)
            .send()
            .await?;

        let response = check_status(response, None).await?;

        let list: ListResponse<MovieResult> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie list response: {}", e))
        })?;

        Ok(list.results.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn discover(
        &self,
        filters: &DiscoverFilters,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}/discover/movie", self.base_url);

        debug!("TMDB discover: filters={:?}, page={}", filters, page);

        let mut query = vec![
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("language", "en-US".to_string()),
            ("page", page.to_string()),
        ];
        if let Some(genre) = filters.genre {
            query.push(("with_genres", genre.to_string()));
        }
        if let Some(year) = filters.year {
            query.push(("primary_release_year", year.to_string()));
        }
        if let Some(rating) = filters.min_rating {
            query.push(("vote_average.gte", rating.to_string()));
        }

        self.get_list(&url, &query).await
    }

    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}/trending/movie/{}", self.base_url, window.as_str());

        debug!("TMDB trending: window={}, page={}", window.as_str(), page);

        let query = vec![
            ("language", "en-US".to_string()),
            ("page", page.to_string()),
        ];

        self.get_list(&url, &query).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}/search/movie", self.base_url);

        debug!("TMDB search: query='{}', page={}", query, page);

        let params = vec![
            ("query", query.to_string()),
            ("include_adult", "false".to_string()),
            ("language", "en-US".to_string()),
            ("page", page.to_string()),
        ];

        self.get_list(&url, &params).await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        let url = format!("{}/movie/{}", self.base_url, id);

        debug!("TMDB movie details: id={}", id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[("language", "en-US")])
            .send()
            .await?;

        let response = check_status(response, Some(&format!("Movie ID {}", id))).await?;

        let details: MovieDetailsResult = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie details response: {}", e))
        })?;

        Ok(details.into())
    }

    async fn movie_credits(&self, id: u64) -> Result<Vec<CastMember>, CatalogError> {
        let url = format!("{}/movie/{}/credits", self.base_url, id);

        debug!("TMDB movie credits: id={}", id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[("language", "en-US")])
            .send()
            .await?;

        let response = check_status(response, Some(&format!("Credits for movie {}", id))).await?;

        let credits: CreditsResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse credits response: {}", e))
        })?;

        Ok(credits.cast.into_iter().map(|c| c.into()).collect())
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        let url = format!("{}/movie/{}/videos", self.base_url, id);

        debug!("TMDB movie videos: id={}", id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[("language", "en-US")])
            .send()
            .await?;

        let response = check_status(response, Some(&format!("Videos for movie {}", id))).await?;

        let videos: ListResponse<VideoResult> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse videos response: {}", e))
        })?;

        Ok(videos.results.into_iter().map(|v| v.into()).collect())
    }
}

/// Map a non-success status to the matching error. A 404 maps to
/// `NotFound` only on by-id paths where `not_found` names the resource.
async fn check_status(
    response: Response,
    not_found: Option<&str>,
) -> Result<Response, CatalogError> {
    let status = response.status();
    if status == 401 {
        return Err(CatalogError::NotConfigured(
            "Invalid TMDB API token".to_string(),
        ));
    }
    if status == 429 {
        return Err(CatalogError::RateLimitExceeded);
    }
    if status == 404 {
        if let Some(what) = not_found {
            return Err(CatalogError::NotFound(what.to_string()));
        }
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    results: Vec<T>,
}

/// Raw list-level record. Movies carry `title`/`release_date`; multi-media
/// records carry `name`/`first_air_date` instead.
#[derive(Debug, Deserialize)]
struct MovieResult {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    vote_average: Option<f32>,
    #[serde(default)]
    genre_ids: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct MovieDetailsResult {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<GenreResult>,
    vote_average: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GenreResult {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastResult>,
}

#[derive(Debug, Deserialize)]
struct CastResult {
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
    #[serde(default)]
    order: u32,
}

#[derive(Debug, Deserialize)]
struct VideoResult {
    key: String,
    name: String,
    site: String,
    #[serde(rename = "type")]
    kind: String,
}

// ============================================================================
// Conversions
// ============================================================================

/// Title over name; release date over first air date; empty date strings
/// become None.
fn resolve_title(title: Option<String>, name: Option<String>) -> String {
    title.or(name).unwrap_or_default()
}

fn resolve_date(release_date: Option<String>, first_air_date: Option<String>) -> Option<String> {
    release_date
        .filter(|d| !d.is_empty())
        .or(first_air_date.filter(|d| !d.is_empty()))
}

impl From<MovieResult> for Movie {
    fn from(r: MovieResult) -> Self {
        Self {
            id: r.id,
            title: resolve_title(r.title, r.name),
            overview: r.overview,
            poster_path: r.poster_path,
            release_date: resolve_date(r.release_date, r.first_air_date),
            vote_average: r.vote_average,
            genre_ids: r.genre_ids,
        }
    }
}

impl From<MovieDetailsResult> for MovieDetails {
    fn from(d: MovieDetailsResult) -> Self {
        Self {
            id: d.id,
            title: resolve_title(d.title, d.name),
            overview: d.overview,
            poster_path: d.poster_path,
            release_date: resolve_date(d.release_date, d.first_air_date),
            runtime_minutes: d.runtime,
            genres: d.genres.into_iter().map(|g| Genre { id: g.id, name: g.name }).collect(),
            vote_average: d.vote_average,
        }
    }
}

impl From<CastResult> for CastMember {
    fn from(c: CastResult) -> Self {
        Self {
            name: c.name,
            character: c.character,
            profile_path: c.profile_path,
            order: c.order,
        }
    }
}

impl From<VideoResult> for Video {
    fn from(v: VideoResult) -> Self {
        Self {
            key: v.key,
            name: v.name,
            site: v.site,
            kind: v.kind,
        }
    }
}
