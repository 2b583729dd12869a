//! Movie details assembly.
//!
//! Given a movie ID, performs three independent catalog fetches (detail
//! record, credit list, video list) and assembles the detail view. The
//! primary detail fetch failing fails the whole view; a failing credits
//! or videos fetch just leaves that section empty.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{CastMember, CatalogError, MovieCatalog, MovieDetails, Video};

/// Cast entries shown on the detail view.
const CAST_DISPLAY_LIMIT: usize = 6;

/// The assembled per-movie detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieView {
    /// Full detail record.
    pub detail: MovieDetails,
    /// First entries of the cast list, in catalog order.
    pub cast: Vec<CastMember>,
    /// The trailer, when one could be picked from the video list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<Video>,
}

/// Loads and assembles [`MovieView`]s from the catalog.
pub struct DetailsLoader {
    catalog: Arc<dyn MovieCatalog>,
}

impl DetailsLoader {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Load the detail view for a movie.
    ///
    /// Returns `CatalogError::NotFound` when the catalog has no record for
    /// the ID, so the surface can render an explicit not-found state.
    pub async fn load(&self, id: u64) -> Result<MovieView, CatalogError> {
        let detail = self.catalog.movie_details(id).await?;

        let cast = match self.catalog.movie_credits(id).await {
            Ok(mut cast) => {
                cast.truncate(CAST_DISPLAY_LIMIT);
                cast
            }
            Err(e) => {
                warn!("Credits fetch failed for movie {}: {}", id, e);
                Vec::new()
            }
        };

        let trailer = match self.catalog.movie_videos(id).await {
            Ok(videos) => pick_trailer(videos),
            Err(e) => {
                warn!("Videos fetch failed for movie {}: {}", id, e);
                None
            }
        };

        Ok(MovieView {
            detail,
            cast,
            trailer,
        })
    }
}

/// Prefer the first YouTube-hosted video of type "Trailer"; fall back to
/// whatever the catalog lists first.
fn pick_trailer(videos: Vec<Video>) -> Option<Video> {
    let index = videos.iter().position(Video::is_trailer).unwrap_or(0);
    videos.into_iter().nth(index)
}
