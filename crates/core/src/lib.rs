pub mod browser;
pub mod catalog;
pub mod config;
pub mod details;
pub mod session;
pub mod testing;

pub use browser::{BrowseMode, Browser, BrowserSnapshot};
pub use catalog::{
    CastMember, CatalogError, DiscoverFilters, Genre, Movie, MovieCatalog, MovieDetails,
    TmdbCatalog, TmdbConfig, TrendingWindow, Video,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    SanitizedConfig, ServerConfig,
};
pub use details::{DetailsLoader, MovieView};
pub use session::{
    Identity, SessionController, SessionError, SessionStore, SqliteSessionStore, GUEST_NAME,
};
