use model::Snowflake;

pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Error occurred while deserializing json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error occurred while loading options from environment: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("Store is disabled in cache options")]
    StoreDisabled,

    #[error("Guild {0} is not cached")]
    GuildNotFound(Snowflake),
}

impl<T> From<CacheError> for Result<T> {
    fn from(e: CacheError) -> Self {
        Err(e)
    }
}
