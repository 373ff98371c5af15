mod options;
pub use options::Options;

mod memory;
pub use memory::MemoryCache;

pub mod model;
pub use crate::model::{EmojiMap, GuildState, UserRef, UserStore};

mod event;
pub use event::*;

#[cfg(feature = "metrics")]
pub mod metrics;

mod error;
pub use error::{CacheError, Result};
