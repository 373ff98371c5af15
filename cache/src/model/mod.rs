mod entity_maps;
pub use entity_maps::*;

mod guild_state;
pub use guild_state::GuildState;
