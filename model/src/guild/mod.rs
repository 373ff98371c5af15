mod unavailable_guild;
pub use unavailable_guild::UnavailableGuild;

mod guild;
pub use guild::{Guild, GuildPayload};

mod emoji;
pub use emoji::{Emoji, EmojiPayload};

mod edit_emoji;
pub use edit_emoji::EditEmoji;
