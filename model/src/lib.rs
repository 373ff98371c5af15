mod snowflake;
pub use snowflake::{Snowflake, DISCORD_EPOCH};

mod entity;
pub use entity::Entity;

mod field;
pub use field::Field;

pub mod client;
pub use client::Client;

pub mod guild;
pub mod user;

mod util;
