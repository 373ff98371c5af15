use super::UserPayload;
use crate::Snowflake;

/// Turns a raw user object embedded in another payload into the id of the
/// canonical cached user, inserting or merging it as needed.
pub trait UserResolver {
    fn resolve(&self, user: UserPayload) -> Snowflake;
}
