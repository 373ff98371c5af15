mod user;
pub use user::{User, UserPayload};

mod resolver;
pub use resolver::UserResolver;
