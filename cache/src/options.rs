use crate::Result;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Options {
    #[serde(default = "enabled")]
    pub users: bool,
    #[serde(default = "enabled")]
    pub guilds: bool,
    #[serde(default = "enabled")]
    pub emojis: bool,
}

impl Options {
    pub fn new(users: bool, guilds: bool, emojis: bool) -> Options {
        Options {
            users,
            guilds,
            emojis,
        }
    }

    /// Reads `CACHE_USERS`, `CACHE_GUILDS` and `CACHE_EMOJIS`; unset stores are enabled.
    pub fn from_env() -> Result<Options> {
        Ok(envy::prefixed("CACHE_").from_env::<Options>()?)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            users: true,
            guilds: true,
            emojis: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let vars = vec![("CACHE_USERS".to_string(), "false".to_string())];
        let opts: Options = envy::prefixed("CACHE_").from_iter(vars).unwrap();

        assert_eq!(opts, Options::new(false, true, true));
    }
}
