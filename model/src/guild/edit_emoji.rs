use serde::Serialize;

/// Body of a modify-emoji request. Unset fields are left out of the request.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct EditEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl EditEmoji {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_unset() {
        let body = EditEmoji::new().name("frog");
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"name":"frog"}"#);

        let body = EditEmoji::new().roles(["1", "r2"]);
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"roles":["1","r2"]}"#);
    }
}
