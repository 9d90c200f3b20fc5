use serde::Deserialize;

/// Caller-supplied resolver options.
///
/// Nothing here is validated until [`Authenticator::resolve`] runs, so an
/// options bag can be built piecemeal or deserialized from a config document.
///
/// [`Authenticator::resolve`]: crate::Authenticator::resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Explicit user name. Must come together with `password`.
    pub user: Option<String>,
    /// Explicit password. Must come together with `user`.
    pub password: Option<String>,
    /// Source tags to try, in order.
    ///
    /// _Default:_ the resolver's configured order.
    pub types: Option<Vec<String>>,
    pub host: Option<String>,
    /// Database name.
    pub name: Option<String>,
    pub dbtype: Option<String>,
    /// _Default:_ derived from `dbtype`.
    pub port: Option<u16>,
    /// Services file section.
    pub section: Option<String>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn dbtype(mut self, dbtype: &str) -> Self {
        self.dbtype = Some(dbtype.to_string());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_matches_document() {
        let built = ResolveOptions::new()
            .types(["netrc", "services"])
            .host("myhost")
            .dbtype("postgres")
            .port(6543);
        let parsed: ResolveOptions = serde_json::from_str(
            r#"{"types": ["netrc", "services"], "host": "myhost", "dbtype": "postgres", "port": 6543}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
        assert_eq!(parsed.user, None);
        assert_eq!(parsed.section, None);
    }
}
