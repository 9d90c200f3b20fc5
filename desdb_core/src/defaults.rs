use crate::{DbType, SourceKind};
use serde::Deserialize;

/// Connection target and source-order defaults.
///
/// Handed to the resolver at construction instead of living in process-wide
/// constants. Every field may be left out of a config document; missing
/// fields take the DES science database values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Database server host name.
    ///
    /// _Default:_ `leovip148.ncsa.uiuc.edu`.
    pub host: String,
    /// Database (service) name.
    ///
    /// _Default:_ `dessci`.
    pub dbname: String,
    /// _Default:_ `oracle`.
    pub dbtype: DbType,
    /// Section of the services file to read.
    ///
    /// _Default:_ `db-dessci`.
    pub section: String,
    /// _Default:_ `1521`.
    pub oracle_port: u16,
    /// _Default:_ `5432`.
    pub postgres_port: u16,
    /// Sources tried, in order, when no explicit credentials are given.
    ///
    /// _Default:_ `[services, netrc, desdb_pass]`.
    pub types: Vec<SourceKind>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            host: "leovip148.ncsa.uiuc.edu".to_string(),
            dbname: "dessci".to_string(),
            dbtype: DbType::Oracle,
            section: "db-dessci".to_string(),
            oracle_port: 1521,
            postgres_port: 5432,
            types: vec![SourceKind::Services, SourceKind::Netrc, SourceKind::DesdbPass],
        }
    }
}

impl Defaults {
    /// Default port for the given engine
    pub fn port_for(&self, dbtype: DbType) -> u16 {
        match dbtype {
            DbType::Oracle => self.oracle_port,
            DbType::Postgres => self.postgres_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_port_for() {
        let defaults = Defaults::default();
        assert_eq!(defaults.port_for(DbType::Oracle), 1521);
        assert_eq!(defaults.port_for(DbType::Postgres), 5432);
    }

    #[test]
    fn test_partial_document() {
        let defaults: Defaults =
            serde_json::from_str(r#"{"host": "db.example.org", "postgres_port": 6432}"#).unwrap();
        assert_eq!(defaults.host, "db.example.org");
        assert_eq!(defaults.port_for(DbType::Postgres), 6432);
        assert_eq!(defaults.dbname, "dessci");
        assert_eq!(defaults.section, "db-dessci");
        assert_eq!(defaults.types, Defaults::default().types);
    }
}
