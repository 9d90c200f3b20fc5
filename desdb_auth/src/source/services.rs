use super::{CredentialSource, Login};
use crate::perms::read_private;
use crate::record::Target;
use crate::{Error, Result};
use desdb_core::{DbType, Defaults, SourceKind};
use ini::{Ini, ParseOption};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_SECTION: &str = "DEFAULT";

/// DES services file (`~/.desservices.ini`).
///
/// ```text
/// [db-dessci]
/// user = alice
/// passwd = Secret1
/// server = leovip148.ncsa.uiuc.edu
/// type = oracle
/// name = dessci
/// port = 1521
/// ```
///
/// The section names the server as well as the login, so a hit overwrites
/// the target's host, dbtype, dbname and port.
pub struct ServicesSource<'a> {
    path: &'a Path,
    defaults: &'a Defaults,
}

impl<'a> ServicesSource<'a> {
    pub fn new(path: &'a Path, defaults: &'a Defaults) -> Self {
        Self { path, defaults }
    }

    fn read_section(&self, contents: &str, name: &str) -> Result<HashMap<String, String>> {
        // Passwords may hold quotes and backslashes verbatim.
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(contents, opt)
            .map_err(|e| Error::format(self.path, e.to_string()))?;

        let sections: Vec<_> = ini.section_all(Some(name)).collect();
        if sections.is_empty() {
            return Err(Error::format(self.path, format!("no section '{}'", name)));
        }

        // Repeated sections merge, later keys winning.
        let mut values = HashMap::new();
        let inherited = ini.section_all(Some(DEFAULT_SECTION));
        for props in inherited.chain(sections) {
            for (key, value) in props.iter() {
                values.insert(key.to_lowercase(), strip_inline_comment(value).to_string());
            }
        }
        Ok(values)
    }
}

/// Drops a `;` comment that follows whitespace. A `;` or `#` inside a value is
/// part of the value.
fn strip_inline_comment(value: &str) -> &str {
    let cut = value
        .char_indices()
        .zip(value.chars().skip(1))
        .find(|((_, c), next)| c.is_whitespace() && *next == ';')
        .map(|((i, _), _)| i);
    match cut {
        Some(i) => value[..i].trim(),
        None => value.trim(),
    }
}

impl CredentialSource for ServicesSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::Services
    }

    fn lookup(&self, target: &mut Target) -> Result<Option<Login>> {
        let Some(contents) = read_private(self.path)? else {
            return Ok(None);
        };
        let mut values = self.read_section(&contents, &target.section)?;
        let setting = |key: &str| values.get(key).map(|v| v.trim().to_lowercase());

        if let Some(server) = setting("server") {
            target.host = server;
        }
        if let Some(name) = setting("name") {
            target.dbname = name;
        }
        if let Some(dbtype) = setting("type") {
            target.dbtype = dbtype.parse::<DbType>()?;
        }
        target.port = match setting("port") {
            Some(port) => port
                .parse()
                .map_err(|_| Error::format(self.path, format!("invalid port '{}'", port)))?,
            None => self.defaults.port_for(target.dbtype),
        };

        Ok(Some(Login {
            user: values.remove("user").map(|u| u.to_lowercase()),
            password: values.remove("passwd"),
        }))
    }
}
