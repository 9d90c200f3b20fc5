//! Parser for the netrc file format.
//!
//! ```text
//! machine db.example.org
//!   login alice
//!   password "s3cret with spaces"
//! default login anonymous password guest
//! ```
//!
//! Supported tokens are `machine`, `default`, `login` (or `user`),
//! `account`, `password` and `macdef`. Macro bodies are skipped up to the
//! next blank line and `#` starts a comment that runs to the end of the line.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line})")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Credentials of one `machine` (or the `default`) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetrcEntry {
    pub login: String,
    pub account: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netrc {
    hosts: HashMap<String, NetrcEntry>,
    default: Option<NetrcEntry>,
}

impl Netrc {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let mut netrc = Netrc::default();

        while let Some(token) = lexer.next_token()? {
            match token.as_str() {
                "machine" => {
                    let name = lexer.value_for("machine")?;
                    let entry = parse_entry(&mut lexer, &name)?;
                    netrc.hosts.insert(name, entry);
                }
                "default" => {
                    let entry = parse_entry(&mut lexer, "default")?;
                    netrc.default = Some(entry);
                }
                "macdef" => {
                    lexer.value_for("macdef")?;
                    lexer.skip_macro_body();
                }
                other => {
                    return Err(lexer.error(format!("bad toplevel token '{}'", other)));
                }
            }
        }
        Ok(netrc)
    }

    /// Entry for `host`, falling back to the `default` entry
    pub fn authenticators(&self, host: &str) -> Option<&NetrcEntry> {
        self.hosts.get(host).or(self.default.as_ref())
    }
}

fn parse_entry(lexer: &mut Lexer<'_>, name: &str) -> Result<NetrcEntry, ParseError> {
    let mut login = None;
    let mut account = None;
    let mut password = None;

    loop {
        match lexer.peek_token()?.as_deref() {
            None | Some("machine") | Some("default") | Some("macdef") => break,
            Some(_) => {}
        }
        let Some(token) = lexer.next_token()? else {
            break;
        };
        match token.as_str() {
            "login" | "user" => login = Some(lexer.value_for(&token)?),
            "account" => account = Some(lexer.value_for(&token)?),
            "password" => password = Some(lexer.value_for(&token)?),
            other => {
                return Err(lexer.error(format!("bad follower token '{}'", other)));
            }
        }
    }

    match (login, password) {
        (Some(login), Some(password)) if !login.is_empty() && !password.is_empty() => {
            Ok(NetrcEntry {
                login,
                account,
                password,
            })
        }
        _ => Err(lexer.error(format!(
            "malformed entry '{}': login and password are required",
            name
        ))),
    }
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    peeked: Option<Option<String>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            peeked: None,
        }
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            line: self.line,
            message,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn peek_token(&mut self) -> Result<Option<String>, ParseError> {
        if self.peeked.is_none() {
            let token = self.read_token()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.clone().flatten())
    }

    fn next_token(&mut self) -> Result<Option<String>, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    /// The token following `keyword`, which must exist
    fn value_for(&mut self, keyword: &str) -> Result<String, ParseError> {
        self.next_token()?
            .ok_or_else(|| self.error(format!("missing value after '{}'", keyword)))
    }

    fn read_token(&mut self) -> Result<Option<String>, ParseError> {
        loop {
            match self.chars.peek().copied() {
                None => return Ok(None),
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('"') => {
                    self.bump();
                    return self.read_quoted().map(Some);
                }
                Some(_) => return Ok(Some(self.read_bare())),
            }
        }
    }

    fn read_bare(&mut self) -> String {
        let mut token = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            self.bump();
            if c == '\\' {
                if let Some(escaped) = self.bump() {
                    token.push(escaped);
                }
            } else {
                token.push(c);
            }
        }
        token
    }

    fn read_quoted(&mut self) -> Result<String, ParseError> {
        let start = self.line;
        let mut token = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ParseError {
                        line: start,
                        message: "unterminated quoted token".to_string(),
                    })
                }
                Some('"') => return Ok(token),
                Some('\\') => {
                    if let Some(escaped) = self.bump() {
                        token.push(escaped);
                    }
                }
                Some(c) => token.push(c),
            }
        }
    }

    fn skip_macro_body(&mut self) {
        // rest of the `macdef name` line
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
        loop {
            let mut line = String::new();
            let mut saw_newline = false;
            while let Some(c) = self.bump() {
                if c == '\n' {
                    saw_newline = true;
                    break;
                }
                line.push(c);
            }
            if line.trim().is_empty() || !saw_newline {
                break;
            }
        }
    }
}
