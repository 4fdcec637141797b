//! Sources and the directory they are resolved against
//!
//! A source is a participant: a display `nick` (not unique) and the `url`
//! of their feed (unique). The directory holds the viewer's own identity
//! plus the ordered list of followed sources. It is a read-only snapshot;
//! nothing in this crate mutates it after construction.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A participant identified by its feed url.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub url: String,
}

impl Source {
    pub fn new(nick: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            url: url.into(),
        }
    }
}

/// Lookup capability used by the expander and formatter.
pub trait SourceResolver {
    /// Resolve a feed url. The viewer's own url wins over followed sources.
    fn resolve_by_url(&self, url: &str) -> Option<&Source>;

    /// Resolve a nickname. The viewer's own nick only matches when their
    /// url is configured. Otherwise the first followed source wins.
    fn resolve_by_name(&self, nick: &str) -> Option<&Source>;

    /// The viewer's own nick, if set.
    fn own_nick(&self) -> Option<&str>;
}

/// On-disk shape of a directory snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct DirectoryFile {
    #[serde(default)]
    nick: String,
    #[serde(default)]
    twturl: String,
    #[serde(default)]
    following: Vec<Source>,
}

/// Snapshot of the viewer's identity and the sources they follow.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(from = "DirectoryFile", into = "DirectoryFile")]
pub struct SourceDirectory {
    own: Source,
    following: Vec<Source>,
}

impl From<DirectoryFile> for SourceDirectory {
    fn from(file: DirectoryFile) -> Self {
        Self::new(file.nick, file.twturl, file.following)
    }
}

impl From<SourceDirectory> for DirectoryFile {
    fn from(directory: SourceDirectory) -> Self {
        Self {
            nick: directory.own.nick,
            twturl: directory.own.url,
            following: directory.following,
        }
    }
}

impl SourceDirectory {
    /// Create a directory. Empty `nick`/`twturl` mean unset.
    pub fn new(nick: impl Into<String>, twturl: impl Into<String>, following: Vec<Source>) -> Self {
        Self {
            own: Source::new(nick, twturl),
            following,
        }
    }

    /// Directory with no own identity.
    pub fn following(following: Vec<Source>) -> Self {
        Self::new("", "", following)
    }

    /// The viewer's own identity as a source, if their url is configured.
    pub fn own_source(&self) -> Option<&Source> {
        if self.own.url.is_empty() {
            None
        } else {
            Some(&self.own)
        }
    }

    pub fn followed(&self) -> &[Source] {
        &self.following
    }
}

impl SourceResolver for SourceDirectory {
    fn resolve_by_url(&self, url: &str) -> Option<&Source> {
        if let Some(own) = self.own_source() {
            if own.url == url {
                trace!(url, "resolved url to own identity");
                return Some(own);
            }
        }
        let found = self.following.iter().find(|source| source.url == url);
        if let Some(source) = found {
            trace!(url, nick = %source.nick, "resolved url to followed source");
        }
        found
    }

    fn resolve_by_name(&self, nick: &str) -> Option<&Source> {
        if let Some(own) = self.own_source() {
            if !own.nick.is_empty() && own.nick == nick {
                trace!(nick, "resolved nick to own identity");
                return Some(own);
            }
        }
        let found = self.following.iter().find(|source| source.nick == nick);
        if let Some(source) = found {
            trace!(nick, url = %source.url, "resolved nick to followed source");
        }
        found
    }

    fn own_nick(&self) -> Option<&str> {
        if self.own.nick.is_empty() {
            None
        } else {
            Some(&self.own.nick)
        }
    }
}
