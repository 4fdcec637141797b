//! Mentions expansion and formatting
//!
//! Two textual forms exist for a mention:
//! - short form `@nick`, typed by the author,
//! - expanded form `@<nick url>` or `@<url>`, published on the wire.
//!
//! `MentionExpander` rewrites short mentions into the expanded form before
//! publishing. `MentionFormatter` rewrites expanded mentions back into a
//! readable `@nick` when rendering. Both are single-pass substitutions over
//! a read-only `SourceResolver` and never fail.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::source::{Source, SourceResolver};
use crate::style::{Style, Styler};

/// Expanded form: `@<` + optional `name ` + url containing `://` + `>`.
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@<(?:(?P<name>.*?)\s)?(?P<url>.*?://.*?)>").unwrap());

/// Short form: `@` + one or more non-whitespace characters.
static SHORT_MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(?P<name>\S+)").unwrap());

/// An expanded mention found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub name: Option<String>,
    pub url: String,
}

/// Extract every expanded mention from text, in order of appearance.
pub fn extract_mentions(text: &str) -> Vec<Mention> {
    MENTION_RE
        .captures_iter(text)
        .map(|caps| Mention {
            name: caps.name("name").map(|m| m.as_str().to_string()),
            url: caps["url"].to_string(),
        })
        .collect()
}

/// Rewrites short mentions into the expanded form.
pub struct MentionExpander<'a, R: SourceResolver + ?Sized> {
    resolver: &'a R,
    embed_names: bool,
}

impl<'a, R: SourceResolver + ?Sized> MentionExpander<'a, R> {
    /// Expander that embeds the resolved nick (`@<nick url>`).
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            embed_names: true,
        }
    }

    /// Toggle between `@<nick url>` and `@<url>`.
    pub fn embed_names(mut self, embed_names: bool) -> Self {
        self.embed_names = embed_names;
        self
    }

    /// Expand every resolvable `@nick` in `text`. Unresolved tokens are
    /// left as they were.
    pub fn expand<'t>(&self, text: &'t str) -> Cow<'t, str> {
        SHORT_MENTION_RE.replace_all(text, |caps: &Captures| {
            let candidate = &caps["name"];
            if let Some(source) = self.resolver.resolve_by_name(candidate) {
                return self.render(source);
            }

            // @bob! or @bob, -> retry without the trailing punctuation.
            let trimmed = candidate.trim_end_matches(|ch: char| ch.is_ascii_punctuation());
            if !trimmed.is_empty() && trimmed.len() < candidate.len() {
                if let Some(source) = self.resolver.resolve_by_name(trimmed) {
                    let mut expanded = self.render(source);
                    expanded.push_str(&candidate[trimmed.len()..]);
                    return expanded;
                }
            }

            debug!(nick = candidate, "unresolved mention left as is");
            format!("@{}", candidate)
        })
    }

    fn render(&self, source: &Source) -> String {
        if self.embed_names {
            format!("@<{} {}>", source.nick, source.url)
        } else {
            format!("@<{}>", source.url)
        }
    }
}

/// Rewrites expanded mentions into a readable, styled `@nick`.
pub struct MentionFormatter<'a, R: SourceResolver + ?Sized, S: Styler + ?Sized> {
    resolver: &'a R,
    styler: &'a S,
    embedded_names: bool,
}

impl<'a, R: SourceResolver + ?Sized, S: Styler + ?Sized> MentionFormatter<'a, R, S> {
    pub fn new(resolver: &'a R, styler: &'a S) -> Self {
        Self {
            resolver,
            styler,
            embedded_names: false,
        }
    }

    /// When set, a name embedded in the mention is shown verbatim and
    /// unstyled instead of the directory's nick.
    pub fn embedded_names(mut self, embedded_names: bool) -> Self {
        self.embedded_names = embedded_names;
        self
    }

    /// Format every expanded mention in `text`.
    ///
    /// | resolved | name | embedded_names | output             |
    /// |----------|------|----------------|--------------------|
    /// | no       | any  | any            | `@name`            |
    /// | yes      | no   | any            | styled `@nick`     |
    /// | yes      | yes  | false          | styled `@nick`     |
    /// | yes      | yes  | true           | `@name`            |
    ///
    /// An empty embedded name (`@< url>`) counts as no name.
    pub fn format<'t>(&self, text: &'t str) -> Cow<'t, str> {
        MENTION_RE.replace_all(text, |caps: &Captures| {
            let name = caps.name("name").map(|m| m.as_str());
            let url = &caps["url"];

            match self.resolver.resolve_by_url(url) {
                Some(source) if name.map_or(true, str::is_empty) || !self.embedded_names => {
                    let mention = format!("@{}", source.nick);
                    self.styler.style(&mention, self.style_for(source))
                }
                resolved => {
                    if resolved.is_none() {
                        debug!(url, "mention of unknown source");
                    }
                    format!("@{}", name.unwrap_or_default())
                }
            }
        })
    }

    /// Whether `text` mentions the viewer's own feed.
    pub fn mentions_viewer(&self, text: &str) -> bool {
        let own_nick = self.resolver.own_nick();
        MENTION_RE.captures_iter(text).any(|caps| {
            self.resolver
                .resolve_by_url(&caps["url"])
                .map_or(false, |source| Some(source.nick.as_str()) == own_nick)
        })
    }

    fn style_for(&self, source: &Source) -> Style {
        match self.resolver.own_nick() {
            Some(own) if own == source.nick => Style::BoldHighlight,
            _ => Style::Bold,
        }
    }
}

/// Expand short mentions in `text` with names embedded.
pub fn expand_mentions<'t, R: SourceResolver + ?Sized>(resolver: &R, text: &'t str) -> Cow<'t, str> {
    MentionExpander::new(resolver).expand(text)
}

/// Format expanded mentions in `text`, ignoring embedded names.
pub fn format_mentions<'t, R, S>(resolver: &R, styler: &S, text: &'t str) -> Cow<'t, str>
where
    R: SourceResolver + ?Sized,
    S: Styler + ?Sized,
{
    MentionFormatter::new(resolver, styler).format(text)
}
