//! Content type detection for saved links.
//!
//! Maps well-known domains (and, for some, path prefixes) to a [`ContentType`].
//! A type supplied by the user always wins over detection.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::normalize::authority::strip_www;

/// Kind of resource a saved link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Article,
    Video,
    Podcast,
    GithubRepo,
    Reddit,
    Linkedin,
    Newsletter,
    Tool,
    Other,
}

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        ContentType::Article,
        ContentType::Video,
        ContentType::Podcast,
        ContentType::GithubRepo,
        ContentType::Reddit,
        ContentType::Linkedin,
        ContentType::Newsletter,
        ContentType::Tool,
        ContentType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Video => "video",
            ContentType::Podcast => "podcast",
            ContentType::GithubRepo => "github_repo",
            ContentType::Reddit => "reddit",
            ContentType::Linkedin => "linkedin",
            ContentType::Newsletter => "newsletter",
            ContentType::Tool => "tool",
            ContentType::Other => "other",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown content type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

struct DomainRule {
    domain: &'static str,
    path_prefix: Option<&'static str>,
    content_type: ContentType,
}

const fn rule(domain: &'static str, path_prefix: Option<&'static str>, content_type: ContentType) -> DomainRule {
    DomainRule { domain, path_prefix, content_type }
}

/// Ordered rule table; the first match wins.
const DOMAIN_RULES: &[DomainRule] = &[
    rule("youtube.com", None, ContentType::Video),
    rule("youtu.be", None, ContentType::Video),
    rule("github.com", None, ContentType::GithubRepo),
    rule("reddit.com", None, ContentType::Reddit),
    rule("linkedin.com", None, ContentType::Linkedin),
    rule("open.spotify.com", Some("/show"), ContentType::Podcast),
    rule("open.spotify.com", Some("/episode"), ContentType::Podcast),
    rule("spotify.com", Some("/show"), ContentType::Podcast),
    rule("spotify.com", Some("/episode"), ContentType::Podcast),
    rule("podcasts.apple.com", None, ContentType::Podcast),
    rule("medium.com", None, ContentType::Newsletter),
    rule("substack.com", None, ContentType::Newsletter),
];

impl DomainRule {
    fn matches(&self, host: &str, path: &str) -> bool {
        let domain_match = host == self.domain
            || host
                .strip_suffix(self.domain)
                .is_some_and(|prefix| prefix.ends_with('.'));
        domain_match && self.path_prefix.is_none_or(|prefix| path.starts_with(prefix))
    }
}

/// Detect the content type of a URL from its domain.
///
/// Accepts raw or normalized URLs. Unparseable input and unknown domains
/// yield [`ContentType::Other`].
pub fn detect_content_type(url: &str, user_provided: Option<ContentType>) -> ContentType {
    if let Some(content_type) = user_provided {
        return content_type;
    }

    let Ok(parsed) = Url::parse(url.trim()) else {
        return ContentType::Other;
    };
    let Some(host) = parsed.host_str() else {
        return ContentType::Other;
    };

    let host = host.to_ascii_lowercase();
    let host = strip_www(&host);
    let path = parsed.path();

    DOMAIN_RULES
        .iter()
        .find(|rule| rule.matches(host, path))
        .map_or(ContentType::Other, |rule| rule.content_type)
}
