use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// GitHub GraphQL response structures

/// Top-level GraphQL envelope: `{ "data": ..., "errors": [...] }`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Option<Viewer>,
}

/// The authenticated user whose profile is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub status: Option<UserStatus>,
    pub repositories: RepositoryConnection,
}

impl Viewer {
    /// Repositories that are not private, in server order.
    pub fn public_repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.nodes.iter().filter(|repo| !repo.is_private)
    }

    pub fn public_repository_count(&self) -> usize {
        self.public_repositories().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatus {
    pub message: Option<String>,
    #[serde(rename = "emojiHTML")]
    pub emoji_html: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u32,
    pub nodes: Vec<Repository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub is_private: bool,
    pub is_fork: bool,
    pub parent: Option<ParentRepository>,
    pub description: Option<String>,
    pub primary_language: Option<Language>,
    pub stargazers: TotalCount,
    pub forks: TotalCount,
    pub license_info: Option<License>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRepository {
    pub name_with_owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// An ISO-8601 timestamp that keeps the string exactly as GitHub sent it.
///
/// The calendar date shown for old repositories is read in the offset GitHub
/// sent, so it never drifts across midnight when the instant is shifted to
/// UTC. UTC is only used for elapsed-time arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    local: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn parse(raw: &str) -> std::result::Result<Self, chrono::ParseError> {
        let local = DateTime::parse_from_rfc3339(raw)?;
        Ok(Timestamp {
            raw: raw.to_string(),
            local,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    /// The timestamp in the offset it was written with.
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.local
    }

    /// Characters 8-9 of the raw string (`"05"` for `2024-03-05T...`).
    pub fn day_of_month_text(&self) -> &str {
        self.raw.get(8..10).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
