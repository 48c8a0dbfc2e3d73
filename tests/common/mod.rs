#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use profile_page::types::{
    Language, License, ParentRepository, Repository, RepositoryConnection, Timestamp, TotalCount,
    UserStatus, Viewer,
};
use serde_json::{json, Value};

/// Fixed "current time" used by every rendering test.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn timestamp(raw: &str) -> Timestamp {
    Timestamp::parse(raw).expect("valid test timestamp")
}

/// A public repository with every optional field absent.
pub fn bare_repository(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        is_private: false,
        is_fork: false,
        parent: None,
        description: None,
        primary_language: None,
        stargazers: TotalCount::default(),
        forks: TotalCount::default(),
        license_info: None,
        updated_at: timestamp("2024-06-15T09:00:00Z"),
    }
}

/// A public repository with every optional field present.
pub fn full_repository(name: &str) -> Repository {
    Repository {
        is_fork: true,
        parent: Some(ParentRepository {
            name_with_owner: "rust-lang/rust".to_string(),
        }),
        description: Some("A <b>bold</b> project".to_string()),
        primary_language: Some(Language {
            name: "Rust".to_string(),
            color: Some("#dea584".to_string()),
        }),
        stargazers: TotalCount { total_count: 42 },
        forks: TotalCount { total_count: 7 },
        license_info: Some(License {
            name: "MIT License".to_string(),
        }),
        ..bare_repository(name)
    }
}

pub fn private_repository(name: &str) -> Repository {
    Repository {
        is_private: true,
        ..bare_repository(name)
    }
}

pub fn viewer(repositories: Vec<Repository>) -> Viewer {
    Viewer {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        bio: Some("I love Rust & GraphQL".to_string()),
        avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        status: Some(UserStatus {
            message: Some("Shipping".to_string()),
            emoji_html: Some("<div>🚀</div>".to_string()),
        }),
        repositories: RepositoryConnection {
            total_count: 25,
            nodes: repositories,
        },
    }
}

/// A GraphQL response body shaped like GitHub's.
pub fn viewer_response_json() -> Value {
    json!({
        "data": {
            "viewer": {
                "avatarUrl": "https://avatars.githubusercontent.com/u/583231",
                "status": null,
                "name": "The Octocat",
                "login": "octocat",
                "bio": "",
                "repositories": {
                    "totalCount": 3,
                    "nodes": [
                        {
                            "name": "hello-world",
                            "isPrivate": false,
                            "isFork": false,
                            "parent": null,
                            "description": "My first repository",
                            "primaryLanguage": { "color": "#f1e05a", "name": "JavaScript" },
                            "stargazers": { "totalCount": 3 },
                            "forks": { "totalCount": 0 },
                            "licenseInfo": null,
                            "updatedAt": "2024-06-15T08:00:00Z"
                        },
                        {
                            "name": "secret",
                            "isPrivate": true,
                            "isFork": false,
                            "parent": null,
                            "description": null,
                            "primaryLanguage": null,
                            "stargazers": { "totalCount": 0 },
                            "forks": { "totalCount": 0 },
                            "licenseInfo": null,
                            "updatedAt": "2024-06-14T08:00:00Z"
                        },
                        {
                            "name": "linguist",
                            "isPrivate": false,
                            "isFork": true,
                            "parent": { "nameWithOwner": "github/linguist" },
                            "description": null,
                            "primaryLanguage": { "color": null, "name": "Ruby" },
                            "stargazers": { "totalCount": 0 },
                            "forks": { "totalCount": 1 },
                            "licenseInfo": { "name": "MIT License" },
                            "updatedAt": "2023-11-20T08:00:00Z"
                        }
                    ]
                }
            }
        }
    })
}
