//! Typed records mirrored from the issue-tracker snapshot.
//!
//! Field names follow the GitHub REST v3 payloads so a fetched snapshot
//! deserializes directly. The core treats all of these as immutable inputs;
//! it never mutates or re-fetches them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user referenced by an issue (author, assignee, timeline actor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The user's login name.
    pub login: String,
    /// URL of the user's avatar image.
    pub avatar_url: String,
    /// URL of the user's profile page.
    #[serde(default)]
    pub html_url: String,
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The label name.
    pub name: String,
    /// Hex color of the label, without the leading `#`.
    pub color: String,
}

/// Marker that a pull request is linked to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLink {
    /// API URL of the linked pull request.
    pub url: String,
    /// Web URL of the linked pull request.
    pub html_url: String,
    /// When the pull request was merged, if it has been.
    pub merged_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// An issue as fetched from the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Globally unique issue id.
    pub id: u64,
    /// Issue number within the repository.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// Current lifecycle state.
    pub state: IssueState,
    /// Web URL of the issue.
    pub html_url: String,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the issue was closed, if it has been.
    pub closed_at: Option<DateTime<Utc>>,
    /// The user who opened the issue.
    pub user: Actor,
    /// The primary assignee, if any.
    pub assignee: Option<Actor>,
    /// All assignees; may be empty.
    #[serde(default)]
    pub assignees: Vec<Actor>,
    /// Labels attached to the issue, in tracker order.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// The issue body, if any.
    pub body: Option<String>,
    /// Present when a pull request is linked to this issue.
    #[serde(default)]
    pub pull_request: Option<PullRequestLink>,
    /// Number of comments on the issue.
    #[serde(default)]
    pub comments: u64,
}

impl Issue {
    /// True when the issue has a primary assignee or a non-empty assignee set.
    #[must_use]
    pub fn has_assignee(&self) -> bool {
        self.assignee.is_some() || !self.assignees.is_empty()
    }
}

/// Repository metadata from the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Globally unique repository id.
    pub id: u64,
    /// Short repository name.
    pub name: String,
    /// `owner/name` form.
    pub full_name: String,
    /// The repository owner.
    pub owner: Actor,
    /// Repository description, if any.
    pub description: Option<String>,
    /// Web URL of the repository.
    pub html_url: String,
    /// Star count.
    pub stargazers_count: u64,
    /// Open-issue count as reported by the tracker.
    pub open_issues_count: u64,
    /// Fork count.
    pub forks_count: u64,
}

/// A contributor with their total contribution count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// The contributor's login name.
    pub login: String,
    /// URL of the contributor's avatar image.
    pub avatar_url: String,
    /// URL of the contributor's profile page.
    #[serde(default)]
    pub html_url: String,
    /// Number of contributions to the repository.
    pub contributions: u64,
}

/// A single event in an issue's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The event name (e.g. `"assigned"`, `"labeled"`, `"cross-referenced"`).
    pub event: String,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
    /// The user who triggered the event, when reported.
    #[serde(default)]
    pub actor: Option<Actor>,
    /// The assignee involved, for assignment events.
    #[serde(default)]
    pub assignee: Option<Actor>,
    /// The label involved, for label events.
    #[serde(default)]
    pub label: Option<Label>,
}

/// An `owner/repo` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// The repository owner.
    pub owner: String,
    /// The repository name.
    pub repo: String,
}

impl RepoRef {
    /// Parses a repository reference from user input.
    ///
    /// Accepts full GitHub URLs (`https://github.com/owner/repo`, with or
    /// without a trailing `.git`) and the bare `owner/repo` form. Returns
    /// `None` when neither form matches.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(idx) = input.find("github.com/") {
            let rest = &input[idx + "github.com/".len()..];
            let mut parts = rest.split('/').filter(|part| !part.is_empty());
            let owner = parts.next()?;
            let repo = parts.next()?;
            let repo = repo.strip_suffix(".git").unwrap_or(repo);
            return Some(Self { owner: owner.to_string(), repo: repo.to_string() });
        }

        let mut parts = input.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Some(Self { owner: owner.to_string(), repo: repo.to_string() })
            }
            _ => None,
        }
    }
}
