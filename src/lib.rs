//! Issue-health analytics core.
//!
//! Ingests issue-tracker snapshots (issues, contributors, repository
//! metadata) for a single repository and derives operational health signals:
//! which open issues are claimed but abandoned, how recently active each
//! assignee is, repository-level metrics, and a probabilistic completion
//! estimate obtained from an external estimation service with a fixed local
//! fallback.
//!
//! The crate is a library consumed by a presentation layer. External
//! boundaries (time, the estimator) are port traits under [`ports`] with
//! live and fixed implementations under [`adapters`]; everything else is
//! pure computation over the fetched snapshot.

pub mod adapters;
pub mod analysis;
pub mod analyzer;
pub mod cache;
pub mod config;
pub mod metrics;
pub mod model;
pub mod ports;
pub mod signals;

pub use analysis::{AssigneeActivity, CompletionAnalysis, EstimateRequest, IssueSummary, RepoStats, Risk};
pub use analyzer::{AnalysisOutcome, IssueAnalyzer};
pub use cache::AnalysisCache;
pub use config::AnalyticsConfig;
pub use metrics::{compute_repository_metrics, RepositoryMetrics};
pub use model::{Actor, Contributor, Issue, IssueState, Label, PullRequestLink, RepoRef, Repository, TimelineEvent};
pub use signals::{activity_tier, is_stale, ActivityTier};
