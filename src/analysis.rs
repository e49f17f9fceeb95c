//! Analysis payload and result types exchanged with the completion estimator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Issue, IssueState};

/// Risk of an assigned issue going stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    /// Completion looks likely.
    Low,
    /// Uncertain outcome.
    Medium,
    /// Likely to stall without intervention.
    High,
}

/// A probabilistic estimate of whether and when an assigned issue will be
/// resolved.
///
/// Produced per (issue, point-in-time) pair; a fresh request later may yield
/// a different result. Never persisted beyond the short-lived analysis cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionAnalysis {
    /// Likelihood the issue will be solved, 0 to 100.
    pub completion_probability: u8,
    /// Estimated days to completion.
    pub estimated_days: u32,
    /// Whether the assigned user is currently active.
    pub is_user_active: bool,
    /// Risk of the issue becoming stale.
    pub risk: Risk,
    /// Brief explanation of the estimate.
    pub reasoning: String,
    /// Actionable advice for maintainers.
    pub recommendation: String,
}

impl CompletionAnalysis {
    /// The neutral estimate served whenever the remote estimator fails.
    ///
    /// Downstream consumers always need a renderable analysis, so estimator
    /// outages degrade to this fixed value instead of an error.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            completion_probability: 50,
            estimated_days: 7,
            is_user_active: false,
            risk: Risk::Medium,
            reasoning: "Unable to analyze - using default estimates".into(),
            recommendation: "Monitor this issue for activity".into(),
        }
    }
}

/// The slice of an issue record sent to the estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    /// The issue title.
    pub title: String,
    /// Issue number within the repository.
    pub number: u64,
    /// Current lifecycle state.
    pub state: IssueState,
    /// Login of the primary assignee, if any.
    pub assignee: Option<String>,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last updated.
    pub updated_at: DateTime<Utc>,
    /// Number of comments on the issue.
    pub comments: u64,
    /// Whether a pull request is linked.
    pub has_pull_request: bool,
}

impl IssueSummary {
    /// Projects an [`Issue`] record down to the fields the estimator sees.
    #[must_use]
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            title: issue.title.clone(),
            number: issue.number,
            state: issue.state,
            assignee: issue.assignee.as_ref().map(|actor| actor.login.clone()),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            comments: issue.comments,
            has_pull_request: issue.pull_request.is_some(),
        }
    }
}

/// Recent-activity context for the issue's assignee.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeActivity {
    /// Total contributions to the repository.
    pub contributions: u64,
    /// Freeform description of activity in the last 30 days, when known.
    pub recent_activity: Option<String>,
    /// How many other issues the assignee currently holds.
    pub other_assigned_issues: u64,
}

/// Repository-level context for the estimator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats {
    /// Mean days to close, when the snapshot contains closed issues.
    pub avg_time_to_close: Option<f64>,
    /// Open-issue count.
    pub open_issues: usize,
}

/// Everything the estimator needs for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// The issue under analysis.
    pub issue: IssueSummary,
    /// Activity context for the assignee.
    pub assignee_activity: AssigneeActivity,
    /// Repository-level context.
    pub repo_stats: RepoStats,
}

impl EstimateRequest {
    /// Renders the request as the prompt sent to the estimation model.
    #[must_use]
    pub fn prompt(&self) -> String {
        let issue = &self.issue;
        let assignee = issue.assignee.as_deref().unwrap_or("unassigned");
        let has_pr = if issue.has_pull_request { "yes" } else { "no" };
        let recent = self.assignee_activity.recent_activity.as_deref().unwrap_or("unknown");
        let avg_close = self
            .repo_stats
            .avg_time_to_close
            .map_or_else(|| "unknown".to_string(), |days| format!("{days:.1} days"));

        format!(
            "Analyze this GitHub issue and predict if the assigned user will solve it.\n\n\
             Issue Details:\n\
             - Title: {title}\n\
             - Issue #{number}\n\
             - State: {state}\n\
             - Assigned to: {assignee}\n\
             - Created: {created}\n\
             - Last updated: {updated}\n\
             - Comments: {comments}\n\
             - Has PR linked: {has_pr}\n\n\
             Assignee Activity:\n\
             - Total contributions: {contributions}\n\
             - Recent activity (last 30 days): {recent}\n\
             - Other assigned issues: {other}\n\n\
             Repository Stats:\n\
             - Average time to close: {avg_close}\n\
             - Total open issues: {open}\n\n\
             Based on this data, provide a JSON response with:\n\
             1. completionProbability: number 0-100 (likelihood issue will be solved)\n\
             2. estimatedDays: number (estimated days to completion)\n\
             3. isUserActive: boolean (is the assigned user currently active)\n\
             4. risk: \"low\" | \"medium\" | \"high\" (risk of becoming stale)\n\
             5. reasoning: string (brief explanation 1-2 sentences)\n\
             6. recommendation: string (actionable advice for maintainers)",
            title = issue.title,
            number = issue.number,
            state = issue.state,
            created = issue.created_at.to_rfc3339(),
            updated = issue.updated_at.to_rfc3339(),
            comments = issue.comments,
            contributions = self.assignee_activity.contributions,
            other = self.assignee_activity.other_assigned_issues,
            open = self.repo_stats.open_issues,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_carries_the_fixed_neutral_estimate() {
        let fallback = CompletionAnalysis::fallback();
        assert_eq!(fallback.completion_probability, 50);
        assert_eq!(fallback.estimated_days, 7);
        assert!(!fallback.is_user_active);
        assert_eq!(fallback.risk, Risk::Medium);
        assert_eq!(fallback.reasoning, "Unable to analyze - using default estimates");
        assert_eq!(fallback.recommendation, "Monitor this issue for activity");
    }

    #[test]
    fn analysis_deserializes_from_camel_case() {
        let json = r#"{
            "completionProbability": 85,
            "estimatedDays": 3,
            "isUserActive": true,
            "risk": "low",
            "reasoning": "Assignee is highly active and the issue is small.",
            "recommendation": "No action needed."
        }"#;

        let analysis: CompletionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.completion_probability, 85);
        assert_eq!(analysis.risk, Risk::Low);
        assert!(analysis.is_user_active);
    }

    #[test]
    fn prompt_includes_issue_and_context_fields() {
        let request = EstimateRequest {
            issue: IssueSummary {
                title: "Fix flaky test".into(),
                number: 42,
                state: IssueState::Open,
                assignee: Some("bob".into()),
                created_at: "2024-05-01T09:00:00Z".parse().unwrap(),
                updated_at: "2024-05-20T14:30:00Z".parse().unwrap(),
                comments: 3,
                has_pull_request: false,
            },
            assignee_activity: AssigneeActivity {
                contributions: 120,
                recent_activity: Some("14 commits".into()),
                other_assigned_issues: 2,
            },
            repo_stats: RepoStats { avg_time_to_close: Some(5.5), open_issues: 17 },
        };

        let prompt = request.prompt();
        assert!(prompt.contains("Fix flaky test"));
        assert!(prompt.contains("Issue #42"));
        assert!(prompt.contains("Assigned to: bob"));
        assert!(prompt.contains("Has PR linked: no"));
        assert!(prompt.contains("Total contributions: 120"));
        assert!(prompt.contains("Average time to close: 5.5 days"));
        assert!(prompt.contains("Total open issues: 17"));
    }

    #[test]
    fn prompt_handles_missing_context() {
        let request = EstimateRequest {
            issue: IssueSummary {
                title: "t".into(),
                number: 1,
                state: IssueState::Open,
                assignee: None,
                created_at: "2024-05-01T09:00:00Z".parse().unwrap(),
                updated_at: "2024-05-01T09:00:00Z".parse().unwrap(),
                comments: 0,
                has_pull_request: true,
            },
            assignee_activity: AssigneeActivity::default(),
            repo_stats: RepoStats::default(),
        };

        let prompt = request.prompt();
        assert!(prompt.contains("Assigned to: unassigned"));
        assert!(prompt.contains("Recent activity (last 30 days): unknown"));
        assert!(prompt.contains("Average time to close: unknown"));
    }
}
