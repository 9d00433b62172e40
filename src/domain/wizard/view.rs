//! Read model published to callers after every mutation.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, WizardId};

use super::brand::{BrandProfile, Suggestion};
use super::goals::CampaignGoal;
use super::session::{Confirmation, WizardSession};
use super::step::{SubmissionState, WizardStep};

/// Snapshot of one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub id: WizardId,
    pub step: WizardStep,
    pub step_number: u8,
    pub started_at: Timestamp,

    pub name: String,
    pub email: String,

    pub company_website: String,
    pub suggestions: Vec<Suggestion>,
    pub suggestions_visible: bool,
    pub resolving: bool,
    pub resolved_domain: Option<String>,
    pub brand: Option<BrandProfile>,

    pub company_name: String,
    pub company_description: String,
    pub logo_reference: String,

    pub campaign_goals: Vec<CampaignGoal>,
    pub other_goal_label: String,
    pub deliverables: String,
    pub creator_profiles: String,
    pub target_audience: String,
    pub key_callouts: String,

    pub submission_state: SubmissionState,
    pub failure_reason: Option<String>,
    pub error: Option<String>,
    pub confirmation: Option<Confirmation>,

    pub can_advance: bool,
    pub can_go_back: bool,
    pub can_resolve: bool,
    pub can_submit: bool,
}

impl From<&WizardSession> for WizardView {
    fn from(session: &WizardSession) -> Self {
        let step = session.step();
        Self {
            id: *session.id(),
            step,
            step_number: step.number(),
            started_at: *session.started_at(),
            name: session.identity().name.clone(),
            email: session.identity().email.clone(),
            company_website: session.company_website().to_string(),
            suggestions: session.suggestions().to_vec(),
            suggestions_visible: session.suggestions_visible(),
            resolving: session.is_resolving(),
            resolved_domain: session.resolved_domain().map(str::to_string),
            brand: session.brand().cloned(),
            company_name: session.company_name().to_string(),
            company_description: session.company_description().to_string(),
            logo_reference: session.logo_reference().to_string(),
            campaign_goals: session.goals().goals().collect(),
            other_goal_label: session.goals().other_label().to_string(),
            deliverables: session.deliverables().to_string(),
            creator_profiles: session.creator_profiles().to_string(),
            target_audience: session.target_audience().to_string(),
            key_callouts: session.key_callouts().to_string(),
            submission_state: session.submission_state(),
            failure_reason: session.failure_reason().map(str::to_string),
            error: session.error().map(str::to_string),
            confirmation: session.confirmation().cloned(),
            can_advance: session.can_advance(),
            can_go_back: step.previous().is_some(),
            can_resolve: matches!(step, WizardStep::Website | WizardStep::BrandReview)
                && !session.is_resolving()
                && !session.company_website().trim().is_empty(),
            can_submit: session.can_submit(),
        }
    }
}
