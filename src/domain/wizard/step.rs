//! Wizard step and submission state enums.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Position of a session within the wizard.
///
/// Stored as plain data so back-navigation is a regular transition rather
/// than a decrement of a one-way counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Website,
    BrandReview,
    CampaignDetails,
    Submitting,
    Confirmed,
}

impl WizardStep {
    /// 1-based position shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Website => 2,
            WizardStep::BrandReview => 3,
            WizardStep::CampaignDetails => 4,
            WizardStep::Submitting => 5,
            WizardStep::Confirmed => 6,
        }
    }

    /// The step reached by the "next" action, if the step has one.
    ///
    /// `Submitting` only leaves through the submission outcome, never
    /// through "next".
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => Some(WizardStep::Website),
            WizardStep::Website => Some(WizardStep::BrandReview),
            WizardStep::BrandReview => Some(WizardStep::CampaignDetails),
            WizardStep::CampaignDetails => Some(WizardStep::Submitting),
            WizardStep::Submitting | WizardStep::Confirmed => None,
        }
    }

    /// The step reached by the "back" action, if allowed.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Website => Some(WizardStep::Identity),
            WizardStep::BrandReview => Some(WizardStep::Website),
            WizardStep::CampaignDetails => Some(WizardStep::BrandReview),
            WizardStep::Identity | WizardStep::Submitting | WizardStep::Confirmed => None,
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Identity, Website)
                | (Website, BrandReview)
                | (Website, Identity)
                | (BrandReview, CampaignDetails)
                | (BrandReview, Website)
                | (CampaignDetails, Submitting)
                | (CampaignDetails, BrandReview)
                | (Submitting, Confirmed)
                | (Submitting, CampaignDetails)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Identity => vec![Website],
            Website => vec![BrandReview, Identity],
            BrandReview => vec![CampaignDetails, Website],
            CampaignDetails => vec![Submitting, BrandReview],
            Submitting => vec![Confirmed, CampaignDetails],
            Confirmed => vec![],
        }
    }
}

/// Status of the brief submission pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl StateMachine for SubmissionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionState::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Failed, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionState::*;
        match self {
            Idle | Failed => vec![Submitting],
            Submitting => vec![Succeeded, Failed],
            Succeeded => vec![],
        }
    }
}
