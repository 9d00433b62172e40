//! Wizard session aggregate.
//!
//! One session per user filling in the form. Every mutation goes through a
//! method on this type; the controller owning it serializes calls so no two
//! handlers ever interleave.
//!
//! # Invariants
//!
//! - `step == Submitting` exactly when `submission_state == Submitting`
//! - a step is left forward only when its required fields are present
//! - at most one brand resolution and one submission are in flight
//! - resolved brand data never overwrites a field the user edited
//! - local refusals (guards, busy) never touch the error slot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, Timestamp, ValidationError, WizardId};

use super::brand::{BrandProfile, Suggestion};
use super::brief::BriefDraft;
use super::errors::{FailedAction, WizardError};
use super::goals::{CampaignGoal, GoalSelection};
use super::step::{SubmissionState, WizardStep};
use super::suggestions::{FeedUpdate, QueryOutcome, SearchTicket, SuggestionFeed};

/// Who is requesting the brief.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// A brand detail lookup handed out to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTicket {
    pub seq: u64,
    pub domain: String,
}

/// Outcome of handing a finished lookup back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Applied,
    Failed,
    Stale,
}

/// Document produced by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub document_url: String,
    pub logo_url: Option<String>,
}

/// Brand-derived fields the user has typed into since they were filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct EditedFields {
    company_name: bool,
    company_description: bool,
    logo_reference: bool,
}

#[derive(Debug, Clone)]
pub struct WizardSession {
    id: WizardId,
    step: WizardStep,
    identity: Identity,

    company_website: String,
    feed: SuggestionFeed,

    company_name: String,
    company_description: String,
    logo_reference: String,
    edited: EditedFields,
    brand: Option<BrandProfile>,
    resolved_domain: Option<String>,
    resolve_seq: u64,
    resolving: Option<ResolveTicket>,

    goals: GoalSelection,
    deliverables: String,
    creator_profiles: String,
    target_audience: String,
    key_callouts: String,

    submission_state: SubmissionState,
    failure_reason: Option<String>,
    confirmation: Option<Confirmation>,
    error: Option<String>,

    started_at: Timestamp,
}

impl WizardSession {
    /// Starts a fresh session at the identity step.
    pub fn new(id: WizardId) -> Self {
        Self::with_min_query_length(id, super::suggestions::MIN_QUERY_LENGTH)
    }

    pub fn with_min_query_length(id: WizardId, min_query_length: usize) -> Self {
        Self {
            id,
            step: WizardStep::Identity,
            identity: Identity::default(),
            company_website: String::new(),
            feed: SuggestionFeed::new(min_query_length),
            company_name: String::new(),
            company_description: String::new(),
            logo_reference: String::new(),
            edited: EditedFields::default(),
            brand: None,
            resolved_domain: None,
            resolve_seq: 0,
            resolving: None,
            goals: GoalSelection::default(),
            deliverables: String::new(),
            creator_profiles: String::new(),
            target_audience: String::new(),
            key_callouts: String::new(),
            submission_state: SubmissionState::Idle,
            failure_reason: None,
            confirmation: None,
            error: None,
            started_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WizardId {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn company_website(&self) -> &str {
        &self.company_website
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.feed.suggestions()
    }

    pub fn suggestions_visible(&self) -> bool {
        self.feed.is_visible()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_description(&self) -> &str {
        &self.company_description
    }

    pub fn logo_reference(&self) -> &str {
        &self.logo_reference
    }

    pub fn brand(&self) -> Option<&BrandProfile> {
        self.brand.as_ref()
    }

    pub fn resolved_domain(&self) -> Option<&str> {
        self.resolved_domain.as_deref()
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving.is_some()
    }

    pub fn goals(&self) -> &GoalSelection {
        &self.goals
    }

    pub fn deliverables(&self) -> &str {
        &self.deliverables
    }

    pub fn creator_profiles(&self) -> &str {
        &self.creator_profiles
    }

    pub fn target_audience(&self) -> &str {
        &self.target_audience
    }

    pub fn key_callouts(&self) -> &str {
        &self.key_callouts
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission_state
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field edits
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.identity.name = name.into();
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.identity.email = email.into();
        Ok(())
    }

    /// Records a keystroke in the website field and feeds the autocomplete.
    pub fn input_website(&mut self, text: impl Into<String>) -> Result<QueryOutcome, WizardError> {
        self.ensure_editable()?;
        self.company_website = text.into();
        Ok(self.feed.on_query_change(&self.company_website))
    }

    /// Clearing a field hands it back to brand resolution.
    pub fn set_company_name(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.company_name = value.into();
        self.edited.company_name = !self.company_name.trim().is_empty();
        Ok(())
    }

    pub fn set_company_description(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.company_description = value.into();
        self.edited.company_description = !self.company_description.trim().is_empty();
        Ok(())
    }

    pub fn set_logo_reference(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.logo_reference = value.into();
        self.edited.logo_reference = !self.logo_reference.trim().is_empty();
        Ok(())
    }

    pub fn set_goal(&mut self, goal: CampaignGoal, selected: bool) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.goals.set(goal, selected);
        Ok(())
    }

    pub fn set_other_goal_label(&mut self, label: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.goals.set_other_label(label);
        Ok(())
    }

    pub fn set_deliverables(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.deliverables = value.into();
        Ok(())
    }

    pub fn set_creator_profiles(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.creator_profiles = value.into();
        Ok(())
    }

    pub fn set_target_audience(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.target_audience = value.into();
        Ok(())
    }

    pub fn set_key_callouts(&mut self, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.key_callouts = value.into();
        Ok(())
    }

    /// Whether the form still accepts edits.
    pub fn is_editable(&self) -> bool {
        !matches!(self.step, WizardStep::Submitting | WizardStep::Confirmed)
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                "step",
                format!("the form cannot be edited while {:?}", self.step),
            )
            .into())
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Suggestions
    // ─────────────────────────────────────────────────────────────────────────

    /// See [`SuggestionFeed::on_quiet_window_elapsed`].
    pub fn quiet_window_elapsed(&mut self, generation: u64) -> Option<SearchTicket> {
        self.feed.on_quiet_window_elapsed(generation)
    }

    pub fn apply_suggestions(
        &mut self,
        seq: u64,
        result: Result<Vec<Suggestion>, WizardError>,
    ) -> FeedUpdate {
        let failure = result.as_ref().err().cloned();
        let update = self.feed.apply(seq, result);
        match (update, failure) {
            (FeedUpdate::Applied { .. }, _) => self.error = None,
            (FeedUpdate::Failed, Some(err)) => self.record_failure(FailedAction::Suggestions, &err),
            _ => {}
        }
        update
    }

    /// Hides the list without touching the typed text.
    pub fn dismiss_suggestions(&mut self) {
        self.feed.dismiss();
    }

    /// Picks a suggestion: fills the website and starts resolving it.
    ///
    /// Nothing changes when the resolution would be refused.
    pub fn select_suggestion(&mut self, domain: &str) -> Result<ResolveTicket, WizardError> {
        self.check_can_resolve(domain)?;
        self.company_website = domain.trim().to_string();
        self.feed.dismiss();
        self.begin_resolution()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Brand resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts resolving the current website.
    ///
    /// # Errors
    ///
    /// - `Busy` while a previous resolution is in flight
    /// - `ValidationFailure` if the website is blank or the step is past
    ///   brand review
    pub fn begin_resolution(&mut self) -> Result<ResolveTicket, WizardError> {
        self.check_can_resolve(&self.company_website)?;

        self.resolve_seq += 1;
        let ticket = ResolveTicket {
            seq: self.resolve_seq,
            domain: self.company_website.trim().to_string(),
        };
        self.resolving = Some(ticket.clone());
        Ok(ticket)
    }

    /// Applies a finished lookup if it belongs to the outstanding ticket.
    pub fn complete_resolution(
        &mut self,
        seq: u64,
        result: Result<BrandProfile, WizardError>,
    ) -> ResolutionOutcome {
        if self.resolving.as_ref().map(|ticket| ticket.seq) != Some(seq) {
            return ResolutionOutcome::Stale;
        }
        let Some(ticket) = self.resolving.take() else {
            return ResolutionOutcome::Stale;
        };

        match result {
            Ok(profile) => {
                if !self.edited.company_name {
                    self.company_name = profile.name().to_string();
                }
                if !self.edited.company_description {
                    self.company_description = profile.description().to_string();
                }
                if !self.edited.logo_reference {
                    self.logo_reference = profile.preferred_logo_url().unwrap_or_default().to_string();
                }
                // Edits only survive the resolution that follows them.
                self.edited = EditedFields::default();
                self.resolved_domain = Some(ticket.domain);
                self.brand = Some(profile);
                self.error = None;
                ResolutionOutcome::Applied
            }
            Err(err) => {
                self.record_failure(FailedAction::BrandDetails, &err);
                ResolutionOutcome::Failed
            }
        }
    }

    fn check_can_resolve(&self, domain: &str) -> Result<(), WizardError> {
        self.ensure_not_resolving()?;
        if !matches!(self.step, WizardStep::Website | WizardStep::BrandReview) {
            return Err(ValidationError::invalid_format(
                "step",
                format!("brand details cannot be fetched from {:?}", self.step),
            )
            .into());
        }
        if domain.trim().is_empty() {
            return Err(ValidationError::empty_field("company_website").into());
        }
        Ok(())
    }

    fn ensure_not_resolving(&self) -> Result<(), WizardError> {
        match &self.resolving {
            Some(ticket) => Err(WizardError::busy(format!(
                "brand details for {} are still loading",
                ticket.domain
            ))),
            None => Ok(()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the guard for leaving `step` forward.
    pub fn check_step_complete(&self, step: WizardStep) -> Result<(), ValidationError> {
        match step {
            WizardStep::Identity => {
                require("name", &self.identity.name)?;
                require("email", &self.identity.email)
            }
            WizardStep::Website => {
                let website = self.company_website.trim();
                require("company_website", website)?;
                if self.resolved_domain.as_deref() != Some(website) {
                    return Err(ValidationError::invalid_format(
                        "company_website",
                        "brand details have not been fetched for this website",
                    ));
                }
                Ok(())
            }
            WizardStep::BrandReview => Ok(()),
            WizardStep::CampaignDetails => {
                if self.goals.is_empty() {
                    return Err(ValidationError::empty_field("campaign_goals"));
                }
                if self.goals.contains(CampaignGoal::Other) {
                    require("other_goal_label", self.goals.other_label())?;
                }
                require("deliverables", &self.deliverables)?;
                require("creator_profiles", &self.creator_profiles)?;
                require("target_audience", &self.target_audience)
            }
            WizardStep::Submitting | WizardStep::Confirmed => Err(ValidationError::invalid_format(
                "step",
                format!("{:?} is not left by the next action", step),
            )),
        }
    }

    /// Whether the "next" control of the current step is enabled.
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some()
            && !self.is_resolving()
            && self.submission_state != SubmissionState::Submitting
            && self.check_step_complete(self.step).is_ok()
    }

    /// Moves to the next step. Campaign details are left through
    /// [`begin_submission`](Self::begin_submission) instead.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::CampaignDetails {
            return Err(ValidationError::invalid_format(
                "step",
                "campaign details are left by submitting the brief",
            )
            .into());
        }
        self.ensure_not_resolving()?;
        self.check_step_complete(self.step)?;
        let target = self.step.next().ok_or_else(|| {
            ValidationError::invalid_format("step", format!("{:?} has no next step", self.step))
        })?;
        self.step = self.step.transition_to(target)?;
        self.feed.dismiss();
        self.error = None;
        Ok(self.step)
    }

    /// Moves one step back; field values are kept.
    pub fn go_back(&mut self) -> Result<WizardStep, WizardError> {
        let target = self.step.previous().ok_or_else(|| {
            ValidationError::invalid_format("step", format!("cannot go back from {:?}", self.step))
        })?;
        self.step = self.step.transition_to(target)?;
        self.error = None;
        Ok(self.step)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::CampaignDetails
            && !self.is_resolving()
            && self.submission_state != SubmissionState::Submitting
            && self.check_step_complete(WizardStep::CampaignDetails).is_ok()
    }

    /// Enters `Submitting` and returns the brief to send.
    ///
    /// # Errors
    ///
    /// - `Busy` while a submission or brand resolution is in flight
    /// - `ValidationFailure` outside campaign details or with missing fields
    pub fn begin_submission(&mut self, today: NaiveDate) -> Result<BriefDraft, WizardError> {
        if self.submission_state == SubmissionState::Submitting {
            return Err(WizardError::busy("the brief is already being submitted"));
        }
        self.ensure_not_resolving()?;
        if self.step != WizardStep::CampaignDetails {
            return Err(ValidationError::invalid_format(
                "step",
                format!("briefs are submitted from campaign details, not {:?}", self.step),
            )
            .into());
        }
        self.check_step_complete(WizardStep::CampaignDetails)?;

        self.step = self.step.transition_to(WizardStep::Submitting)?;
        self.submission_state = self.submission_state.transition_to(SubmissionState::Submitting)?;
        self.failure_reason = None;
        Ok(BriefDraft::assemble(self, today))
    }

    /// Settles the in-flight submission.
    ///
    /// Returns `false` when no submission was in flight.
    pub fn complete_submission(&mut self, result: Result<String, WizardError>) -> bool {
        if self.submission_state != SubmissionState::Submitting {
            return false;
        }
        match result {
            Ok(document_url) => {
                self.step = WizardStep::Confirmed;
                self.submission_state = SubmissionState::Succeeded;
                let logo = self.logo_reference.trim();
                self.confirmation = Some(Confirmation {
                    document_url,
                    logo_url: (!logo.is_empty()).then(|| logo.to_string()),
                });
                self.error = None;
            }
            Err(err) => {
                self.step = WizardStep::CampaignDetails;
                self.submission_state = SubmissionState::Failed;
                let message = FailedAction::Submission.user_message(&err);
                self.failure_reason = Some(message.clone());
                self.error = Some(message);
            }
        }
        true
    }

    fn record_failure(&mut self, action: FailedAction, error: &WizardError) {
        if !error.is_local() {
            self.error = Some(action.user_message(error));
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}
