//! Per-session wizard controller.
//!
//! Each session is owned by one spawned task that processes messages one at
//! a time. User intents arrive through a [`WizardHandle`]; collaborator calls
//! run as separate tasks and post their results back into the same queue, so
//! the session is only ever mutated from the controller loop.
//!
//! ```text
//! handle ──Intent──▶ ┌────────────┐ ──spawn──▶ debounce timer / search
//!                    │ controller │ ──spawn──▶ brand resolution
//! watch ◀──view───── └────────────┘ ──spawn──▶ brief submission
//!                          ▲                         │
//!                          └──── completion message ─┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::Instrument;

use crate::domain::foundation::{Timestamp, WizardId};
use crate::domain::wizard::{
    BrandProfile, CampaignGoal, FeedUpdate, QueryOutcome, ResolutionOutcome, ResolveTicket,
    SearchTicket, Suggestion, WizardError, WizardSession, WizardStep, WizardView, DEBOUNCE_WINDOW,
    MIN_QUERY_LENGTH,
};
use crate::ports::{BrandLookup, DocumentService};

use super::handlers::wizard::{
    FetchSuggestionsHandler, FetchSuggestionsQuery, ResolveBrandCommand, ResolveBrandHandler,
    SubmitBriefCommand, SubmitBriefHandler,
};

const MAILBOX_CAPACITY: usize = 32;

const IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Tunables and deployment values shared by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub debounce_window: Duration,
    pub min_query_length: usize,
    /// Sessions untouched for this long are evicted by the registry
    pub idle_timeout: Duration,
    pub template_id: String,
    pub folder_name: String,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            debounce_window: DEBOUNCE_WINDOW,
            min_query_length: MIN_QUERY_LENGTH,
            idle_timeout: IDLE_TIMEOUT,
            template_id: String::new(),
            folder_name: "Campaign Briefs".to_string(),
        }
    }
}

/// Handlers for the collaborator calls a session makes.
#[derive(Clone)]
pub struct WizardServices {
    suggestions: Arc<FetchSuggestionsHandler>,
    resolver: Arc<ResolveBrandHandler>,
    submitter: Arc<SubmitBriefHandler>,
}

impl WizardServices {
    pub fn new(lookup: Arc<dyn BrandLookup>, documents: Arc<dyn DocumentService>) -> Self {
        Self {
            suggestions: Arc::new(FetchSuggestionsHandler::new(Arc::clone(&lookup))),
            resolver: Arc::new(ResolveBrandHandler::new(lookup)),
            submitter: Arc::new(SubmitBriefHandler::new(documents)),
        }
    }
}

/// A user action on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardIntent {
    SetName { value: String },
    SetEmail { value: String },
    InputWebsite { value: String },
    SelectSuggestion { domain: String },
    DismissSuggestions,
    FetchBrandDetails,
    SetCompanyName { value: String },
    SetCompanyDescription { value: String },
    SetLogoReference { value: String },
    SetGoal { goal: CampaignGoal, selected: bool },
    SetOtherGoalLabel { value: String },
    SetDeliverables { value: String },
    SetCreatorProfiles { value: String },
    SetTargetAudience { value: String },
    SetKeyCallouts { value: String },
    Advance,
    Back,
    Submit,
    DismissError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The session refused the intent.
    #[error(transparent)]
    Rejected(#[from] WizardError),

    /// The controller task has stopped.
    #[error("wizard session has ended")]
    Closed,
}

enum Message {
    Intent {
        intent: WizardIntent,
        reply: oneshot::Sender<Result<WizardView, WizardError>>,
    },
    QuietWindowElapsed {
        generation: u64,
    },
    SuggestionsLoaded {
        seq: u64,
        result: Result<Vec<Suggestion>, WizardError>,
    },
    BrandResolved {
        seq: u64,
        result: Result<BrandProfile, WizardError>,
    },
    BriefSubmitted {
        result: Result<String, WizardError>,
    },
    Shutdown,
}

/// Cloneable handle to a running session.
#[derive(Clone)]
pub struct WizardHandle {
    id: WizardId,
    sender: mpsc::Sender<Message>,
    view: watch::Receiver<WizardView>,
}

impl WizardHandle {
    pub fn id(&self) -> &WizardId {
        &self.id
    }

    /// Applies an intent and returns the view right after it was handled.
    ///
    /// Intents that start a collaborator call return as soon as the call is
    /// in flight; its outcome shows up in later views.
    pub async fn apply(&self, intent: WizardIntent) -> Result<WizardView, ControllerError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Message::Intent { intent, reply })
            .await
            .map_err(|_| ControllerError::Closed)?;
        let view = response.await.map_err(|_| ControllerError::Closed)??;
        Ok(view)
    }

    /// Latest published view.
    pub fn view(&self) -> WizardView {
        self.view.borrow().clone()
    }

    /// Receiver notified after every processed message.
    pub fn subscribe(&self) -> watch::Receiver<WizardView> {
        self.view.clone()
    }

    /// Stops the controller. In-flight calls finish but their results are dropped.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(Message::Shutdown).await;
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Owner of one [`WizardSession`].
pub struct WizardController {
    session: WizardSession,
    services: WizardServices,
    settings: Arc<WizardSettings>,
    mailbox: mpsc::WeakSender<Message>,
    view: watch::Sender<WizardView>,
}

impl WizardController {
    /// Starts a controller task for a fresh session.
    pub fn spawn(id: WizardId, services: WizardServices, settings: Arc<WizardSettings>) -> WizardHandle {
        let session = WizardSession::with_min_query_length(id, settings.min_query_length);
        let (sender, receiver) = mpsc::channel(MAILBOX_CAPACITY);
        let (view_tx, view_rx) = watch::channel(WizardView::from(&session));

        let controller = WizardController {
            session,
            services,
            settings,
            mailbox: sender.downgrade(),
            view: view_tx,
        };
        let span = tracing::info_span!("wizard", wizard_id = %id);
        tokio::spawn(controller.run(receiver).instrument(span));

        WizardHandle {
            id,
            sender,
            view: view_rx,
        }
    }

    async fn run(mut self, mut receiver: mpsc::Receiver<Message>) {
        tracing::debug!("wizard controller started");
        while let Some(message) = receiver.recv().await {
            match message {
                Message::Intent { intent, reply } => {
                    let result = self.handle_intent(intent);
                    let view = self.publish();
                    let _ = reply.send(result.map(|()| view));
                }
                Message::QuietWindowElapsed { generation } => {
                    if let Some(ticket) = self.session.quiet_window_elapsed(generation) {
                        self.spawn_search(ticket);
                    }
                }
                Message::SuggestionsLoaded { seq, result } => {
                    match self.session.apply_suggestions(seq, result) {
                        FeedUpdate::Applied { count } => tracing::debug!(seq, count, "suggestions applied"),
                        FeedUpdate::Failed => tracing::debug!(seq, "suggestions cleared after failure"),
                        FeedUpdate::Stale => tracing::debug!(seq, "stale suggestions discarded"),
                    }
                    self.publish();
                }
                Message::BrandResolved { seq, result } => {
                    if self.session.complete_resolution(seq, result) == ResolutionOutcome::Stale {
                        tracing::debug!(seq, "stale brand resolution discarded");
                    }
                    self.publish();
                }
                Message::BriefSubmitted { result } => {
                    self.session.complete_submission(result);
                    self.publish();
                }
                Message::Shutdown => break,
            }
        }
        tracing::debug!("wizard controller stopped");
    }

    fn handle_intent(&mut self, intent: WizardIntent) -> Result<(), WizardError> {
        match intent {
            WizardIntent::SetName { value } => self.session.set_name(value)?,
            WizardIntent::SetEmail { value } => self.session.set_email(value)?,
            WizardIntent::InputWebsite { value } => {
                if let QueryOutcome::Scheduled { generation } = self.session.input_website(value)? {
                    self.arm_quiet_window(generation);
                }
            }
            WizardIntent::SelectSuggestion { domain } => {
                let ticket = self.session.select_suggestion(&domain)?;
                self.spawn_resolution(ticket);
            }
            WizardIntent::DismissSuggestions => self.session.dismiss_suggestions(),
            WizardIntent::FetchBrandDetails => {
                let ticket = self.session.begin_resolution()?;
                self.spawn_resolution(ticket);
            }
            WizardIntent::SetCompanyName { value } => self.session.set_company_name(value)?,
            WizardIntent::SetCompanyDescription { value } => self.session.set_company_description(value)?,
            WizardIntent::SetLogoReference { value } => self.session.set_logo_reference(value)?,
            WizardIntent::SetGoal { goal, selected } => self.session.set_goal(goal, selected)?,
            WizardIntent::SetOtherGoalLabel { value } => self.session.set_other_goal_label(value)?,
            WizardIntent::SetDeliverables { value } => self.session.set_deliverables(value)?,
            WizardIntent::SetCreatorProfiles { value } => self.session.set_creator_profiles(value)?,
            WizardIntent::SetTargetAudience { value } => self.session.set_target_audience(value)?,
            WizardIntent::SetKeyCallouts { value } => self.session.set_key_callouts(value)?,
            WizardIntent::Advance if self.session.step() == WizardStep::CampaignDetails => {
                self.submit()?;
            }
            WizardIntent::Advance => {
                let step = self.session.advance()?;
                tracing::debug!(?step, "advanced");
            }
            WizardIntent::Back => {
                let step = self.session.go_back()?;
                tracing::debug!(?step, "went back");
            }
            WizardIntent::Submit => self.submit()?,
            WizardIntent::DismissError => self.session.dismiss_error(),
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), WizardError> {
        let draft = self.session.begin_submission(Timestamp::now().date())?;
        let command = SubmitBriefCommand {
            draft,
            template_id: self.settings.template_id.clone(),
            folder_name: self.settings.folder_name.clone(),
        };
        let submitter = Arc::clone(&self.services.submitter);
        tracing::info!(title = %command.draft.title, "submitting brief");

        self.post_when_done(async move {
            let result = submitter.handle(command).await;
            Message::BriefSubmitted { result }
        });
        Ok(())
    }

    fn arm_quiet_window(&self, generation: u64) {
        let window = self.settings.debounce_window;
        self.post_when_done(async move {
            tokio::time::sleep(window).await;
            Message::QuietWindowElapsed { generation }
        });
    }

    fn spawn_search(&self, ticket: SearchTicket) {
        let handler = Arc::clone(&self.services.suggestions);
        tracing::debug!(seq = ticket.seq, query = %ticket.query, "issuing suggestion search");
        self.post_when_done(async move {
            let result = handler
                .handle(FetchSuggestionsQuery {
                    query: ticket.query,
                })
                .await;
            Message::SuggestionsLoaded {
                seq: ticket.seq,
                result,
            }
        });
    }

    fn spawn_resolution(&self, ticket: ResolveTicket) {
        let handler = Arc::clone(&self.services.resolver);
        tracing::debug!(seq = ticket.seq, domain = %ticket.domain, "resolving brand");
        self.post_when_done(async move {
            let result = handler
                .handle(ResolveBrandCommand {
                    domain: ticket.domain,
                })
                .await;
            Message::BrandResolved {
                seq: ticket.seq,
                result,
            }
        });
    }

    /// Runs `work` on its own task and queues the message it yields. The
    /// message is dropped if the controller has stopped by then.
    fn post_when_done<F>(&self, work: F)
    where
        F: std::future::Future<Output = Message> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        tokio::spawn(
            async move {
                let message = work.await;
                if let Some(sender) = mailbox.upgrade() {
                    let _ = sender.send(message).await;
                }
            }
            .in_current_span(),
        );
    }

    fn publish(&self) -> WizardView {
        let view = WizardView::from(&self.session);
        self.view.send_replace(view.clone());
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::brandfetch::{brand_details, search_hit, MockBrandLookup};
    use crate::adapters::documents::MockDocumentService;
    use crate::domain::wizard::{SubmissionState, BRAND_DETAILS_FAILED_MESSAGE};
    use crate::ports::{BrandLookupError, DocumentServiceError};

    fn settings() -> Arc<WizardSettings> {
        Arc::new(WizardSettings {
            template_id: "tpl-1".to_string(),
            folder_name: "Briefs".to_string(),
            ..WizardSettings::default()
        })
    }

    fn spawn(lookup: &MockBrandLookup, documents: &MockDocumentService) -> WizardHandle {
        let services = WizardServices::new(Arc::new(lookup.clone()), Arc::new(documents.clone()));
        WizardController::spawn(WizardId::new(), services, settings())
    }

    fn acme_lookup() -> MockBrandLookup {
        MockBrandLookup::new()
            .with_search("acme", vec![search_hit("acme.com", "Acme")])
            .with_details("acme.com", brand_details("Acme", "Anvils", "https://cdn/acme.png"))
    }

    async fn settle(handle: &WizardHandle, predicate: impl FnMut(&WizardView) -> bool) -> WizardView {
        let mut views = handle.subscribe();
        let view = views.wait_for(predicate).await.unwrap();
        view.clone()
    }

    async fn set(handle: &WizardHandle, intent: WizardIntent) -> WizardView {
        handle.apply(intent).await.unwrap()
    }

    fn text(value: &str) -> String {
        value.to_string()
    }

    async fn through_brand_review(handle: &WizardHandle) {
        set(handle, WizardIntent::SetName { value: text("Ana") }).await;
        set(handle, WizardIntent::SetEmail { value: text("ana@example.com") }).await;
        set(handle, WizardIntent::Advance).await;
        set(handle, WizardIntent::InputWebsite { value: text("acme.com") }).await;
        set(handle, WizardIntent::FetchBrandDetails).await;
        settle(handle, |v| v.resolved_domain.is_some()).await;
        set(handle, WizardIntent::Advance).await;
        set(handle, WizardIntent::Advance).await;
    }

    async fn fill_campaign_details(handle: &WizardHandle) {
        set(handle, WizardIntent::SetGoal { goal: CampaignGoal::IncreaseSales, selected: true }).await;
        set(handle, WizardIntent::SetDeliverables { value: text("3 reels") }).await;
        set(handle, WizardIntent::SetCreatorProfiles { value: text("fitness") }).await;
        set(handle, WizardIntent::SetTargetAudience { value: text("18-34") }).await;
    }

    // ════════════════════════════════════════════════════════════════════════
    // Suggestions
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test(start_paused = true)]
    async fn burst_of_keystrokes_issues_one_search() {
        let lookup = acme_lookup();
        let handle = spawn(&lookup, &MockDocumentService::new());

        for value in ["a", "ac", "acm", "acme"] {
            set(&handle, WizardIntent::InputWebsite { value: text(value) }).await;
        }
        let view = settle(&handle, |v| v.suggestions_visible).await;

        assert_eq!(lookup.search_calls(), vec!["acme"]);
        assert_eq!(view.suggestions[0].domain, "acme.com");
    }

    #[tokio::test(start_paused = true)]
    async fn short_input_never_searches() {
        let lookup = acme_lookup();
        let handle = spawn(&lookup, &MockDocumentService::new());

        set(&handle, WizardIntent::InputWebsite { value: text("ac") }).await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(lookup.search_calls().is_empty());
        assert!(handle.view().suggestions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_for_older_query_is_ignored() {
        let lookup = MockBrandLookup::new()
            .with_search("acme", vec![search_hit("acme.com", "Acme")])
            .with_search("acme co", vec![search_hit("acmeco.com", "Acme Co")])
            .with_delay("acme", Duration::from_secs(1));
        let handle = spawn(&lookup, &MockDocumentService::new());

        set(&handle, WizardIntent::InputWebsite { value: text("acme") }).await;
        tokio::time::sleep(Duration::from_millis(350)).await;
        set(&handle, WizardIntent::InputWebsite { value: text("acme co") }).await;
        tokio::time::sleep(Duration::from_secs(3)).await;

        let view = handle.view();
        assert_eq!(lookup.search_calls(), vec!["acme", "acme co"]);
        assert_eq!(view.suggestions.len(), 1);
        assert_eq!(view.suggestions[0].domain, "acmeco.com");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_sets_error_and_keeps_input() {
        let lookup = MockBrandLookup::new()
            .with_search_error("acme", BrandLookupError::status(500, "boom"));
        let handle = spawn(&lookup, &MockDocumentService::new());

        set(&handle, WizardIntent::InputWebsite { value: text("acme") }).await;
        let view = settle(&handle, |v| v.error.is_some()).await;

        assert_eq!(view.company_website, "acme");
        assert!(view.suggestions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn selecting_suggestion_resolves_brand() {
        let lookup = acme_lookup();
        let handle = spawn(&lookup, &MockDocumentService::new());
        set(&handle, WizardIntent::SetName { value: text("Ana") }).await;
        set(&handle, WizardIntent::SetEmail { value: text("ana@example.com") }).await;
        set(&handle, WizardIntent::Advance).await;

        set(&handle, WizardIntent::InputWebsite { value: text("acme") }).await;
        settle(&handle, |v| v.suggestions_visible).await;
        let view = set(&handle, WizardIntent::SelectSuggestion { domain: text("acme.com") }).await;
        assert!(view.resolving);
        assert!(!view.suggestions_visible);

        let view = settle(&handle, |v| !v.resolving).await;
        assert_eq!(view.company_website, "acme.com");
        assert_eq!(view.company_name, "Acme");
        assert_eq!(view.logo_reference, "https://cdn/acme.png");
        assert!(view.can_advance);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Brand resolution
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test(start_paused = true)]
    async fn second_resolve_while_in_flight_is_refused() {
        let lookup = acme_lookup().with_delay("acme.com", Duration::from_secs(1));
        let handle = spawn(&lookup, &MockDocumentService::new());
        set(&handle, WizardIntent::SetName { value: text("Ana") }).await;
        set(&handle, WizardIntent::SetEmail { value: text("ana@example.com") }).await;
        set(&handle, WizardIntent::Advance).await;
        set(&handle, WizardIntent::InputWebsite { value: text("acme.com") }).await;

        let view = set(&handle, WizardIntent::FetchBrandDetails).await;
        assert!(view.resolving);
        assert!(!view.can_advance);

        let err = handle.apply(WizardIntent::FetchBrandDetails).await.unwrap_err();
        assert!(matches!(err, ControllerError::Rejected(WizardError::Busy(_))));

        settle(&handle, |v| !v.resolving).await;
        assert_eq!(lookup.detail_calls(), vec!["acme.com"]);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_description_survives_resolution() {
        let lookup = acme_lookup();
        let handle = spawn(&lookup, &MockDocumentService::new());
        through_brand_review(&handle).await;
        set(&handle, WizardIntent::Back).await;
        set(&handle, WizardIntent::SetCompanyDescription { value: text("Hand-written") }).await;
        set(&handle, WizardIntent::Back).await;

        set(&handle, WizardIntent::FetchBrandDetails).await;
        let view = settle(&handle, |v| !v.resolving).await;

        assert_eq!(view.company_description, "Hand-written");
        assert_eq!(view.company_name, "Acme");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_resolution_reports_error() {
        let lookup = MockBrandLookup::new();
        let handle = spawn(&lookup, &MockDocumentService::new());
        set(&handle, WizardIntent::SetName { value: text("Ana") }).await;
        set(&handle, WizardIntent::SetEmail { value: text("ana@example.com") }).await;
        set(&handle, WizardIntent::Advance).await;
        set(&handle, WizardIntent::InputWebsite { value: text("unknown.com") }).await;

        set(&handle, WizardIntent::FetchBrandDetails).await;
        let view = settle(&handle, |v| !v.resolving).await;

        assert_eq!(view.error.as_deref(), Some(BRAND_DETAILS_FAILED_MESSAGE));
        assert!(view.company_name.is_empty());
        assert!(!view.can_advance);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Navigation and submission
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn guard_failure_is_rejected_without_error_slot() {
        let handle = spawn(&MockBrandLookup::new(), &MockDocumentService::new());
        set(&handle, WizardIntent::SetName { value: text("Ana") }).await;

        let err = handle.apply(WizardIntent::Advance).await.unwrap_err();

        assert!(matches!(err, ControllerError::Rejected(WizardError::ValidationFailure(_))));
        let view = handle.view();
        assert_eq!(view.step, WizardStep::Identity);
        assert!(view.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn submission_reaches_confirmation() {
        let lookup = acme_lookup();
        let documents = MockDocumentService::new().with_document_url("https://docs.example/d/42");
        let handle = spawn(&lookup, &documents);
        through_brand_review(&handle).await;
        fill_campaign_details(&handle).await;

        let view = set(&handle, WizardIntent::Submit).await;
        assert_eq!(view.step, WizardStep::Submitting);

        let view = settle(&handle, |v| v.step == WizardStep::Confirmed).await;
        let confirmation = view.confirmation.unwrap();
        assert_eq!(confirmation.document_url, "https://docs.example/d/42");
        assert_eq!(confirmation.logo_url.as_deref(), Some("https://cdn/acme.png"));

        let sent = documents.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].replacements["{{bname}}"], "Acme");
        assert_eq!(sent[0].template_id, "tpl-1");
        assert_eq!(sent[0].user_email, "ana@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn advance_from_campaign_details_submits() {
        let documents = MockDocumentService::new();
        let handle = spawn(&acme_lookup(), &documents);
        through_brand_review(&handle).await;
        fill_campaign_details(&handle).await;

        set(&handle, WizardIntent::Advance).await;
        settle(&handle, |v| v.step == WizardStep::Confirmed).await;

        assert_eq!(documents.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_submitting_is_refused() {
        let documents = MockDocumentService::new().with_delay(Duration::from_secs(1));
        let handle = spawn(&acme_lookup(), &documents);
        through_brand_review(&handle).await;
        fill_campaign_details(&handle).await;

        set(&handle, WizardIntent::Submit).await;
        let err = handle.apply(WizardIntent::Submit).await.unwrap_err();
        assert!(matches!(err, ControllerError::Rejected(WizardError::Busy(_))));

        settle(&handle, |v| v.step == WizardStep::Confirmed).await;
        assert_eq!(documents.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_returns_to_campaign_details() {
        let documents = MockDocumentService::new().with_error(DocumentServiceError::Rejected {
            status: 500,
            message: Some("Template file not found".to_string()),
        });
        let handle = spawn(&acme_lookup(), &documents);
        through_brand_review(&handle).await;
        fill_campaign_details(&handle).await;

        set(&handle, WizardIntent::Submit).await;
        let view = settle(&handle, |v| v.submission_state == SubmissionState::Failed).await;

        assert_eq!(view.step, WizardStep::CampaignDetails);
        assert_eq!(view.error.as_deref(), Some("Template file not found"));
        assert_eq!(view.failure_reason.as_deref(), Some("Template file not found"));
        assert_eq!(view.deliverables, "3 reels");
        assert!(view.can_submit);
    }

    #[tokio::test]
    async fn shutdown_closes_handle() {
        let handle = spawn(&MockBrandLookup::new(), &MockDocumentService::new());
        handle.shutdown().await;

        let err = handle.apply(WizardIntent::DismissError).await.unwrap_err();
        assert_eq!(err, ControllerError::Closed);
    }

    #[test]
    fn intents_use_tagged_json() {
        let intent: WizardIntent =
            serde_json::from_str(r#"{"type":"set_goal","goal":"other","selected":true}"#).unwrap();
        assert_eq!(
            intent,
            WizardIntent::SetGoal {
                goal: CampaignGoal::Other,
                selected: true
            }
        );
        let intent: WizardIntent = serde_json::from_str(r#"{"type":"advance"}"#).unwrap();
        assert_eq!(intent, WizardIntent::Advance);
    }
}
