use crate::concepts::ConceptList;
use crate::debounce::{Debouncer, TRAVERSE_QUIET_PERIOD};
use crate::request::{build_request, MediaUrl, TraverseRequest, TraverseResult, ValidationError};
use operator::OperatorHandle;
use std::time::Instant;

/// Inline message shown when "set initial image" is pressed with nothing
/// selected in the host's sample browser.
pub const SELECTION_ERROR: &str = "You must select at least one sample in Samples tab";

/// Executes a traversal request remotely and reports through a handle.
pub trait TraversalOperator {
    fn execute(&self, request: &TraverseRequest) -> OperatorHandle<TraverseResult>;
}

/// Resolves a sample id to a displayable media URL.
pub trait MediaLookup {
    fn sample_url(&self, sample_id: &str) -> OperatorHandle<MediaUrl>;
}

/// Lifecycle of one submission. `Validating`, `Rejected`, `Dispatching`,
/// `Succeeded` and `Failed` are passed through within a single `submit` or
/// `poll` call; between frames the phase is `Idle` or `Executing`. There is
/// no cancelled phase: the debouncer replaces timers instead of stacking
/// dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Rejected,
    Dispatching,
    Executing,
    Succeeded,
    Failed,
}

/// Local interaction state behind the traversal panel.
///
/// Owns the concept list, the starting sample, the selected similarity run
/// and the global scale; validates and assembles requests; dispatches them to
/// the host's traversal operator and polls the resulting handles. Nothing in
/// here blocks: completions are observed one frame later through
/// [`TraversalController::poll`].
pub struct TraversalController {
    concepts: ConceptList,
    scale: f64,
    starting_sample: Option<String>,
    similarity_run: Option<String>,
    phase: SubmissionPhase,
    error: Option<String>,
    has_triggered: bool,
    selection_error: Option<String>,
    debounce: Debouncer,
    traverse_handle: Option<OperatorHandle<TraverseResult>>,
    preview_handle: Option<OperatorHandle<MediaUrl>>,
}

impl TraversalController {
    pub fn new(default_run: Option<String>) -> Self {
        Self {
            concepts: ConceptList::new(),
            scale: 0.0,
            starting_sample: None,
            similarity_run: default_run,
            phase: SubmissionPhase::Idle,
            error: None,
            has_triggered: false,
            selection_error: None,
            debounce: Debouncer::new(TRAVERSE_QUIET_PERIOD),
            traverse_handle: None,
            preview_handle: None,
        }
    }

    pub fn concepts(&self) -> &ConceptList {
        &self.concepts
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn starting_sample(&self) -> Option<&str> {
        self.starting_sample.as_deref()
    }

    pub fn similarity_run(&self) -> Option<&str> {
        self.similarity_run.as_deref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Most recent validation or executor error, for the banner.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection_error(&self) -> Option<&str> {
        self.selection_error.as_deref()
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    pub fn is_executing(&self) -> bool {
        self.traverse_handle
            .as_ref()
            .map(OperatorHandle::is_executing)
            .unwrap_or(false)
    }

    pub fn result(&self) -> Option<&TraverseResult> {
        self.traverse_handle.as_ref().and_then(OperatorHandle::result)
    }

    pub fn preview_loading(&self) -> bool {
        self.preview_handle
            .as_ref()
            .map(OperatorHandle::is_executing)
            .unwrap_or(false)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_handle
            .as_ref()
            .and_then(OperatorHandle::result)
            .map(|media| media.url.as_str())
    }

    pub fn preview_error(&self) -> Option<&str> {
        self.preview_handle.as_ref().and_then(OperatorHandle::error)
    }

    pub fn set_weight(&mut self, index: usize, value: f64) {
        self.concepts.set_weight(index, value);
        self.touch();
    }

    pub fn set_text(&mut self, index: usize, raw: &str) {
        self.concepts.set_text(index, raw);
        self.touch();
    }

    pub fn set_scale(&mut self, value: f64) {
        self.scale = value.clamp(0.0, 100.0);
        self.touch();
    }

    /// Caller is trusted to pass a key from the qualifying run set.
    pub fn set_similarity_run(&mut self, key: &str) {
        self.similarity_run = Some(key.to_string());
        self.touch();
    }

    /// The update action only makes sense once a newer sample was selected.
    pub fn can_update_initial_image(&self, latest_selected: Option<&str>) -> bool {
        match latest_selected {
            Some(id) => self.starting_sample.as_deref() != Some(id),
            None => false,
        }
    }

    /// Records the most recently selected sample as the traversal origin and
    /// starts fetching its preview. With nothing selected this only surfaces
    /// the inline selection message.
    pub fn set_initial_image(&mut self, latest_selected: Option<&str>, media: &dyn MediaLookup) {
        let Some(id) = latest_selected else {
            self.selection_error = Some(SELECTION_ERROR.to_string());
            return;
        };
        self.selection_error = None;
        self.starting_sample = Some(id.to_string());
        self.preview_handle = Some(media.sample_url(id));
        self.touch();
    }

    /// Validates the aggregate state and, if it holds, hands one request to
    /// the operator. On rejection the message lands in [`Self::error`] and
    /// nothing is dispatched.
    pub fn submit(&mut self, op: &dyn TraversalOperator) -> Result<(), ValidationError> {
        self.transition(SubmissionPhase::Validating);
        let request = build_request(
            self.starting_sample.as_deref(),
            self.concepts.rows(),
            self.scale,
            self.similarity_run.as_deref().unwrap_or_default(),
        );
        match request {
            Err(err) => {
                self.transition(SubmissionPhase::Rejected);
                self.error = Some(err.to_string());
                self.transition(SubmissionPhase::Idle);
                Err(err)
            }
            Ok(request) => {
                self.error = None;
                self.has_triggered = true;
                // The dispatch carries the latest state; a pending quiet
                // timer would only repeat it.
                self.debounce.cancel();
                self.transition(SubmissionPhase::Dispatching);
                log::info!(
                    "dispatching traversal: sample={} index={} concepts={}",
                    request.sample,
                    request.index,
                    request.concepts.len()
                );
                // Overlap is allowed: a still-running call keeps its worker,
                // but only the newest handle is observed from here on.
                self.traverse_handle = Some(op.execute(&request));
                self.transition(SubmissionPhase::Executing);
                Ok(())
            }
        }
    }

    /// Fires a pending debounced re-submission once its quiet period has
    /// passed. Call once per frame.
    pub fn tick(&mut self, op: &dyn TraversalOperator) {
        self.tick_at(Instant::now(), op);
    }

    pub fn tick_at(&mut self, now: Instant, op: &dyn TraversalOperator) {
        if self.debounce.ready_at(now) {
            let _ = self.submit(op);
        }
    }

    /// Drains completion channels of the in-flight operator calls. Executor
    /// failures land in the same error slot as validation messages.
    pub fn poll(&mut self) {
        if let Some(handle) = &mut self.preview_handle {
            handle.poll();
        }
        if self.phase != SubmissionPhase::Executing {
            return;
        }
        let Some(handle) = &mut self.traverse_handle else {
            return;
        };
        handle.poll();
        if handle.is_executing() {
            return;
        }
        match handle.error() {
            Some(message) => {
                let message = message.to_string();
                log::warn!("traversal failed: {message}");
                self.transition(SubmissionPhase::Failed);
                self.error = Some(message);
            }
            None => {
                self.transition(SubmissionPhase::Succeeded);
                self.error = None;
            }
        }
        self.transition(SubmissionPhase::Idle);
    }

    /// Once a traversal has been triggered, every edit re-arms the quiet
    /// timer; earlier pending timers are replaced, not queued.
    fn touch(&mut self) {
        if self.has_triggered {
            self.debounce.arm();
        }
    }

    fn transition(&mut self, to: SubmissionPhase) {
        log::debug!("submission phase {:?} -> {to:?}", self.phase);
        self.phase = to;
    }
}
