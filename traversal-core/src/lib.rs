//! Core state for the concept traversal panel: the growable concept list,
//! request assembly and validation, the debounced auto-resubmission gate and
//! the controller that ties them to the host's operator executors.

pub mod concepts;
pub mod controller;
pub mod debounce;
pub mod request;

pub use concepts::{normalize, ConceptList, ConceptRow, MAX_CONCEPTS};
pub use controller::{
    MediaLookup, SubmissionPhase, TraversalController, TraversalOperator, SELECTION_ERROR,
};
pub use debounce::{Debouncer, TRAVERSE_QUIET_PERIOD};
pub use request::{
    build_request, concept_entries, ConceptEntry, MediaUrl, TraverseMatch, TraverseRequest,
    TraverseResult, ValidationError,
};
