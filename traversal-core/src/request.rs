use crate::concepts::ConceptRow;
use serde::{Deserialize, Serialize};

/// One weighted concept as the traversal operator expects it on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEntry {
    pub concept: String,
    pub strength: f64,
}

/// Payload handed to the traversal operator. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseRequest {
    pub sample: String,
    pub concepts: Vec<ConceptEntry>,
    pub text_scale: f64,
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseMatch {
    pub sample_id: String,
    pub score: f64,
}

/// Ranked neighbors returned by the traversal operator, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseResult {
    pub matches: Vec<TraverseMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUrl {
    pub url: String,
}

/// Validation failures surfaced in the panel's error banner. The messages
/// are the user-visible text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("You must set the initial image")]
    MissingInitialImage,
    #[error("You must have at least one concept with non-zero weight")]
    NoWeightedConcept,
}

/// Rows with text, mapped to their wire form. Blank rows never leave the
/// panel.
pub fn concept_entries(rows: &[ConceptRow]) -> Vec<ConceptEntry> {
    rows.iter()
        .filter(|row| !row.text.is_empty())
        .map(|row| ConceptEntry {
            concept: row.text.clone(),
            strength: row.weight,
        })
        .collect()
}

/// Assembles a request from the panel's aggregate state.
///
/// Checked in order: a starting sample must be set, then at least one
/// non-blank concept must carry positive weight.
pub fn build_request(
    starting_sample: Option<&str>,
    rows: &[ConceptRow],
    scale: f64,
    index: &str,
) -> Result<TraverseRequest, ValidationError> {
    let sample = match starting_sample {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ValidationError::MissingInitialImage),
    };
    let concepts = concept_entries(rows);
    if !concepts.iter().any(|entry| entry.strength > 0.0) {
        return Err(ValidationError::NoWeightedConcept);
    }
    Ok(TraverseRequest {
        sample: sample.to_string(),
        concepts,
        text_scale: scale,
        index: index.to_string(),
    })
}
