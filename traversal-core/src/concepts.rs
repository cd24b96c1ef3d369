use serde::{Deserialize, Serialize};

/// Upper bound on concept rows, including the trailing blank one.
pub const MAX_CONCEPTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRow {
    pub text: String,
    pub weight: f64,
}

impl ConceptRow {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            weight: 0.0,
        }
    }

    pub fn new(text: &str, weight: f64) -> Self {
        Self {
            text: text.to_string(),
            weight,
        }
    }
}

/// Ordered list of concept rows behind the panel's text/weight controls.
///
/// The list always carries exactly one trailing blank row while there is room
/// to grow: editing the last row's text opens a fresh row, clearing trailing
/// rows collapses them back down to a single blank. There is no explicit
/// add-row operation.
#[derive(Debug, Clone)]
pub struct ConceptList {
    rows: Vec<ConceptRow>,
}

impl Default for ConceptList {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptList {
    pub fn new() -> Self {
        Self {
            rows: vec![ConceptRow::empty()],
        }
    }

    pub fn rows(&self) -> &[ConceptRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the weight of one row. Out-of-bounds indices are ignored;
    /// text and list shape never change here.
    pub fn set_weight(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.weight = value.clamp(0.0, 1.0);
        }
    }

    /// Trims and assigns one row's text, then re-normalizes the list shape.
    /// Safe to call on every keystroke; untouched rows keep their position.
    pub fn set_text(&mut self, index: usize, raw: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.text = raw.trim().to_string();
        normalize(&mut self.rows);
    }
}

/// Restores the list-shape invariants after a text edit:
/// collapse runs of trailing blank rows to one, then grow by a single blank
/// row once every row has text and the cap has not been reached. Idempotent.
pub fn normalize(rows: &mut Vec<ConceptRow>) {
    while rows.len() > 1
        && rows[rows.len() - 1].text.is_empty()
        && rows[rows.len() - 2].text.is_empty()
    {
        rows.pop();
    }

    let all_have_text = rows.iter().all(|row| !row.text.is_empty());
    if all_have_text && rows.len() < MAX_CONCEPTS {
        rows.push(ConceptRow::empty());
    }
}
