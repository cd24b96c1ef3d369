/// Insertion-ordered set of selected sample ids.
///
/// Owned by the host; the panel only reads [`SelectionState::latest`].
/// Re-selecting an already selected sample does not change its position.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    order: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: &str) {
        if !self.is_selected(id) {
            self.order.push(id.to_string());
        }
    }

    pub fn deselect(&mut self, id: &str) {
        self.order.retain(|selected| selected != id);
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.deselect(id);
        } else {
            self.select(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.order.iter().any(|selected| selected == id)
    }

    /// The most recently selected sample id, if any.
    pub fn latest(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}
