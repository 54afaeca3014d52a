// src/accordion.rs

/// Single-select accordion: zero or one section expanded, never more.
/// Keyed by `SectionId::key`, so numeric and string ids share one space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    selected: Option<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is open, otherwise open it (closing whatever was open).
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.selected = None;
        } else {
            self.selected = Some(s!(id));
        }
    }

    #[inline]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    #[inline]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}
