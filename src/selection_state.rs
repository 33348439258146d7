use std::collections::BTreeSet;

use crate::table_state::Row;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectAllStatus {
    None,
    Partial,
    All,
}

/// Selected row ids, global to the dataset rather than to the visible page.
/// Every transition produces a fresh value so renderers can rely on
/// equality-based change detection. Ids whose row has left the dataset stay
/// in the set but are inert: they are never visible, so they never surface
/// as selected and never count toward `status`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionState {
    ids: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn toggled(&self, id: &str, selected: bool) -> Self {
        let mut ids = self.ids.clone();
        if selected {
            ids.insert(id.to_string());
        } else {
            ids.remove(id);
        }
        Self { ids }
    }

    /// Select-all scoped to the rows currently on screen: union when
    /// selecting, difference when clearing. Rows on other pages keep their
    /// state either way.
    pub fn with_visible(&self, visible: &[Row], selected: bool) -> Self {
        let mut ids = self.ids.clone();
        for row in visible {
            if selected {
                ids.insert(row.id.clone());
            } else {
                ids.remove(&row.id);
            }
        }
        Self { ids }
    }

    pub fn status(&self, visible: &[Row]) -> SelectAllStatus {
        if visible.is_empty() {
            return SelectAllStatus::None;
        }
        let selected = visible
            .iter()
            .filter(|row| self.ids.contains(&row.id))
            .count();
        if selected == 0 {
            SelectAllStatus::None
        } else if selected == visible.len() {
            SelectAllStatus::All
        } else {
            SelectAllStatus::Partial
        }
    }
}
