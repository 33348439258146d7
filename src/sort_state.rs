use crate::table_state::Column;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnSort {
    pub key: String,
    pub direction: SortDirection,
}

/// Sort intent. `column: None` means unsorted; a sorted column always
/// carries a direction, so the two can never disagree. The dataset itself
/// is never reordered here: comparators are a caller concern, the
/// coordinator only tracks which arrow to draw and asks the caller for
/// pre-sorted rows.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortState {
    pub column: Option<ColumnSort>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn sorted_by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(ColumnSort {
                key: key.into(),
                direction,
            }),
        }
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.column
            .as_ref()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction)
    }

    /// Header-click transition. `None` means the click referenced an
    /// unknown or non-sortable column and the state must stay put.
    /// Clicking the already-sorted column flips the direction and keeps
    /// flipping on further clicks; clicking a different sortable column
    /// restarts at ascending.
    pub fn after_click(&self, columns: &[Column], key: &str) -> Option<Self> {
        let column = columns.iter().find(|column| column.key == key)?;
        if !column.sortable {
            return None;
        }

        let direction = match self.direction_for(key) {
            Some(current) => current.toggled(),
            None => SortDirection::Ascending,
        };
        Some(Self::sorted_by(key, direction))
    }
}
