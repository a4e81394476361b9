use crate::{CellValue, SelectionMode};

/// Applies the configured selection policy to one row of cells.
///
/// The engine never touches `Text` cells; a selection aimed at an input
/// column is a no-op. All operations report whether they changed anything so
/// the controller can fire its change notification exactly once per actual
/// mutation.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    mode: SelectionMode,
}

impl Selection {
    /// Create a selection engine for the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode }
    }

    /// The configured mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Apply a user selection of `column` to `row`. Returns whether any cell
    /// changed.
    ///
    /// In single mode this clears any other mark in the row and sets the new
    /// one in one step; callers never observe two marks at once. Re-selecting
    /// the already-marked column is a no-op, not a toggle. In multi mode the
    /// same action toggles the mark.
    pub fn select(&self, row: &mut [CellValue], column: usize) -> bool {
        let Some(CellValue::Flag(current)) = row.get(column).cloned() else {
            return false;
        };

        match self.mode {
            SelectionMode::Single => {
                if current {
                    return false;
                }
                for cell in row.iter_mut() {
                    if let CellValue::Flag(flag) = cell {
                        *flag = false;
                    }
                }
                row[column] = CellValue::Flag(true);
                true
            }
            SelectionMode::Multi => {
                row[column] = CellValue::Flag(!current);
                true
            }
        }
    }

    /// Clear the mark at `column` only. Returns whether the cell changed.
    pub fn deselect(&self, row: &mut [CellValue], column: usize) -> bool {
        match row.get_mut(column) {
            Some(CellValue::Flag(flag)) if *flag => {
                *flag = false;
                true
            }
            _ => false,
        }
    }

    /// The marked column indices of a row, ascending.
    pub fn selected(&self, row: &[CellValue]) -> Vec<usize> {
        row.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_selected())
            .map(|(column, _)| column)
            .collect()
    }
}
