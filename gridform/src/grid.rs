use tracing::warn;

use crate::{
    CellValue, ColumnHeader, ColumnKind, ConfigError, GridConfig, GroupIndex, Selection, Snapshot,
    ValidationReport, Validator,
};

/// A configured grid: cell state, selection policy, validation, and the
/// serialize/deserialize surface the owning form section talks to.
///
/// A grid is built exactly once from a [`GridConfig`] and owns its state
/// exclusively. All operations are synchronous; `configure` and [`clear`]
/// return only after every cell exists, so a render they trigger always sees
/// the complete structure.
///
/// [`clear`]: Grid::clear
pub struct Grid {
    config: GridConfig,
    cells: Vec<Vec<CellValue>>,
    groups: GroupIndex,
    selection: Selection,
    validator: Validator,
    last_report: Option<ValidationReport>,
    on_change: Option<Box<dyn FnMut(&Snapshot)>>,
    redraw: bool,
}

impl Grid {
    /// Validate the configuration and build every cell.
    ///
    /// Structural problems (broken row partition, per-column list length
    /// mismatches, empty axes) are reported here, synchronously; they are
    /// never deferred to use time.
    pub fn configure(config: GridConfig) -> Result<Self, ConfigError> {
        if config.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        if config.row_labels.is_empty() {
            return Err(ConfigError::NoRows);
        }
        if config.column_kinds.len() != config.columns.len() {
            return Err(ConfigError::ColumnKindMismatch {
                expected: config.columns.len(),
                actual: config.column_kinds.len(),
            });
        }
        if !config.column_widths.is_empty() && config.column_widths.len() != config.columns.len() {
            return Err(ConfigError::ColumnWidthMismatch {
                expected: config.columns.len(),
                actual: config.column_widths.len(),
            });
        }

        let groups = GroupIndex::build(&config.groups, &config.row_labels)?;

        let cells = config
            .row_labels
            .iter()
            .map(|_| {
                config
                    .column_kinds
                    .iter()
                    .map(|kind| kind.default_value())
                    .collect()
            })
            .collect();

        Ok(Self {
            selection: Selection::new(config.mode),
            validator: Validator::new(config.policy),
            config,
            cells,
            groups,
            last_report: None,
            on_change: None,
            redraw: true,
        })
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The row grouping index.
    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.config.row_labels.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.config.columns.len()
    }

    /// A row's header label.
    pub fn row_label(&self, row: usize) -> Option<&str> {
        self.config.row_labels.get(row).map(String::as_str)
    }

    /// A column's header.
    pub fn column_header(&self, column: usize) -> Option<&ColumnHeader> {
        self.config.columns.get(column)
    }

    /// A column's cell kind.
    pub fn column_kind(&self, column: usize) -> Option<ColumnKind> {
        self.config.column_kinds.get(column).copied()
    }

    /// One cell's current value.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    /// The marked column indices of a row, ascending.
    pub fn selected_in_row(&self, row: usize) -> Vec<usize> {
        self.cells
            .get(row)
            .map(|cells| self.selection.selected(cells))
            .unwrap_or_default()
    }

    /// Register the change subscriber, replacing any previous one.
    ///
    /// The subscriber is invoked exactly once per user-initiated mutation
    /// ([`select`], [`deselect`], [`set_input`]) with the post-change
    /// snapshot. Programmatic [`set_data`] and [`clear`] never invoke it, so
    /// a restore cannot feed back into the owning section.
    ///
    /// [`select`]: Grid::select
    /// [`deselect`]: Grid::deselect
    /// [`set_input`]: Grid::set_input
    /// [`set_data`]: Grid::set_data
    /// [`clear`]: Grid::clear
    pub fn on_change(&mut self, subscriber: impl FnMut(&Snapshot) + 'static) {
        self.on_change = Some(Box::new(subscriber));
    }

    /// Whether a full re-render is pending, clearing the signal.
    ///
    /// Raised by `configure` and [`clear`]; value-level changes travel
    /// through the change subscriber instead.
    ///
    /// [`clear`]: Grid::clear
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Apply a user selection to `(row, column)`.
    pub fn select(&mut self, row: usize, column: usize) {
        let Some(row_cells) = self.cells.get_mut(row) else {
            warn!(row, "select on a row outside the grid");
            return;
        };
        if column >= row_cells.len() {
            warn!(row, column, "select on a column outside the grid");
            return;
        }
        if self.selection.select(row_cells, column) {
            self.notify();
        }
    }

    /// Clear a user selection at `(row, column)`.
    pub fn deselect(&mut self, row: usize, column: usize) {
        let Some(row_cells) = self.cells.get_mut(row) else {
            warn!(row, "deselect on a row outside the grid");
            return;
        };
        if self.selection.deselect(row_cells, column) {
            self.notify();
        }
    }

    /// Set the text of an input cell at `(row, column)`.
    pub fn set_input(&mut self, row: usize, column: usize, text: impl Into<String>) {
        let text = text.into();
        match self.cells.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            Some(CellValue::Text(current)) => {
                if *current == text {
                    return;
                }
                *current = text;
                self.notify();
            }
            Some(CellValue::Flag(_)) => {
                warn!(row, column, "text input aimed at a selectable column");
            }
            None => {
                warn!(row, column, "text input outside the grid");
            }
        }
    }

    /// Serialize the full current state, ascending by row and column index.
    ///
    /// Pure and idempotent; presentation state (validation highlighting) is
    /// not part of the output.
    pub fn get_data(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (column, cell) in row_cells.iter().enumerate() {
                snapshot.insert(row, column, cell.clone());
            }
        }
        snapshot
    }

    /// Bulk-overwrite cells from a previously captured snapshot.
    ///
    /// Tolerant by contract: ids outside the grid and values whose shape does
    /// not match the cell are ignored with a warning, and ids absent from the
    /// snapshot leave the existing value untouched. Partial restores are
    /// expected; there is no implicit reset. Never fires the change
    /// subscriber.
    pub fn set_data(&mut self, snapshot: &Snapshot) {
        for (row, columns) in snapshot.rows() {
            let Some(row_cells) = self.cells.get_mut(row) else {
                warn!(row, "ignoring snapshot row outside the grid");
                continue;
            };
            for (&column, value) in columns {
                let Some(cell) = row_cells.get_mut(column) else {
                    warn!(row, column, "ignoring snapshot column outside the grid");
                    continue;
                };
                if !cell.same_shape(value) {
                    warn!(
                        row,
                        column,
                        expected = cell.shape_name(),
                        actual = value.shape_name(),
                        "ignoring snapshot value with mismatched shape"
                    );
                    continue;
                }
                *cell = value.clone();
            }
        }
    }

    /// Reset every cell to its unselected/empty default.
    ///
    /// The configuration, grouping, and dimensions are untouched. Raises the
    /// redraw signal; never fires the change subscriber.
    pub fn clear(&mut self) {
        for row_cells in &mut self.cells {
            for (cell, kind) in row_cells.iter_mut().zip(&self.config.column_kinds) {
                *cell = kind.default_value();
            }
        }
        self.redraw = true;
    }

    /// Validate every row against the configured minimum-selection rule.
    ///
    /// Cell state is never mutated and the call is safe to repeat; the
    /// report is also cached for [`validation_errors`].
    ///
    /// [`validation_errors`]: Grid::validation_errors
    pub fn validate(&mut self) -> ValidationReport {
        let report = self
            .validator
            .validate_all(&self.cells, &self.config.row_labels);
        self.last_report = Some(report.clone());
        report
    }

    /// The last computed validation report, if any.
    ///
    /// Presentation state only; it never affects [`get_data`] output.
    ///
    /// [`get_data`]: Grid::get_data
    pub fn validation_errors(&self) -> Option<&ValidationReport> {
        self.last_report.as_ref()
    }

    /// Drop the cached validation report.
    pub fn clear_validation_errors(&mut self) {
        self.last_report = None;
    }

    fn notify(&mut self) {
        if self.on_change.is_none() {
            return;
        }
        let snapshot = self.get_data();
        if let Some(subscriber) = self.on_change.as_mut() {
            subscriber(&snapshot);
        }
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.row_count())
            .field("columns", &self.column_count())
            .field("mode", &self.config.mode)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}
