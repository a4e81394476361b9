//! The work-environment section: exposure factors with independent marks
//! and a free-text remarks column.

use gridform::{ColumnHeader, ColumnKind, ConfigError, Grid, GridConfig, RowGroup, SelectionMode};

use crate::Section;

/// Workplace exposure factors.
///
/// Marks are independent per row (an exposure can apply *and* require
/// protective equipment), so the grid runs in multi selection mode; the
/// `AtLeastOne` rule still forces an explicit "does not apply" per factor.
pub struct WorkEnvironment {
    grid: Grid,
}

impl WorkEnvironment {
    /// Column index: the factor does not occur at this workplace.
    pub const DOES_NOT_APPLY: usize = 0;
    /// Column index: the factor occurs.
    pub const APPLIES: usize = 1;
    /// Column index: protective equipment is required.
    pub const PPE_REQUIRED: usize = 2;
    /// Column index: free-text remarks.
    pub const REMARKS: usize = 3;

    /// Build the section with its fixed configuration.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::configure(Self::config())?,
        })
    }

    fn config() -> GridConfig {
        let columns = vec![
            ColumnHeader::lines(["Does not", "apply"]),
            ColumnHeader::new("Applies"),
            ColumnHeader::lines(["Protective", "equipment required"]),
            ColumnHeader::new("Remarks"),
        ];

        let row_labels: Vec<String> = [
            "noise above 80 dB(A)",
            "dust, smoke or fumes",
            "hand-arm vibration",
            "heat above 30 °C",
            "cold below 5 °C",
            "moisture or wet work",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let groups = vec![
            RowGroup::new("physical agents", vec![0, 1, 2]),
            RowGroup::new("climate", vec![3, 4, 5]),
        ];

        GridConfig::new(
            columns,
            row_labels,
            groups,
            vec![
                ColumnKind::Selectable,
                ColumnKind::Selectable,
                ColumnKind::Selectable,
                ColumnKind::Input,
            ],
        )
        .with_mode(SelectionMode::Multi)
        .striped(true)
    }

    /// Record that a factor applies, optionally with protective equipment.
    pub fn mark_applies(&mut self, row: usize, ppe_required: bool) {
        self.grid.select(row, Self::APPLIES);
        if ppe_required {
            self.grid.select(row, Self::PPE_REQUIRED);
        }
    }

    /// Record that a factor does not occur at this workplace.
    pub fn mark_not_applicable(&mut self, row: usize) {
        self.grid.select(row, Self::DOES_NOT_APPLY);
    }

    /// Attach free-text remarks to a factor.
    pub fn set_remarks(&mut self, row: usize, remarks: impl Into<String>) {
        self.grid.set_input(row, Self::REMARKS, remarks);
    }
}

impl Section for WorkEnvironment {
    fn key(&self) -> &'static str {
        "work_environment"
    }

    fn title(&self) -> &str {
        "Work environment"
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
