use crate::CellValue;

/// A column header with one or more display lines.
///
/// Multi-line headers are common in printable questionnaire layouts where a
/// frequency column reads e.g. "up to" / "1/3 of the shift".
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    lines: Vec<String>,
}

impl ColumnHeader {
    /// Create a single-line header.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// Create a header from multiple display lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the display lines.
    pub fn display_lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for ColumnHeader {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl From<String> for ColumnHeader {
    fn from(line: String) -> Self {
        Self::new(line)
    }
}

/// A display group of rows with a category label.
///
/// Groups partition the row indices: every row belongs to exactly one group.
/// The partition is checked when the grid is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    /// Category label shown alongside the group's rows.
    pub label: String,

    /// Row indices this group spans, in display order.
    pub rows: Vec<usize>,
}

impl RowGroup {
    /// Create a new row group.
    pub fn new(label: impl Into<String>, rows: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }
}

/// The kind of cells in a column, fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Cells are marks that can be selected/deselected.
    Selectable,

    /// Cells hold free text.
    Input,
}

impl ColumnKind {
    /// The unselected/empty default value for a cell of this kind.
    pub fn default_value(self) -> CellValue {
        match self {
            Self::Selectable => CellValue::Flag(false),
            Self::Input => CellValue::Text(String::new()),
        }
    }
}

/// How many selectable columns may be marked per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one mark per row; selecting another moves the mark.
    #[default]
    Single,

    /// Any subset of columns may be marked independently.
    Multi,
}

impl SelectionMode {
    /// The minimum-selection rule this mode implies when none is declared.
    pub fn default_policy(self) -> SelectionPolicy {
        match self {
            Self::Single => SelectionPolicy::ExactlyOne,
            Self::Multi => SelectionPolicy::AtLeastOne,
        }
    }
}

/// The minimum-selection rule a row must satisfy to be valid.
///
/// The two selection modes imply different rules, so the rule is declared
/// explicitly on the configuration rather than inferred at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Exactly one selectable column must be marked.
    ExactlyOne,

    /// At least one selectable column must be marked.
    AtLeastOne,
}

/// Declarative configuration for a grid, supplied once to [`Grid::configure`].
///
/// Structural invariants (row partition totality, per-column kind list length)
/// are checked eagerly at configure time, not at use time.
///
/// [`Grid::configure`]: crate::Grid::configure
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Ordered column headers.
    pub columns: Vec<ColumnHeader>,

    /// Ordered row header labels.
    pub row_labels: Vec<String>,

    /// Ordered display groups partitioning the row indices.
    pub groups: Vec<RowGroup>,

    /// Per-column cell kind; must have one entry per column.
    pub column_kinds: Vec<ColumnKind>,

    /// Selection policy for selectable columns.
    pub mode: SelectionMode,

    /// Minimum-selection rule for validation.
    pub policy: SelectionPolicy,

    /// Render rows with alternating backgrounds. Presentation only.
    pub striped: bool,

    /// Highlight the hovered row. Presentation only.
    pub hoverable: bool,

    /// Whether validation failures are rendered to the user.
    pub show_validation_errors: bool,

    /// Width of the row-header column, in display units. Presentation only.
    pub row_header_width: Option<u32>,

    /// Per-column widths, in display units. Presentation only; empty means
    /// automatic, otherwise must have one entry per column.
    pub column_widths: Vec<u32>,
}

impl GridConfig {
    /// Create a configuration with the required structure and default flags.
    ///
    /// Defaults: single selection mode with its `ExactlyOne` policy, striped
    /// and hoverable off, validation errors shown, automatic widths.
    pub fn new(
        columns: Vec<ColumnHeader>,
        row_labels: Vec<String>,
        groups: Vec<RowGroup>,
        column_kinds: Vec<ColumnKind>,
    ) -> Self {
        Self {
            columns,
            row_labels,
            groups,
            column_kinds,
            mode: SelectionMode::Single,
            policy: SelectionMode::Single.default_policy(),
            striped: false,
            hoverable: false,
            show_validation_errors: true,
            row_header_width: None,
            column_widths: Vec::new(),
        }
    }

    /// Set the selection mode, adopting the mode's default policy.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self.policy = mode.default_policy();
        self
    }

    /// Override the minimum-selection rule.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render rows with alternating backgrounds.
    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Highlight the hovered row.
    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Enable or disable rendering of validation failures.
    pub fn show_validation_errors(mut self, show: bool) -> Self {
        self.show_validation_errors = show;
        self
    }

    /// Set the row-header column width.
    pub fn with_row_header_width(mut self, width: u32) -> Self {
        self.row_header_width = Some(width);
        self
    }

    /// Set per-column widths.
    pub fn with_column_widths(mut self, widths: Vec<u32>) -> Self {
        self.column_widths = widths;
        self
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }
}
