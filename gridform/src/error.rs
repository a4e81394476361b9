/// Error type for grid configuration.
///
/// All variants are detected eagerly when the grid is configured; a grid that
/// exists has a structurally sound configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid has no columns")]
    NoColumns,

    #[error("grid has no rows")]
    NoRows,

    #[error("column kind list has {actual} entries for {expected} columns")]
    ColumnKindMismatch { expected: usize, actual: usize },

    #[error("column width list has {actual} entries for {expected} columns")]
    ColumnWidthMismatch { expected: usize, actual: usize },

    #[error("group '{group}' references row {row}, but the grid has {row_count} rows")]
    RowOutOfRange {
        row: usize,
        group: String,
        row_count: usize,
    },

    #[error("row {row} appears in group '{first}' and again in group '{second}'")]
    RowReassigned {
        row: usize,
        first: String,
        second: String,
    },

    #[error("row {row} ('{label}') is not assigned to any group")]
    RowUnassigned { row: usize, label: String },
}
