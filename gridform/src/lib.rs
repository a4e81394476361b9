//! Core types for the gridform crate.
//!
//! A grid is a grouped, selectable data table used for structured data
//! capture in questionnaires: frequency matrices, exposure checklists, and
//! similar "one mark per row" layouts. This crate is the headless core:
//! - `GridConfig` - Declarative structure, checked eagerly at configure time
//! - `Grid` - The controller: cell state, get/set/clear/validate surface
//! - `Selection` - Single/multi selection policy per row
//! - `Validator` and `ValidationReport` - Per-row completeness as data
//! - `GroupIndex` - Row-to-display-group lookup with span bookkeeping
//! - `Snapshot` - The serialized state the owning form section persists
//!
//! Presentation and persistence live elsewhere: renderers consume the grid
//! read-only, and storage is whatever the owning section injects.

mod cell;
pub use cell::CellValue;

mod config;
pub use config::{
    ColumnHeader, ColumnKind, GridConfig, RowGroup, SelectionMode, SelectionPolicy,
};

mod error;
pub use error::ConfigError;

mod groups;
pub use groups::GroupIndex;

mod selection;
pub use selection::Selection;

mod validate;
pub use validate::{ValidationReport, Validator};

mod snapshot;
pub use snapshot::Snapshot;

mod grid;
pub use grid::Grid;
