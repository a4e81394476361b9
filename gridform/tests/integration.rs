//! Integration tests for gridform

use std::cell::RefCell;
use std::rc::Rc;

use gridform::{
    CellValue, ColumnKind, ConfigError, Grid, GridConfig, RowGroup, SelectionMode, Snapshot,
};

/// A frequency matrix shaped like the mobility-demands questionnaire section:
/// 23 rows across five categories, four selectable frequency columns.
fn mobility_style_config() -> GridConfig {
    let row_labels: Vec<String> = (0..23).map(|i| format!("demand {i}")).collect();
    GridConfig::new(
        vec![
            "Never".into(),
            "Occasionally".into(),
            "Frequently".into(),
            "Constantly".into(),
        ],
        row_labels,
        vec![
            RowGroup::new("posture", (0..6).collect()),
            RowGroup::new("locomotion", (6..11).collect()),
            RowGroup::new("load handling", (11..16).collect()),
            RowGroup::new("climbing", (16..20).collect()),
            RowGroup::new("reach", (20..23).collect()),
        ],
        vec![ColumnKind::Selectable; 4],
    )
}

#[test]
fn row_partition_totality_is_enforced_at_configure_time() {
    // Gap: drop row 9 from its group.
    let mut gap = mobility_style_config();
    gap.groups[1].rows.retain(|&row| row != 9);
    assert!(matches!(
        Grid::configure(gap).unwrap_err(),
        ConfigError::RowUnassigned { row: 9, .. }
    ));

    // Overlap: row 3 claimed twice.
    let mut overlap = mobility_style_config();
    overlap.groups[1].rows.push(3);
    assert!(matches!(
        Grid::configure(overlap).unwrap_err(),
        ConfigError::RowReassigned { row: 3, .. }
    ));

    // Out of range.
    let mut out_of_range = mobility_style_config();
    out_of_range.groups[4].rows.push(23);
    assert!(matches!(
        Grid::configure(out_of_range).unwrap_err(),
        ConfigError::RowOutOfRange { row: 23, .. }
    ));

    // The untampered configuration is accepted.
    assert!(Grid::configure(mobility_style_config()).is_ok());
}

#[test]
fn single_mode_exclusivity_holds_under_any_select_sequence() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();

    let sequence = [
        (0, 0),
        (0, 3),
        (0, 3),
        (0, 1),
        (5, 2),
        (5, 0),
        (22, 3),
        (22, 3),
    ];
    for (row, column) in sequence {
        grid.select(row, column);
        for checked in 0..grid.row_count() {
            assert!(
                grid.selected_in_row(checked).len() <= 1,
                "row {checked} has more than one mark"
            );
        }
    }

    assert_eq!(grid.selected_in_row(0), [1]);
    assert_eq!(grid.selected_in_row(5), [0]);
    assert_eq!(grid.selected_in_row(22), [3]);
}

#[test]
fn snapshot_round_trip_is_idempotent() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();
    grid.select(0, 1);
    grid.select(7, 3);
    grid.select(22, 0);

    let snapshot = grid.get_data();
    grid.set_data(&snapshot);
    assert_eq!(grid.get_data(), snapshot);
}

#[test]
fn partial_restore_leaves_other_rows_untouched() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();
    grid.select(2, 2);
    grid.select(10, 1);

    let mut partial = Snapshot::new();
    partial.insert(2, 2, false);
    partial.insert(2, 0, true);
    grid.set_data(&partial);

    assert_eq!(grid.selected_in_row(2), [0]);
    assert_eq!(grid.selected_in_row(10), [1], "uncovered row untouched");
}

#[test]
fn validation_flags_exactly_the_incomplete_rows() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();
    for row in 0..grid.row_count() {
        if row == 5 {
            continue;
        }
        grid.select(row, row % 4);
    }

    let report = grid.validate();

    assert!(!report.is_valid());
    assert_eq!(report.invalid_count(), 1);
    assert!(!report.row_is_valid(5));
    for row in (0..23).filter(|&row| row != 5) {
        assert!(report.row_is_valid(row), "row {row} should be valid");
    }
}

#[test]
fn change_notifications_fire_once_per_user_mutation_only() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();
    let calls: Rc<RefCell<Vec<Snapshot>>> = Rc::default();
    let sink = Rc::clone(&calls);
    grid.on_change(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    grid.select(3, 2);
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0].get(3, 2), Some(&CellValue::Flag(true)));

    // Re-selecting the same cell in single mode is a no-op: zero calls.
    grid.select(3, 2);
    assert_eq!(calls.borrow().len(), 1);

    // Moving the mark is one observable change: one call.
    grid.select(3, 0);
    assert_eq!(calls.borrow().len(), 2);

    // Programmatic restore: zero calls.
    let snapshot = grid.get_data();
    grid.set_data(&snapshot);
    grid.clear();
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn clear_resets_values_while_structure_survives() {
    let mut grid = Grid::configure(mobility_style_config()).unwrap();
    for row in 0..grid.row_count() {
        grid.select(row, 1);
    }
    let groups_before: Vec<Option<usize>> =
        (0..grid.row_count()).map(|row| grid.groups().group_for(row)).collect();

    grid.clear();

    for row in 0..grid.row_count() {
        assert!(grid.selected_in_row(row).is_empty());
    }
    let groups_after: Vec<Option<usize>> =
        (0..grid.row_count()).map(|row| grid.groups().group_for(row)).collect();
    assert_eq!(groups_before, groups_after);
    assert_eq!(grid.row_count(), 23);
    assert_eq!(grid.column_count(), 4);
}

#[test]
fn snapshot_json_is_the_interchange_format() {
    let mut grid = Grid::configure(
        mobility_style_config()
            .with_mode(SelectionMode::Multi)
            .striped(true),
    )
    .unwrap();
    grid.select(0, 0);
    grid.select(0, 2);
    grid.select(12, 1);

    let snapshot = grid.get_data();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    let mut other = Grid::configure(mobility_style_config().with_mode(SelectionMode::Multi)).unwrap();
    other.set_data(&restored);
    assert_eq!(other.selected_in_row(0), [0, 2]);
    assert_eq!(other.selected_in_row(12), [1]);
}

#[test]
fn mixed_column_kinds_round_trip_through_snapshots() {
    let config = GridConfig::new(
        vec!["Applies".into(), "Details".into()],
        vec!["noise".into(), "heat".into()],
        vec![RowGroup::new("exposure", vec![0, 1])],
        vec![ColumnKind::Selectable, ColumnKind::Input],
    )
    .with_mode(SelectionMode::Multi);

    let mut grid = Grid::configure(config).unwrap();
    grid.select(0, 0);
    grid.set_input(0, 1, "above 85 dB(A)");

    let snapshot = grid.get_data();
    assert_eq!(snapshot.get(0, 0), Some(&CellValue::Flag(true)));
    assert_eq!(
        snapshot.get(0, 1),
        Some(&CellValue::Text("above 85 dB(A)".into()))
    );

    grid.clear();
    grid.set_data(&snapshot);
    assert_eq!(grid.cell(0, 1), Some(&CellValue::Text("above 85 dB(A)".into())));
}
