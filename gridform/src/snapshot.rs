use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CellValue;

/// Serialized state of a whole grid: row index -> column index -> value.
///
/// This is the only persisted-state shape the core defines. The owning form
/// section embeds it into whatever external storage it uses; the grid itself
/// never touches a storage medium. Ordered maps keep [`Grid::get_data`]
/// output ascending by row and column index.
///
/// [`Grid::get_data`]: crate::Grid::get_data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    rows: BTreeMap<usize, BTreeMap<usize, CellValue>>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of one cell.
    pub fn insert(&mut self, row: usize, column: usize, value: impl Into<CellValue>) {
        self.rows.entry(row).or_default().insert(column, value.into());
    }

    /// Get the value of one cell.
    pub fn get(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|columns| columns.get(&column))
    }

    /// Get one row's values, ascending by column index.
    pub fn row(&self, row: usize) -> Option<&BTreeMap<usize, CellValue>> {
        self.rows.get(&row)
    }

    /// Iterate over rows, ascending by row index.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &BTreeMap<usize, CellValue>)> {
        self.rows.iter().map(|(row, columns)| (*row, columns))
    }

    /// Number of rows with captured values.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no values are captured.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for Snapshot {
    type Item = (usize, BTreeMap<usize, CellValue>);
    type IntoIter = std::collections::btree_map::IntoIter<usize, BTreeMap<usize, CellValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(0, 1, true);
        snapshot.insert(0, 2, "often outdoors");

        assert_eq!(snapshot.get(0, 1), Some(&CellValue::Flag(true)));
        assert_eq!(
            snapshot.get(0, 2),
            Some(&CellValue::Text("often outdoors".into()))
        );
        assert_eq!(snapshot.get(1, 0), None);
    }

    #[test]
    fn rows_iterate_ascending() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(4, 0, false);
        snapshot.insert(1, 0, true);
        snapshot.insert(2, 0, false);

        let order: Vec<usize> = snapshot.rows().map(|(row, _)| row).collect();
        assert_eq!(order, [1, 2, 4]);
    }

    #[test]
    fn json_round_trip() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(0, 0, true);
        snapshot.insert(0, 1, false);
        snapshot.insert(3, 2, "with a cane");

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
