use crate::{ConfigError, RowGroup};

/// Reverse index from row indices to their display group.
///
/// Built once at configure time from the declared [`RowGroup`]s. Construction
/// verifies that the groups form a total partition of the row indices, so
/// every later lookup is total: no gaps, no overlaps, nothing out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupIndex {
    /// Group labels in declaration order.
    labels: Vec<String>,

    /// Row indices per group, in declaration order.
    spans: Vec<Vec<usize>>,

    /// Row index -> group index.
    by_row: Vec<usize>,
}

impl GroupIndex {
    /// Build the index, checking the partition invariant.
    pub(crate) fn build(groups: &[RowGroup], row_labels: &[String]) -> Result<Self, ConfigError> {
        let row_count = row_labels.len();
        let mut by_row: Vec<Option<usize>> = vec![None; row_count];

        for (group_idx, group) in groups.iter().enumerate() {
            for &row in &group.rows {
                if row >= row_count {
                    return Err(ConfigError::RowOutOfRange {
                        row,
                        group: group.label.clone(),
                        row_count,
                    });
                }
                if let Some(first) = by_row[row] {
                    return Err(ConfigError::RowReassigned {
                        row,
                        first: groups[first].label.clone(),
                        second: group.label.clone(),
                    });
                }
                by_row[row] = Some(group_idx);
            }
        }

        let mut resolved = Vec::with_capacity(row_count);
        for (row, assignment) in by_row.into_iter().enumerate() {
            match assignment {
                Some(group_idx) => resolved.push(group_idx),
                None => {
                    return Err(ConfigError::RowUnassigned {
                        row,
                        label: row_labels[row].clone(),
                    });
                }
            }
        }

        Ok(Self {
            labels: groups.iter().map(|g| g.label.clone()).collect(),
            spans: groups.iter().map(|g| g.rows.clone()).collect(),
            by_row: resolved,
        })
    }

    /// Get the group index for a row. O(1); `None` only for out-of-range rows.
    pub fn group_for(&self, row: usize) -> Option<usize> {
        self.by_row.get(row).copied()
    }

    /// Get a group's category label.
    pub fn label(&self, group: usize) -> Option<&str> {
        self.labels.get(group).map(String::as_str)
    }

    /// Get the row indices a group spans, in display order.
    pub fn rows_in(&self, group: usize) -> Option<&[usize]> {
        self.spans.get(group).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether `row` is the first row of its group's span.
    ///
    /// Renderers use this to emit the group label once, spanning the group.
    pub fn starts_group(&self, row: usize) -> bool {
        self.group_for(row)
            .and_then(|group| self.spans[group].first().copied())
            .is_some_and(|first| first == row)
    }
}
