use std::collections::BTreeMap;

use crate::{CellValue, SelectionPolicy};

/// Per-row outcome of validating a grid against its minimum-selection rule.
///
/// An incomplete row is an expected end-user state, so it is reported as data
/// for the presentation layer to highlight, never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Failing rows with their messages, ascending by row index.
    invalid: BTreeMap<usize, String>,
}

impl ValidationReport {
    /// Whether every row satisfied the rule.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Whether a specific row satisfied the rule.
    pub fn row_is_valid(&self, row: usize) -> bool {
        !self.invalid.contains_key(&row)
    }

    /// The message for a failing row, if it failed.
    pub fn message_for(&self, row: usize) -> Option<&str> {
        self.invalid.get(&row).map(String::as_str)
    }

    /// Iterate over failing rows and their messages, ascending.
    pub fn invalid_rows(&self) -> impl Iterator<Item = (usize, &str)> {
        self.invalid.iter().map(|(row, msg)| (*row, msg.as_str()))
    }

    /// Number of failing rows.
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    pub(crate) fn mark_invalid(&mut self, row: usize, message: String) {
        self.invalid.insert(row, message);
    }
}

/// Computes per-row satisfaction of the configured minimum-selection rule.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    policy: SelectionPolicy,
}

impl Validator {
    /// Create a validator for the given rule.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// The configured rule.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Whether one row of cells satisfies the rule.
    ///
    /// A row with no selectable columns at all is vacuously valid; the rule
    /// only governs marks.
    pub fn validate_row(&self, row: &[CellValue]) -> bool {
        let mut selectable = 0usize;
        let mut selected = 0usize;
        for cell in row {
            if let CellValue::Flag(flag) = cell {
                selectable += 1;
                if *flag {
                    selected += 1;
                }
            }
        }
        if selectable == 0 {
            return true;
        }
        match self.policy {
            SelectionPolicy::ExactlyOne => selected == 1,
            SelectionPolicy::AtLeastOne => selected >= 1,
        }
    }

    /// Validate every row in header order, preserving per-row detail.
    pub fn validate_all(&self, cells: &[Vec<CellValue>], row_labels: &[String]) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (row, row_cells) in cells.iter().enumerate() {
            if self.validate_row(row_cells) {
                continue;
            }
            let selected = row_cells.iter().filter(|c| c.is_selected()).count();
            let message = match (self.policy, selected) {
                (SelectionPolicy::ExactlyOne, 0) | (SelectionPolicy::AtLeastOne, _) => {
                    format!("no option chosen for '{}'", row_labels[row])
                }
                (SelectionPolicy::ExactlyOne, _) => {
                    format!("more than one option chosen for '{}'", row_labels[row])
                }
            };
            report.mark_invalid(row, message);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(marks: &[bool]) -> Vec<CellValue> {
        marks.iter().map(|&m| CellValue::Flag(m)).collect()
    }

    #[test]
    fn exactly_one_rule() {
        let validator = Validator::new(SelectionPolicy::ExactlyOne);

        assert!(!validator.validate_row(&flags(&[false, false, false])));
        assert!(validator.validate_row(&flags(&[false, true, false])));
        assert!(!validator.validate_row(&flags(&[true, true, false])));
    }

    #[test]
    fn at_least_one_rule() {
        let validator = Validator::new(SelectionPolicy::AtLeastOne);

        assert!(!validator.validate_row(&flags(&[false, false])));
        assert!(validator.validate_row(&flags(&[true, false])));
        assert!(validator.validate_row(&flags(&[true, true])));
    }

    #[test]
    fn row_without_selectable_columns_is_vacuously_valid() {
        let validator = Validator::new(SelectionPolicy::ExactlyOne);
        let row = vec![CellValue::Text("free text only".into())];

        assert!(validator.validate_row(&row));
    }

    #[test]
    fn input_columns_do_not_count_towards_the_rule() {
        let validator = Validator::new(SelectionPolicy::ExactlyOne);
        let mut row = flags(&[true, false]);
        row.push(CellValue::Text("notes".into()));

        assert!(validator.validate_row(&row));
    }

    #[test]
    fn report_keeps_per_row_detail() {
        let validator = Validator::new(SelectionPolicy::ExactlyOne);
        let labels: Vec<String> = vec!["standing".into(), "walking".into(), "kneeling".into()];
        let cells = vec![
            flags(&[true, false]),
            flags(&[false, false]),
            flags(&[true, true]),
        ];

        let report = validator.validate_all(&cells, &labels);

        assert!(!report.is_valid());
        assert!(report.row_is_valid(0));
        assert!(!report.row_is_valid(1));
        assert!(!report.row_is_valid(2));
        assert_eq!(report.invalid_count(), 2);
        assert_eq!(report.message_for(1), Some("no option chosen for 'walking'"));
        assert_eq!(
            report.message_for(2),
            Some("more than one option chosen for 'kneeling'")
        );

        let failing: Vec<usize> = report.invalid_rows().map(|(row, _)| row).collect();
        assert_eq!(failing, [1, 2]);
    }

    #[test]
    fn repeated_validation_is_stable() {
        let validator = Validator::new(SelectionPolicy::ExactlyOne);
        let labels = vec!["sitting".into()];
        let cells = vec![flags(&[false])];

        let first = validator.validate_all(&cells, &labels);
        let second = validator.validate_all(&cells, &labels);
        assert_eq!(first, second);
    }
}
