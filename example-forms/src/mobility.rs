//! The mobility-demands section: a 23-row frequency matrix over the
//! physical demands of a job, one frequency per demand.

use gridform::{ColumnHeader, ColumnKind, ConfigError, Grid, GridConfig, RowGroup, SelectionMode};

use crate::Section;

/// Physical mobility demands, grouped by demand category.
///
/// Every row takes exactly one of four shift-share frequencies, so the grid
/// runs in single selection mode with the `ExactlyOne` rule.
pub struct MobilityDemands {
    grid: Grid,
}

impl MobilityDemands {
    /// Column index: the demand never occurs.
    pub const NEVER: usize = 0;
    /// Column index: up to a third of the shift.
    pub const OCCASIONALLY: usize = 1;
    /// Column index: up to two thirds of the shift.
    pub const FREQUENTLY: usize = 2;
    /// Column index: more than two thirds of the shift.
    pub const CONSTANTLY: usize = 3;

    /// Build the section with its fixed configuration.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::configure(Self::config())?,
        })
    }

    fn config() -> GridConfig {
        let columns = vec![
            ColumnHeader::new("Never"),
            ColumnHeader::lines(["Occasionally", "up to 1/3 of the shift"]),
            ColumnHeader::lines(["Frequently", "up to 2/3 of the shift"]),
            ColumnHeader::lines(["Constantly", "over 2/3 of the shift"]),
        ];

        let row_labels: Vec<String> = [
            // body posture
            "sitting",
            "standing",
            "kneeling",
            "squatting",
            "lying",
            "trunk bent forward",
            // locomotion
            "walking on level ground",
            "walking on uneven ground",
            "climbing stairs",
            "balancing on beams or ledges",
            "crawling",
            // load handling
            "lifting up to 10 kg",
            "lifting 10 to 25 kg",
            "lifting over 25 kg",
            "carrying loads over distance",
            "pushing and pulling",
            // climbing
            "climbing ladders",
            "climbing scaffolds",
            "working at height",
            // reaching
            "reaching above shoulder level",
            "reaching below knee level",
            "holding arms extended",
            "fine motor hand work",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let groups = vec![
            RowGroup::new("body posture", (0..6).collect()),
            RowGroup::new("locomotion", (6..11).collect()),
            RowGroup::new("load handling", (11..16).collect()),
            RowGroup::new("climbing", (16..19).collect()),
            RowGroup::new("reaching", (19..23).collect()),
        ];

        GridConfig::new(columns, row_labels, groups, vec![ColumnKind::Selectable; 4])
            .with_mode(SelectionMode::Single)
            .striped(true)
            .hoverable(true)
            .with_row_header_width(220)
            .with_column_widths(vec![90, 120, 120, 120])
    }

    /// Record the frequency chosen for one demand row.
    pub fn set_frequency(&mut self, row: usize, frequency: usize) {
        self.grid.select(row, frequency);
    }
}

impl Section for MobilityDemands {
    fn key(&self) -> &'static str {
        "mobility_demands"
    }

    fn title(&self) -> &str {
        "Mobility demands"
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_is_structurally_sound() {
        let section = MobilityDemands::new().unwrap();

        assert_eq!(section.grid().row_count(), 23);
        assert_eq!(section.grid().column_count(), 4);
        assert_eq!(section.grid().groups().len(), 5);
        // Every row resolves to a group; configure would have failed otherwise.
        for row in 0..23 {
            assert!(section.grid().groups().group_for(row).is_some());
        }
    }

    #[test]
    fn one_frequency_per_demand() {
        let mut section = MobilityDemands::new().unwrap();

        section.set_frequency(0, MobilityDemands::OCCASIONALLY);
        section.set_frequency(0, MobilityDemands::CONSTANTLY);

        assert_eq!(
            section.grid().selected_in_row(0),
            [MobilityDemands::CONSTANTLY]
        );
    }

    #[test]
    fn unanswered_rows_fail_validation() {
        let mut section = MobilityDemands::new().unwrap();
        for row in 0..23 {
            section.set_frequency(row, MobilityDemands::NEVER);
        }
        assert!(section.validate().is_valid());

        section.grid_mut().deselect(11, MobilityDemands::NEVER);
        let report = section.validate();
        assert!(!report.is_valid());
        assert!(!report.row_is_valid(11));
        assert_eq!(report.invalid_count(), 1);
    }
}
