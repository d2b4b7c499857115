// src/models/selectors.rs

//! CSS selectors for reading an exam schedule fragment.

use serde::{Deserialize, Serialize};

/// CSS selectors for reading an exam schedule fragment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSelectors {
    /// Selector for the heading that opens each listing
    #[serde(default = "default_heading")]
    pub heading_selector: String,

    /// Selector for body rows, evaluated inside the table after a heading
    #[serde(default = "default_row")]
    pub row_selector: String,

    /// Selector for the cells within a row
    #[serde(default = "default_cell")]
    pub cell_selector: String,
}

fn default_heading() -> String {
    "h3".to_string()
}

fn default_row() -> String {
    "tbody tr".to_string()
}

fn default_cell() -> String {
    "td".to_string()
}

impl Default for ScheduleSelectors {
    fn default() -> Self {
        Self {
            heading_selector: default_heading(),
            row_selector: default_row(),
            cell_selector: default_cell(),
        }
    }
}

impl ScheduleSelectors {
    /// All selectors paired with the config field they came from.
    pub fn named(&self) -> [(&'static str, &str); 3] {
        [
            ("parser.heading_selector", self.heading_selector.as_str()),
            ("parser.row_selector", self.row_selector.as_str()),
            ("parser.cell_selector", self.cell_selector.as_str()),
        ]
    }
}
