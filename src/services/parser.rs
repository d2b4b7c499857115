// src/services/parser.rs

//! Schedule parser.
//!
//! A fragment is a flat run of headings, each followed by the table listing
//! that subdivision's exams:
//!
//! ```html
//! <h3>Hópur A</h3>
//! <table><tbody><tr><td>TÖL101</td>...</tr></tbody></table>
//! <h3>Hópur B</h3>
//! ...
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{DepartmentSchedule, ExamRow, ScheduleSelectors, SubdivisionListing};

/// Parses exam schedule fragments using configured CSS selectors.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    heading: Selector,
    row: Selector,
    cell: Selector,
}

impl ScheduleParser {
    /// Compile the configured selectors.
    pub fn new(selectors: &ScheduleSelectors) -> Result<Self> {
        Ok(Self {
            heading: Self::parse_selector(&selectors.heading_selector)?,
            row: Self::parse_selector(&selectors.row_selector)?,
            cell: Self::parse_selector(&selectors.cell_selector)?,
        })
    }

    /// Parse a fragment into listings, one per heading, in document order.
    pub fn parse(&self, fragment: &str) -> Result<DepartmentSchedule> {
        if fragment.trim().is_empty() {
            return Ok(DepartmentSchedule::default());
        }

        let document = Html::parse_fragment(fragment);
        let root = document.root_element();
        // html5ever accepts any input, so "not markup" means no element at
        // all: an error page or bare text instead of the expected tables.
        // Element-free listings such as `<p>Engin próf</p>` still parse.
        if !root.children().any(|node| node.value().is_element()) {
            return Err(AppError::ParserInput(format!(
                "fragment contains no markup ({} bytes)",
                fragment.len()
            )));
        }

        let listings: Vec<SubdivisionListing> = document
            .select(&self.heading)
            .map(|heading| SubdivisionListing {
                heading: collect_text(heading),
                tests: Self::next_table(heading)
                    .map(|table| self.read_rows(table))
                    .unwrap_or_default(),
            })
            .collect();

        log::debug!(
            "Parsed {} listings with {} exams",
            listings.len(),
            listings.iter().map(|l| l.tests.len()).sum::<usize>()
        );
        Ok(DepartmentSchedule(listings))
    }

    /// The heading's next element sibling, if it is a table.
    fn next_table(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
        let sibling = heading.next_siblings().find_map(ElementRef::wrap)?;
        (sibling.value().name() == "table").then_some(sibling)
    }

    fn read_rows(&self, table: ElementRef<'_>) -> Vec<ExamRow> {
        table
            .select(&self.row)
            .map(|row| {
                let cells: Vec<String> = row.select(&self.cell).map(collect_text).collect();
                ExamRow::from_cells(&cells)
            })
            .collect()
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
