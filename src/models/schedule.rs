//! Exam schedule data structures.

use serde::{Deserialize, Serialize};

/// Column position of each exam row field in the upstream table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Course,
    Name,
    Type,
    Students,
    Date,
}

/// Upstream table layout, left to right.
pub const COLUMNS: [Column; 5] = [
    Column::Course,
    Column::Name,
    Column::Type,
    Column::Students,
    Column::Date,
];

/// One exam as listed in a subdivision table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamRow {
    /// Course code
    pub course: Option<String>,

    /// Course name
    pub name: Option<String>,

    /// Exam type (written, oral, ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Registered students; `None` when the cell is missing or not a count
    pub students: Option<u64>,

    /// Exam date as printed upstream
    pub date: Option<String>,
}

impl ExamRow {
    /// Build a row from trimmed cell texts, mapped through [`COLUMNS`].
    ///
    /// Cells past the last known column are ignored; missing cells leave the
    /// field empty.
    pub fn from_cells(cells: &[String]) -> Self {
        let mut row = Self::default();
        for (column, text) in COLUMNS.iter().zip(cells) {
            match column {
                Column::Course => row.course = Some(text.clone()),
                Column::Name => row.name = Some(text.clone()),
                Column::Type => row.kind = Some(text.clone()),
                Column::Students => row.students = parse_students(text),
                Column::Date => row.date = Some(text.clone()),
            }
        }
        row
    }
}

/// Parse a student count; anything but a non-negative integer is unknown.
fn parse_students(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

/// Exams grouped under one heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubdivisionListing {
    pub heading: String,
    pub tests: Vec<ExamRow>,
}

/// Every listing from one department's fragment, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DepartmentSchedule(pub Vec<SubdivisionListing>);

impl DepartmentSchedule {
    pub fn listings(&self) -> &[SubdivisionListing] {
        &self.0
    }

    /// Iterate every exam row across all listings.
    pub fn rows(&self) -> impl Iterator<Item = &ExamRow> {
        self.0.iter().flat_map(|listing| listing.tests.iter())
    }

    pub fn row_count(&self) -> usize {
        self.0.iter().map(|listing| listing.tests.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SubdivisionListing>> for DepartmentSchedule {
    fn from(listings: Vec<SubdivisionListing>) -> Self {
        Self(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_cells_full_row() {
        let row = ExamRow::from_cells(&cells(&[
            "TÖL101",
            "Forritun",
            "Skriflegt",
            "45",
            "2024-05-10",
        ]));
        assert_eq!(row.course.as_deref(), Some("TÖL101"));
        assert_eq!(row.name.as_deref(), Some("Forritun"));
        assert_eq!(row.kind.as_deref(), Some("Skriflegt"));
        assert_eq!(row.students, Some(45));
        assert_eq!(row.date.as_deref(), Some("2024-05-10"));
    }

    #[test]
    fn test_from_cells_short_row() {
        let row = ExamRow::from_cells(&cells(&["STÆ203", "Línuleg algebra"]));
        assert_eq!(row.course.as_deref(), Some("STÆ203"));
        assert_eq!(row.kind, None);
        assert_eq!(row.students, None);
        assert_eq!(row.date, None);
    }

    #[test]
    fn test_from_cells_extra_cells_ignored() {
        let row = ExamRow::from_cells(&cells(&["A", "B", "C", "7", "D", "Stofa 101"]));
        assert_eq!(row.students, Some(7));
        assert_eq!(row.date.as_deref(), Some("D"));
    }

    #[test]
    fn test_non_numeric_students_is_unknown() {
        for text in ["", "óvíst", "-3", "4.5", "12a"] {
            let row = ExamRow::from_cells(&cells(&["A", "B", "C", text, "D"]));
            assert_eq!(row.students, None, "{text:?} should not parse");
        }
    }

    #[test]
    fn test_serialized_shape() {
        let schedule = DepartmentSchedule(vec![SubdivisionListing {
            heading: "Hópur A".into(),
            tests: vec![ExamRow::from_cells(&cells(&["A", "B", "C", "x", "D"]))],
        }]);
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "heading": "Hópur A",
                "tests": [{
                    "course": "A",
                    "name": "B",
                    "type": "C",
                    "students": null,
                    "date": "D"
                }]
            }])
        );
    }

    #[test]
    fn test_row_count() {
        let schedule = DepartmentSchedule(vec![
            SubdivisionListing {
                heading: "a".into(),
                tests: vec![ExamRow::default(), ExamRow::default()],
            },
            SubdivisionListing {
                heading: "b".into(),
                tests: vec![],
            },
        ]);
        assert_eq!(schedule.row_count(), 2);
        assert_eq!(schedule.rows().count(), 2);
    }
}
