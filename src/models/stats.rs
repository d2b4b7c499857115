//! Summary statistics over every exam of every department.

use serde::{Deserialize, Serialize};

use super::DepartmentSchedule;

/// Aggregate student counts across all exam rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Smallest known student count
    pub min: Option<u64>,

    /// Largest known student count
    pub max: Option<u64>,

    /// Number of exam rows
    pub num_tests: usize,

    /// Sum of known student counts; wide enough that no sum of `u64` counts overflows
    pub num_students: u128,

    /// Mean over rows with a known count; `None` when there are none
    pub average_students: Option<f64>,

    /// Rows whose student count could not be read
    pub unknown_students: usize,
}

impl Stats {
    /// Reduce parsed schedules into summary statistics.
    pub fn from_schedules<'a, I>(schedules: I) -> Self
    where
        I: IntoIterator<Item = &'a DepartmentSchedule>,
    {
        let mut stats = Stats::default();

        for row in schedules.into_iter().flat_map(|s| s.rows()) {
            stats.num_tests += 1;
            let Some(students) = row.students else {
                stats.unknown_students += 1;
                continue;
            };
            stats.num_students += u128::from(students);
            stats.min = Some(stats.min.map_or(students, |m| m.min(students)));
            stats.max = Some(stats.max.map_or(students, |m| m.max(students)));
        }

        let counted = stats.num_tests - stats.unknown_students;
        if counted > 0 {
            stats.average_students = Some(stats.num_students as f64 / counted as f64);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamRow, SubdivisionListing};

    fn row(students: Option<u64>) -> ExamRow {
        ExamRow {
            students,
            ..ExamRow::default()
        }
    }

    fn listing(heading: &str, counts: &[Option<u64>]) -> SubdivisionListing {
        SubdivisionListing {
            heading: heading.into(),
            tests: counts.iter().copied().map(row).collect(),
        }
    }

    #[test]
    fn test_basic_arithmetic_across_departments() {
        let a = DepartmentSchedule(vec![listing("A", &[Some(10)]), listing("B", &[])]);
        let b = DepartmentSchedule(vec![listing("C", &[Some(30), Some(20)])]);

        let stats = Stats::from_schedules([&a, &b]);
        assert_eq!(stats.num_tests, 3);
        assert_eq!(stats.num_students, 60);
        assert_eq!(stats.min, Some(10));
        assert_eq!(stats.max, Some(30));
        assert_eq!(stats.average_students, Some(20.0));
        assert_eq!(stats.unknown_students, 0);
    }

    #[test]
    fn test_same_result_for_any_distribution() {
        let one = DepartmentSchedule(vec![listing("X", &[Some(20), Some(30), Some(10)])]);
        let spread = [
            DepartmentSchedule(vec![listing("X", &[Some(30)])]),
            DepartmentSchedule::default(),
            DepartmentSchedule(vec![listing("Y", &[Some(10)]), listing("Z", &[Some(20)])]),
        ];
        assert_eq!(Stats::from_schedules([&one]), Stats::from_schedules(&spread));
    }

    #[test]
    fn test_zero_rows_has_no_average() {
        let empty = [
            DepartmentSchedule::default(),
            DepartmentSchedule(vec![listing("Tómt", &[])]),
        ];
        let stats = Stats::from_schedules(&empty);
        assert_eq!(stats.num_tests, 0);
        assert_eq!(stats.num_students, 0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.average_students, None);

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["averageStudents"].is_null());
    }

    #[test]
    fn test_unknown_counts_excluded() {
        let schedule = DepartmentSchedule(vec![listing("A", &[Some(10), None, Some(30)])]);
        let stats = Stats::from_schedules([&schedule]);
        assert_eq!(stats.num_tests, 3);
        assert_eq!(stats.unknown_students, 1);
        assert_eq!(stats.num_students, 40);
        assert_eq!(stats.min, Some(10));
        assert_eq!(stats.max, Some(30));
        assert_eq!(stats.average_students, Some(20.0));
    }

    #[test]
    fn test_only_unknown_counts() {
        let schedule = DepartmentSchedule(vec![listing("A", &[None, None])]);
        let stats = Stats::from_schedules([&schedule]);
        assert_eq!(stats.num_tests, 2);
        assert_eq!(stats.average_students, None);
        assert_eq!(stats.min, None);
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let schedule = DepartmentSchedule(vec![listing("A", &[Some(u64::MAX), Some(u64::MAX)])]);
        let stats = Stats::from_schedules([&schedule]);
        assert_eq!(stats.num_students, 2 * u128::from(u64::MAX));
        assert_eq!(stats.max, Some(u64::MAX));
        assert_eq!(stats.average_students, Some(u64::MAX as f64));

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""numStudents":36893488147419103230"#));
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        for field in ["min", "max", "numTests", "numStudents", "averageStudents"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }
}
