//! Turns the six chart payloads into render-ready plans.
//!
//! Every payload is a pair of parallel arrays. A plan holds one entry per
//! index present in both arrays, so mismatched lengths never panic and never
//! produce half-filled entries.

use crate::models::{
    AttendanceByCourse, DashboardData, DepartmentCounts, GradeDistribution, GradesOverTime,
    PaymentStatus, TopStudents,
};

/// Slice colours, cycled by entry index.
pub const PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a", "#fee140", "#30cfd0",
];

pub const ATTENDANCE_MAX_ENTRIES: usize = 8;
pub const ATTENDANCE_LABEL_LIMIT: usize = 20;
pub const TOP_STUDENT_LABEL_LIMIT: usize = 15;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Pie,
    Donut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: f64,
    /// Per-entry colour; `None` means the plan's series colour.
    pub color: Option<&'static str>,
    /// Text drawn on the slice, for pie-style charts.
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub series_name: &'static str,
    pub series_color: &'static str,
    pub entries: Vec<ChartEntry>,
}

impl ChartPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

/// One of the six dashboard datasets.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDataset {
    DepartmentCounts(DepartmentCounts),
    GradesOverTime(GradesOverTime),
    PaymentStatus(PaymentStatus),
    AttendanceByCourse(AttendanceByCourse),
    GradeDistribution(GradeDistribution),
    TopStudents(TopStudents),
}

impl ChartDataset {
    /// The six datasets of a dashboard, in gallery order.
    pub fn all(data: &DashboardData) -> Vec<ChartDataset> {
        vec![
            ChartDataset::DepartmentCounts(data.department_counts.clone()),
            ChartDataset::GradesOverTime(data.grades_over_time.clone()),
            ChartDataset::PaymentStatus(data.payment_status.clone()),
            ChartDataset::GradeDistribution(data.grade_distribution.clone()),
            ChartDataset::AttendanceByCourse(data.attendance_by_course.clone()),
            ChartDataset::TopStudents(data.top_students.clone()),
        ]
    }

    pub fn plan(&self) -> ChartPlan {
        match self {
            ChartDataset::DepartmentCounts(d) => ChartPlan {
                id: "chart-students-by-department",
                title: "Students by Department",
                kind: ChartKind::Bar,
                series_name: "students",
                series_color: "#667eea",
                entries: plain_entries(&d.departments, &d.counts),
            },
            ChartDataset::GradesOverTime(d) => ChartPlan {
                id: "chart-grades-over-time",
                title: "Average Grades Over Time",
                kind: ChartKind::Line,
                series_name: "grade",
                series_color: "#764ba2",
                entries: plain_entries(&d.periods, &d.grades),
            },
            ChartDataset::PaymentStatus(d) => ChartPlan {
                id: "chart-payment-status",
                title: "Payment Status Distribution",
                kind: ChartKind::Pie,
                series_name: "payments",
                series_color: PALETTE[0],
                entries: percentage_entries(&d.statuses, &d.counts),
            },
            ChartDataset::GradeDistribution(d) => ChartPlan {
                id: "chart-grade-distribution",
                title: "Grade Distribution",
                kind: ChartKind::Donut,
                series_name: "grades",
                series_color: PALETTE[0],
                entries: zip_entries(&d.grades, &d.counts)
                    .enumerate()
                    .map(|(i, (label, value))| ChartEntry {
                        text: Some(format!("{}: {}", label, value)),
                        label: label.clone(),
                        value,
                        color: Some(palette_color(i)),
                    })
                    .collect(),
            },
            ChartDataset::AttendanceByCourse(d) => ChartPlan {
                id: "chart-attendance-by-course",
                title: "Attendance by Course (Top 8)",
                kind: ChartKind::HorizontalBar,
                series_name: "hours",
                series_color: "#4facfe",
                entries: zip_entries(&d.courses, &d.avg_hours)
                    .take(ATTENDANCE_MAX_ENTRIES)
                    .map(|(label, value)| ChartEntry {
                        label: truncate_label(label, ATTENDANCE_LABEL_LIMIT),
                        value,
                        color: None,
                        text: None,
                    })
                    .collect(),
            },
            ChartDataset::TopStudents(d) => ChartPlan {
                id: "chart-top-students",
                title: "Top 10 Students",
                kind: ChartKind::Bar,
                series_name: "grade",
                series_color: "#43e97b",
                entries: zip_entries(&d.students, &d.grades)
                    .map(|(label, value)| ChartEntry {
                        label: truncate_label(label, TOP_STUDENT_LABEL_LIMIT),
                        value,
                        color: None,
                        text: None,
                    })
                    .collect(),
            },
        }
    }
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Cut `label` to `limit` characters and mark the cut.
pub fn truncate_label(label: &str, limit: usize) -> String {
    if label.chars().count() > limit {
        let head: String = label.chars().take(limit).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        label.to_string()
    }
}

fn zip_entries<'a>(labels: &'a [String], values: &'a [f64]) -> impl Iterator<Item = (&'a String, f64)> {
    labels.iter().zip(values.iter().copied())
}

fn plain_entries(labels: &[String], values: &[f64]) -> Vec<ChartEntry> {
    zip_entries(labels, values)
        .map(|(label, value)| ChartEntry {
            label: label.clone(),
            value,
            color: None,
            text: None,
        })
        .collect()
}

fn percentage_entries(labels: &[String], values: &[f64]) -> Vec<ChartEntry> {
    let pairs: Vec<_> = zip_entries(labels, values).collect();
    let total: f64 = pairs.iter().map(|(_, v)| v).sum();

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let percent = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            ChartEntry {
                text: Some(format!("{}: {:.0}%", label, percent.round())),
                label: label.clone(),
                value,
                color: Some(palette_color(i)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn payment_status_renders_percentages() {
        let plan = ChartDataset::PaymentStatus(PaymentStatus {
            statuses: strings(&["Paid", "Pending"]),
            counts: vec![80.0, 20.0],
        })
        .plan();

        let texts: Vec<_> = plan.entries.iter().map(|e| e.text.clone().unwrap()).collect();
        assert_eq!(texts, vec!["Paid: 80%", "Pending: 20%"]);
        assert_eq!(plan.entries[0].color, Some("#667eea"));
        assert_eq!(plan.entries[1].color, Some("#764ba2"));
        assert_eq!(plan.kind, ChartKind::Pie);
    }

    #[test]
    fn payment_status_with_zero_total_has_zero_percentages() {
        let plan = ChartDataset::PaymentStatus(PaymentStatus {
            statuses: strings(&["Paid"]),
            counts: vec![0.0],
        })
        .plan();
        assert_eq!(plan.entries[0].text.as_deref(), Some("Paid: 0%"));
    }

    #[test]
    fn palette_cycles_after_eight_entries() {
        let labels: Vec<String> = (0..10).map(|i| format!("G{}", i)).collect();
        let plan = ChartDataset::GradeDistribution(GradeDistribution {
            grades: labels,
            counts: vec![1.0; 10],
        })
        .plan();

        assert_eq!(plan.entries[8].color, Some(PALETTE[0]));
        assert_eq!(plan.entries[9].color, Some(PALETTE[1]));
        assert_eq!(plan.entries[0].text.as_deref(), Some("G0: 1"));
        assert_eq!(plan.kind, ChartKind::Donut);
    }

    #[test]
    fn attendance_keeps_first_eight_and_truncates_labels() {
        let courses: Vec<String> = (0..12)
            .map(|i| format!("Introduction to Course Number {}", i))
            .collect();
        let plan = ChartDataset::AttendanceByCourse(AttendanceByCourse {
            courses,
            avg_hours: (0..12).map(f64::from).collect(),
        })
        .plan();

        assert_eq!(plan.entries.len(), 8);
        assert_eq!(plan.values(), (0..8).map(f64::from).collect::<Vec<_>>());
        assert_eq!(plan.entries[0].label, "Introduction to Cour...");
        assert_eq!(plan.entries[0].label.chars().count(), 23);
    }

    #[test]
    fn attendance_short_labels_are_untouched() {
        let plan = ChartDataset::AttendanceByCourse(AttendanceByCourse {
            courses: strings(&["Exactly twenty chars"]),
            avg_hours: vec![3.0],
        })
        .plan();
        assert_eq!(plan.entries[0].label, "Exactly twenty chars");
    }

    #[test]
    fn top_students_truncate_at_fifteen() {
        let plan = ChartDataset::TopStudents(TopStudents {
            students: strings(&["Alexandra Nakimuli-Ssempijja", "Jane Doe"]),
            grades: vec![95.0, 90.0],
        })
        .plan();
        assert_eq!(plan.labels(), vec!["Alexandra Nakim...", "Jane Doe"]);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_label("Ékòlójì ñ", 3), "Ékò...");
    }

    #[test]
    fn mismatched_arrays_render_shortest_length() {
        let plan = ChartDataset::DepartmentCounts(DepartmentCounts {
            departments: strings(&["Computing", "Law", "Medicine"]),
            counts: vec![10.0, 20.0],
        })
        .plan();
        assert_eq!(plan.labels(), vec!["Computing", "Law"]);

        let plan = ChartDataset::GradesOverTime(GradesOverTime {
            periods: strings(&["2024-01"]),
            grades: vec![70.0, 71.0, 72.0],
        })
        .plan();
        assert_eq!(plan.entries.len(), 1);
    }

    #[test]
    fn grades_over_time_keeps_input_order() {
        let plan = ChartDataset::GradesOverTime(GradesOverTime {
            periods: strings(&["2024-03", "2024-01", "2024-02"]),
            grades: vec![3.0, 1.0, 2.0],
        })
        .plan();
        assert_eq!(plan.labels(), vec!["2024-03", "2024-01", "2024-02"]);
        assert_eq!(plan.kind, ChartKind::Line);
    }

    #[test]
    fn empty_dataset_gives_empty_plan() {
        for dataset in ChartDataset::all(&DashboardData::default()) {
            assert!(dataset.plan().is_empty());
        }
    }
}
