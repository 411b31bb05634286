use rusty_money::iso;

use crate::models::DashboardStats;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: &'static str,
}

/// The six KPI cards of the summary row, in display order.
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Students",
            value: stats.total_students.to_string(),
            icon: "fas fa-users",
            color: "#667eea",
        },
        StatCard {
            title: "Total Courses",
            value: stats.total_courses.to_string(),
            icon: "fas fa-book",
            color: "#764ba2",
        },
        StatCard {
            title: "Total Enrollments",
            value: stats.total_enrollments.to_string(),
            icon: "fas fa-pen",
            color: "#f093fb",
        },
        StatCard {
            title: "Average Grade",
            value: format!("{}%", stats.avg_grade),
            icon: "fas fa-star",
            color: "#4facfe",
        },
        StatCard {
            title: "Total Payments",
            value: format_millions(stats.total_payments),
            icon: "fas fa-money-bill-wave",
            color: "#43e97b",
        },
        StatCard {
            title: "Avg Attendance",
            value: format!("{:.1} hrs", stats.avg_attendance),
            icon: "fas fa-chart-bar",
            color: "#fa709a",
        },
    ]
}

/// Amount in Ugandan shillings, in millions with one decimal.
pub fn format_millions(amount: f64) -> String {
    format!("{} {:.1}M", iso::UGX.iso_alpha_code, amount / 1_000_000.0)
}

/// Colour band of a predicted grade. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Fair,
    AtRisk,
}

impl GradeBand {
    pub fn of(grade: f64) -> Self {
        if grade >= 80.0 {
            GradeBand::Excellent
        } else if grade >= 70.0 {
            GradeBand::Good
        } else if grade >= 60.0 {
            GradeBand::Fair
        } else {
            GradeBand::AtRisk
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "#43e97b",
            GradeBand::Good => "#4facfe",
            GradeBand::Fair => "#fee140",
            GradeBand::AtRisk => "#fa709a",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "excellent",
            GradeBand::Good => "good",
            GradeBand::Fair => "fair",
            GradeBand::AtRisk => "at risk",
        }
    }
}

pub fn grade_color(grade: f64) -> &'static str {
    GradeBand::of(grade).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_cards_match_reference_payload() {
        let stats = DashboardStats {
            total_students: 1200,
            total_courses: 40,
            total_enrollments: 3500,
            avg_grade: 72.5,
            total_payments: 450_000_000.0,
            avg_attendance: 5.3,
        };
        let cards = stat_cards(&stats);
        let value = |title: &str| {
            cards
                .iter()
                .find(|c| c.title == title)
                .map(|c| c.value.clone())
                .unwrap()
        };

        assert_eq!(cards.len(), 6);
        assert_eq!(value("Total Students"), "1200");
        assert_eq!(value("Total Courses"), "40");
        assert_eq!(value("Total Enrollments"), "3500");
        assert_eq!(value("Average Grade"), "72.5%");
        assert_eq!(value("Total Payments"), "UGX 450.0M");
        assert_eq!(value("Avg Attendance"), "5.3 hrs");
    }

    #[test]
    fn whole_average_grade_has_no_decimals() {
        let stats = DashboardStats { avg_grade: 72.0, ..Default::default() };
        assert_eq!(stat_cards(&stats)[3].value, "72%");
    }

    #[test]
    fn grade_bands_include_lower_bound() {
        assert_eq!(grade_color(80.0), "#43e97b");
        assert_eq!(grade_color(79.9), "#4facfe");
        assert_eq!(grade_color(70.0), "#4facfe");
        assert_eq!(grade_color(60.0), "#fee140");
        assert_eq!(grade_color(59.0), "#fa709a");
        assert_eq!(GradeBand::of(f64::NAN), GradeBand::AtRisk);
    }
}
