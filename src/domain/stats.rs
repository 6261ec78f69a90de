//! Statistics summaries, chart ranges and the team activity feed.

use serde::{Deserialize, Serialize};

// ============================================================================
// Summaries
// ============================================================================

/// Aggregated deal counters for one user or the whole team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub deals: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub appeals: u32,
    pub checks: u32,
    /// Average check in rubles.
    pub avg_check: u64,
    /// Team summaries only, e.g. "2 minutes ago".
    #[serde(default)]
    pub last_activity: Option<String>,
}

impl StatsSummary {
    /// Share of completed deals in percent, 0 when there are no deals.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.deals == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.deals) * 100.0
    }
}

/// Per-member row of the team performance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPerformance {
    pub id: String,
    pub username: String,
    pub deals: u32,
    pub completed: u32,
    pub appeals: u32,
    pub checks: u32,
    pub last_active: String,
}

impl MemberPerformance {
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.deals == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.deals) * 100.0
    }
}

/// Entry of the team activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub username: String,
    pub action: String,
    pub details: String,
    pub time: String,
}

// ============================================================================
// Ranges and Charts
// ============================================================================

/// Which statistics tab is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsTab {
    #[default]
    My,
    Team,
}

impl StatsTab {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::My => "My statistics",
            Self::Team => "Team statistics",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::My => Self::Team,
            Self::Team => Self::My,
        }
    }
}

/// Time window of the statistics charts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatsRange {
    Today,
    #[default]
    Week,
    Month,
    /// Free-form `from`/`to` dates.
    Custom { from: String, to: String },
}

impl StatsRange {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Today => "Today",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Custom { .. } => "Custom",
        }
    }

    /// Advances today → week → month → custom → today.
    ///
    /// The custom range keeps empty dates until the user fills them in.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Today => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Custom {
                from: String::new(),
                to: String::new(),
            },
            Self::Custom { .. } => Self::Today,
        }
    }

    /// Chart points for this range.
    #[must_use]
    pub fn points(&self) -> Vec<ChartPoint> {
        const TODAY: [(&str, u32, u32); 5] = [
            ("10:00", 2, 20),
            ("12:00", 4, 55),
            ("14:00", 3, 38),
            ("16:00", 6, 80),
            ("18:00", 5, 72),
        ];
        const WEEK: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        const MONTH: [&str; 7] = ["1", "5", "10", "15", "20", "25", "30"];

        match self {
            Self::Today => TODAY
                .iter()
                .map(|&(label, deals, volume)| ChartPoint {
                    label: label.to_string(),
                    deals,
                    volume,
                })
                .collect(),
            Self::Week => scaled_points(&WEEK, 3, 45),
            Self::Month | Self::Custom { .. } => scaled_points(&MONTH, 4, 60),
        }
    }
}

fn scaled_points(labels: &[&str], deals_step: u32, volume_step: u32) -> Vec<ChartPoint> {
    labels
        .iter()
        .zip(0u32..)
        .map(|(label, i)| ChartPoint {
            label: (*label).to_string(),
            deals: (i + 2) * deals_step,
            volume: (i + 1) * volume_step,
        })
        .collect()
}

/// One bar of the deals/volume chart. Volume is in thousands of rubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub deals: u32,
    pub volume: u32,
}

/// Scales personal chart points to the team view.
#[must_use]
pub fn team_points(points: &[ChartPoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|p| ChartPoint {
            label: p.label.clone(),
            deals: (f64::from(p.deals) * 2.6).round() as u32,
            volume: (f64::from(p.volume) * 2.6).round() as u32,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate() {
        let summary = StatsSummary {
            deals: 142,
            completed: 118,
            ..StatsSummary::default()
        };
        assert!((summary.completion_rate() - 83.098_591_549_295_77).abs() < 1e-9);
        assert!(StatsSummary::default().completion_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_week_points() {
        let points = StatsRange::Week.points();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].label, "Mon");
        assert_eq!((points[0].deals, points[0].volume), (6, 45));
        assert_eq!((points[6].deals, points[6].volume), (24, 315));
    }

    #[test]
    fn test_month_and_custom_share_points() {
        let custom = StatsRange::Custom {
            from: "2026-01-01".into(),
            to: "2026-01-31".into(),
        };
        assert_eq!(custom.points(), StatsRange::Month.points());
        let month = StatsRange::Month.points();
        assert_eq!(month[1].label, "5");
        assert_eq!((month[1].deals, month[1].volume), (12, 120));
    }

    #[test]
    fn test_today_points_are_fixed() {
        let labels: Vec<String> = StatsRange::Today
            .points()
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["10:00", "12:00", "14:00", "16:00", "18:00"]);
    }

    #[test]
    fn test_range_cycle() {
        let mut range = StatsRange::Today;
        let mut names = Vec::new();
        for _ in 0..4 {
            range = range.next();
            names.push(range.as_str().to_string());
        }
        assert_eq!(names, ["Week", "Month", "Custom", "Today"]);
    }

    #[test]
    fn test_team_points_scale() {
        let team = team_points(&StatsRange::Today.points());
        assert_eq!(team[0].deals, 5);
        assert_eq!(team[3].deals, 16);
    }
}
