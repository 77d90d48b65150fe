use serde::{Deserialize, Serialize};

/// Identifier of one of the five dashboard panels.
///
/// The set is closed: navigation, persistence and rendering all go through
/// this enum, so a selection can never name a panel that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightTab {
    Overview,
    Usage,
    Subscription,
    Trends,
    Support,
}

impl InsightTab {
    /// Navigation order. The nav bar iterates this list, never a keyed map,
    /// so tab order is deterministic.
    pub const ALL: [InsightTab; 5] = [
        InsightTab::Overview,
        InsightTab::Usage,
        InsightTab::Subscription,
        InsightTab::Trends,
        InsightTab::Support,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InsightTab::Overview => "Overview",
            InsightTab::Usage => "Usage",
            InsightTab::Subscription => "Subscription",
            InsightTab::Trends => "Trends",
            InsightTab::Support => "Support",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InsightTab::Overview => "👥",
            InsightTab::Usage => "⚡",
            InsightTab::Subscription => "💳",
            InsightTab::Trends => "📈",
            InsightTab::Support => "💬",
        }
    }

    /// Stable string form used when persisting the last open tab.
    pub fn as_str(&self) -> &'static str {
        self.label()
    }

    /// Total decode: anything outside the navigation set falls back to
    /// `Overview`, so a restored selection can never point at a missing
    /// panel.
    pub fn from_str(value: &str) -> InsightTab {
        match value {
            "Usage" => InsightTab::Usage,
            "Subscription" => InsightTab::Subscription,
            "Trends" => InsightTab::Trends,
            "Support" => InsightTab::Support,
            _ => InsightTab::Overview,
        }
    }
}

/// A named key metric with a preformatted display value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricRow {
    pub name: &'static str,
    pub value: &'static str,
}

/// One subscription tier and its share of the client base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierRow {
    pub tier: &'static str,
    pub clients: &'static str,
    pub percentage: &'static str,
}

/// A recently onboarded client.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRow {
    pub id: &'static str,
    pub name: &'static str,
}

/// One platform-usage metric row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageRow {
    pub metric: &'static str,
    pub value: &'static str,
}

/// Monthly recurring revenue for one month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MrrRow {
    pub month: &'static str,
    pub mrr: &'static str,
}

/// Total subscription revenue for one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueRow {
    pub year: &'static str,
    pub revenue: &'static str,
}

/// Trial-to-paid conversion rate for one month.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionRow {
    pub month: &'static str,
    pub rate: &'static str,
}

/// Lifecycle state of a support ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Badge palette: one `(background, text)` class pair per status. The
    /// match is exhaustive, so every status maps to a defined pair.
    pub fn badge_colors(&self) -> (&'static str, &'static str) {
        match self {
            TicketStatus::Open => (
                "bg-red-100 dark:bg-red-900/50",
                "text-red-800 dark:text-red-400",
            ),
            TicketStatus::InProgress => (
                "bg-yellow-100 dark:bg-yellow-900/50",
                "text-yellow-800 dark:text-yellow-400",
            ),
            TicketStatus::Closed => (
                "bg-green-100 dark:bg-green-900/50",
                "text-green-800 dark:text-green-400",
            ),
        }
    }

    pub fn badge_classes(&self) -> String {
        let (background, text) = self.badge_colors();
        format!("{background} {text}")
    }
}

/// A support ticket as listed on the Support panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TicketRow {
    pub id: &'static str,
    pub subject: &'static str,
    pub status: TicketStatus,
}

/// Value of a demographics cell: either a single preformatted string or an
/// ordered list of strings. Rendering dispatches on the tag; scalars are
/// never coerced into lists or vice versa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DemographicValue {
    Scalar(&'static str),
    List(&'static [&'static str]),
}

/// One row of the user-demographics table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemographicRow {
    pub metric: &'static str,
    pub value: DemographicValue,
}

/// A single chart sample: category label plus numeric value. Sequences of
/// points are ordered chronologically and plotted as given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tab_labels_are_unique() {
        let labels: HashSet<&str> = InsightTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels.len(), InsightTab::ALL.len());
    }

    #[test]
    fn tab_order_is_fixed() {
        let labels: Vec<&str> = InsightTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Usage", "Subscription", "Trends", "Support"]
        );
    }

    #[test]
    fn tab_decode_round_trips() {
        for tab in InsightTab::ALL {
            assert_eq!(InsightTab::from_str(tab.as_str()), tab);
        }
    }

    #[test]
    fn tab_decode_falls_back_to_overview() {
        assert_eq!(InsightTab::from_str("Billing"), InsightTab::Overview);
        assert_eq!(InsightTab::from_str(""), InsightTab::Overview);
        assert_eq!(InsightTab::from_str("overview"), InsightTab::Overview);
    }

    #[test]
    fn every_tab_has_an_icon() {
        for tab in InsightTab::ALL {
            assert!(!tab.icon().is_empty());
        }
    }

    #[test]
    fn badge_colors_are_defined_and_distinct() {
        let statuses = [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ];
        let pairs: Vec<(&str, &str)> = statuses.iter().map(|s| s.badge_colors()).collect();
        for (background, text) in &pairs {
            assert!(!background.is_empty());
            assert!(!text.is_empty());
        }
        let unique: HashSet<(&str, &str)> = pairs.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn badge_classes_combine_both_halves() {
        let (background, text) = TicketStatus::InProgress.badge_colors();
        let combined = TicketStatus::InProgress.badge_classes();
        assert!(combined.contains(background));
        assert!(combined.contains(text));
    }

    #[test]
    fn in_progress_label_has_a_space() {
        assert_eq!(TicketStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn demographic_value_preserves_shape() {
        let scalar = DemographicValue::Scalar("5,000");
        let list = DemographicValue::List(&["USA: 200", "Canada: 150", "UK: 100"]);
        match scalar {
            DemographicValue::Scalar(text) => assert_eq!(text, "5,000"),
            DemographicValue::List(_) => panic!("scalar must stay scalar"),
        }
        match list {
            DemographicValue::List(items) => {
                assert_eq!(items, &["USA: 200", "Canada: 150", "UK: 100"]);
            }
            DemographicValue::Scalar(_) => panic!("list must stay a list"),
        }
    }
}
