//! Fixed datasets backing the dashboard panels.
//!
//! Everything on screen comes from these constants; nothing is fetched or
//! computed at runtime.

use crate::models::{
    ClientRow, ConversionRow, DemographicRow, DemographicValue, MetricRow, MrrRow, RevenueRow,
    SeriesPoint, TicketRow, TicketStatus, TierRow, UsageRow,
};

/// Per-client user growth over the last six months, oldest first. The chart
/// plots this sequence as given.
pub const USER_GROWTH: &[SeriesPoint] = &[
    SeriesPoint { label: "Jan", value: 4000.0 },
    SeriesPoint { label: "Feb", value: 3000.0 },
    SeriesPoint { label: "Mar", value: 2000.0 },
    SeriesPoint { label: "Apr", value: 2780.0 },
    SeriesPoint { label: "May", value: 1890.0 },
    SeriesPoint { label: "Jun", value: 2390.0 },
];

/// Key client metrics shown on the Overview panel. Each row is actionable:
/// activating it raises an acknowledgement naming the metric.
pub const OVERVIEW_METRICS: &[MetricRow] = &[
    MetricRow { name: "Total Active Clients", value: "1,100" },
    MetricRow { name: "New Clients This Month", value: "50" },
    MetricRow { name: "Client Retention Rate", value: "92%" },
    MetricRow { name: "Churned Clients", value: "15" },
];

pub const SUBSCRIPTION_TIERS: &[TierRow] = &[
    TierRow { tier: "Free", clients: "400", percentage: "36%" },
    TierRow { tier: "Pro", clients: "550", percentage: "50%" },
    TierRow { tier: "Enterprise", clients: "150", percentage: "14%" },
];

pub const NEW_CLIENTS: &[ClientRow] = &[
    ClientRow { id: "C101", name: "AlphaCorp" },
    ClientRow { id: "C102", name: "Beta Solutions" },
    ClientRow { id: "C103", name: "Gamma Inc." },
];

pub const USAGE_METRICS: &[UsageRow] = &[
    UsageRow { metric: "Avg. Daily Active Users", value: "850 per client" },
    UsageRow { metric: "Peak Usage Times", value: "10:00 AM - 12:00 PM" },
    UsageRow {
        metric: "Most Used Modules",
        value: "Sales (45%), Inventory (30%), Finance (25%)",
    },
];

/// Monthly recurring revenue, most recent month first.
pub const MRR_BY_MONTH: &[MrrRow] = &[
    MrrRow { month: "Jun", mrr: "$250,000" },
    MrrRow { month: "May", mrr: "$245,000" },
    MrrRow { month: "Apr", mrr: "$240,000" },
];

pub const REVENUE_BY_YEAR: &[RevenueRow] = &[
    RevenueRow { year: "2024", revenue: "$1.5M" },
    RevenueRow { year: "2023", revenue: "$1.2M" },
];

pub const CONVERSION_RATES: &[ConversionRow] = &[
    ConversionRow { month: "Jun", rate: "15%" },
    ConversionRow { month: "May", rate: "14%" },
    ConversionRow { month: "Apr", rate: "16%" },
];

/// User demographics. The region breakdown is the one list-valued cell in
/// the dashboard; the other rows are scalars.
pub const USER_DEMOGRAPHICS: &[DemographicRow] = &[
    DemographicRow {
        metric: "Total Users Registered",
        value: DemographicValue::Scalar("5,000"),
    },
    DemographicRow {
        metric: "Admin vs. Employee Roles",
        value: DemographicValue::Scalar("300 Admins, 4,700 Employees"),
    },
    DemographicRow {
        metric: "New users by region/country",
        value: DemographicValue::List(&["USA: 200", "Canada: 150", "UK: 100"]),
    },
];

pub const RECENT_TICKETS: &[TicketRow] = &[
    TicketRow {
        id: "T234",
        subject: "Login issue on mobile",
        status: TicketStatus::Open,
    },
    TicketRow {
        id: "T233",
        subject: "Data sync error",
        status: TicketStatus::InProgress,
    },
    TicketRow {
        id: "T232",
        subject: "Report generation bug",
        status: TicketStatus::Closed,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_series_is_the_fixed_six_point_sequence() {
        assert_eq!(USER_GROWTH.len(), 6);
        let labels: Vec<&str> = USER_GROWTH.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(USER_GROWTH[0].value, 4000.0);
        assert_eq!(USER_GROWTH[5].value, 2390.0);
    }

    #[test]
    fn every_ticket_status_appears_exactly_once() {
        let open = RECENT_TICKETS
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count();
        let in_progress = RECENT_TICKETS
            .iter()
            .filter(|t| t.status == TicketStatus::InProgress)
            .count();
        let closed = RECENT_TICKETS
            .iter()
            .filter(|t| t.status == TicketStatus::Closed)
            .count();
        assert_eq!((open, in_progress, closed), (1, 1, 1));
    }

    #[test]
    fn demographics_has_exactly_one_list_row() {
        let lists: Vec<&DemographicRow> = USER_DEMOGRAPHICS
            .iter()
            .filter(|row| matches!(row.value, DemographicValue::List(_)))
            .collect();
        assert_eq!(lists.len(), 1);
        match lists[0].value {
            DemographicValue::List(items) => {
                assert_eq!(items, &["USA: 200", "Canada: 150", "UK: 100"]);
            }
            DemographicValue::Scalar(_) => unreachable!(),
        }
    }

    #[test]
    fn registered_users_stays_scalar() {
        let row = USER_DEMOGRAPHICS
            .iter()
            .find(|row| row.metric == "Total Users Registered")
            .expect("row present");
        assert_eq!(row.value, DemographicValue::Scalar("5,000"));
    }

    #[test]
    fn tier_percentages_cover_the_client_base() {
        let labels: Vec<&str> = SUBSCRIPTION_TIERS.iter().map(|t| t.tier).collect();
        assert_eq!(labels, vec!["Free", "Pro", "Enterprise"]);
    }
}
