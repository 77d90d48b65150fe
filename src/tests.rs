#[cfg(test)]
mod tests {
    use crate::components::chart_renderer::{line_path, point_positions, value_axis};
    use crate::components::common_toast::Toast;
    use crate::config::Config;
    use crate::data::{OVERVIEW_METRICS, RECENT_TICKETS, USER_GROWTH};
    use crate::models::{InsightTab, TicketStatus};

    // Cross-module properties; per-module behavior is tested next to the
    // code it belongs to.

    #[test]
    fn navigation_set_matches_the_five_panels() {
        assert_eq!(InsightTab::ALL.len(), 5);
        assert_eq!(InsightTab::ALL[0], InsightTab::Overview);
        assert_eq!(InsightTab::ALL[4], InsightTab::Support);
    }

    #[test]
    fn restored_selection_is_always_a_real_panel() {
        // Whatever localStorage held, the decoded tab is one of ALL.
        for stored in ["Overview", "Trends", "not-a-tab", "", "SUPPORT"] {
            let tab = InsightTab::from_str(stored);
            assert!(InsightTab::ALL.contains(&tab));
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_idempotent() {
        let first = InsightTab::from_str("Usage");
        let second = InsightTab::from_str("Usage");
        assert_eq!(first, second);
    }

    #[test]
    fn every_listed_ticket_status_has_a_badge() {
        for ticket in RECENT_TICKETS {
            let (background, text) = ticket.status.badge_colors();
            assert!(!background.is_empty());
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn badge_mapping_is_total_over_the_enumeration() {
        let pairs = [
            TicketStatus::Open.badge_colors(),
            TicketStatus::InProgress.badge_colors(),
            TicketStatus::Closed.badge_colors(),
        ];
        assert_ne!(pairs[0], pairs[1]);
        assert_ne!(pairs[1], pairs[2]);
        assert_ne!(pairs[0], pairs[2]);
    }

    #[test]
    fn every_overview_metric_has_an_acknowledgement() {
        for metric in OVERVIEW_METRICS {
            let toast = Toast::navigation_stub(metric.name);
            assert!(toast.message.contains(metric.name));
        }
    }

    #[test]
    fn growth_chart_geometry_follows_the_data() {
        let max = USER_GROWTH.iter().map(|p| p.value).fold(0.0, f64::max);
        let (top, ticks) = value_axis(max);
        assert!(top >= max);
        assert_eq!(ticks.first(), Some(&0.0));

        let positions = point_positions(USER_GROWTH, 640.0, 260.0, top);
        assert_eq!(positions.len(), USER_GROWTH.len());
        let path = line_path(&positions);
        assert!(path.starts_with("M "));
    }

    #[test]
    fn storage_keys_are_distinct_and_nonempty() {
        assert!(!Config::last_tab_storage_key().is_empty());
        assert_ne!(Config::last_tab_storage_key(), "analytics_consent");
    }
}
