/// Static application configuration. There is no runtime environment to
/// read from; everything the UI needs is fixed at build time.
pub struct Config;

impl Config {
    pub fn app_title() -> &'static str {
        "Largify Insights"
    }

    pub fn app_tagline() -> &'static str {
        "Monitor your company's performance"
    }

    /// localStorage key remembering the last open tab across visits.
    pub fn last_tab_storage_key() -> &'static str {
        "insights_last_tab"
    }
}
