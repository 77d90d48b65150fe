pub mod action_button;
pub mod chart_renderer;
pub mod common_toast;
pub mod footer;
pub mod insights {
    pub mod overview_tab;
    pub mod subscription_tab;
    pub mod support_tab;
    pub mod trends_tab;
    pub mod usage_tab;
}
pub mod nav;
pub mod styled_container;
