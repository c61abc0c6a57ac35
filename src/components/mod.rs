//! UI Components
//!
//! Page views and the reusable pieces they share.

mod admin_login;
mod appeal_review;
mod area_select;
mod bike_search;
mod challan_issue;
mod challan_list;
mod challan_modals;
mod citizen_auth;
mod delete_confirm_button;
mod home_page;
mod list_controls;
mod my_challans;
mod nav_bar;
mod officer_admin;
mod public_rules;
mod rule_admin;
mod sent_challans;
mod toast_host;

pub use admin_login::AdminLogin;
pub use appeal_review::AppealReview;
pub use area_select::AreaSelect;
pub use bike_search::BikeSearch;
pub use challan_issue::ChallanIssue;
pub use challan_list::ChallanList;
pub use challan_modals::{AppealModal, PaymentModal};
pub use citizen_auth::CitizenAuth;
pub use delete_confirm_button::DeleteConfirmButton;
pub use home_page::HomePage;
pub use list_controls::ListControls;
pub use my_challans::MyChallans;
pub use nav_bar::{BikeSearchForm, NavBar};
pub use officer_admin::OfficerAdmin;
pub use public_rules::PublicRules;
pub use rule_admin::RuleAdmin;
pub use sent_challans::SentChallans;
pub use toast_host::ToastHost;

/// Local calendar date, used for active-rule and overdue checks
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Read the picked file and hand it to `keep`, reporting read failures.
/// A cleared input hands over `None`.
pub(crate) fn pick_upload(
    ctx: crate::context::AppContext,
    ev: web_sys::Event,
    keep: impl Fn(Option<crate::models::Upload>) + 'static,
) {
    let Some(file) = crate::api::picked_file(&ev) else {
        keep(None);
        return;
    };
    leptos::task::spawn_local(async move {
        if let Some(upload) = ctx.report(crate::api::read_upload(&file).await) {
            keep(Some(upload));
        }
    });
}
