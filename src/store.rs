//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each view
//! re-fetches its list on mount and writes it here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::forms::ChallanUpdate;
use crate::models::{Appeal, AppealStatus, Area, Challan, Officer, Rule};

/// Lists last fetched from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat area table behind the cascading dropdowns
    pub areas: Vec<Area>,
    pub rules: Vec<Rule>,
    pub officers: Vec<Officer>,
    /// Challans issued by officers
    pub challans: Vec<Challan>,
    pub appeals: Vec<Appeal>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a rule by ID, or add it at the top when new
pub fn store_upsert_rule(store: &AppStore, rule: Rule) {
    let rules_field = store.rules();
    let mut rules = rules_field.write();
    match rules.iter().position(|r| r.id == rule.id) {
        Some(index) => rules[index] = rule,
        None => rules.insert(0, rule),
    }
}

pub fn store_remove_rule(store: &AppStore, rule_id: u32) {
    store.rules().write().retain(|r| r.id != rule_id);
}

pub fn store_remove_officer(store: &AppStore, officer_id: u32) {
    store.officers().write().retain(|o| o.id != officer_id);
}

pub fn store_add_challan(store: &AppStore, challan: Challan) {
    store.challans().write().insert(0, challan);
}

/// Apply an accepted edit to the stored challan
pub fn store_update_challan(store: &AppStore, challan_id: u32, update: &ChallanUpdate) {
    let challans_field = store.challans();
    let mut challans = challans_field.write();
    if let Some(challan) = challans.iter_mut().find(|c| c.id == challan_id) {
        update.apply_to(challan);
    }
}

pub fn store_set_appeal_status(store: &AppStore, appeal_id: u32, status: AppealStatus) {
    let appeals_field = store.appeals();
    let mut appeals = appeals_field.write();
    if let Some(appeal) = appeals.iter_mut().find(|a| a.id == appeal_id) {
        appeal.status = status;
    }
}
