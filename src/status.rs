//! Challan Status Badges
//!
//! What a citizen or officer sees next to a challan, and what they may do
//! with it.

use chrono::NaiveDate;

use crate::models::{Challan, ChallanStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Paid,
    Unpaid,
    Overdue,
    Cancelled,
    UnderAppeal,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Paid => "Paid",
            Badge::Unpaid => "Unpaid",
            Badge::Overdue => "Overdue",
            Badge::Cancelled => "Cancelled",
            Badge::UnderAppeal => "Under Appeal",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Badge::Paid => "badge badge-paid",
            Badge::Unpaid => "badge badge-unpaid",
            Badge::Overdue => "badge badge-overdue",
            Badge::Cancelled => "badge badge-cancelled",
            Badge::UnderAppeal => "badge badge-appeal",
        }
    }
}

/// Overdue replaces Unpaid once the due date has passed
pub fn badge(challan: &Challan, today: NaiveDate) -> Badge {
    match challan.status {
        ChallanStatus::Paid => Badge::Paid,
        ChallanStatus::Cancelled => Badge::Cancelled,
        ChallanStatus::UnderAppeal => Badge::UnderAppeal,
        ChallanStatus::Unpaid if challan.is_overdue(today) => Badge::Overdue,
        ChallanStatus::Unpaid => Badge::Unpaid,
    }
}

/// Only unpaid challans take a payment proof or an appeal
pub fn is_actionable(challan: &Challan) -> bool {
    challan.status == ChallanStatus::Unpaid
}

/// Values an editor row shows for a stored challan: rule id (blank when
/// unset) and status key. `None` once the challan is gone.
pub fn editor_values(challans: &[Challan], id: u32) -> Option<(String, &'static str)> {
    challans.iter().find(|c| c.id == id).map(|c| {
        let rule = c.rule.map(|r| r.to_string()).unwrap_or_default();
        (rule, c.status.key())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_challan(status: ChallanStatus, due: &str) -> Challan {
        Challan {
            id: 1,
            bike_number: "LEB-1234".to_string(),
            rule: Some(1),
            rule_name: "No Helmet".to_string(),
            amount_charged: 500.0,
            status,
            challan_date: date("2024-01-01").and_hms_opt(9, 0, 0).unwrap(),
            due_date: date(due),
            area: Some(1),
            officer: Some(1),
            payment_proof: None,
        }
    }

    #[test]
    fn test_overdue_only_when_unpaid_and_past_due() {
        let today = date("2024-02-01");
        assert_eq!(badge(&make_challan(ChallanStatus::Unpaid, "2024-01-31"), today), Badge::Overdue);
        assert_eq!(badge(&make_challan(ChallanStatus::Unpaid, "2024-02-01"), today), Badge::Unpaid);
        assert_eq!(badge(&make_challan(ChallanStatus::Paid, "2024-01-01"), today), Badge::Paid);
        assert_eq!(
            badge(&make_challan(ChallanStatus::UnderAppeal, "2024-01-01"), today),
            Badge::UnderAppeal
        );
        assert_eq!(
            badge(&make_challan(ChallanStatus::Cancelled, "2024-01-01"), today),
            Badge::Cancelled
        );
    }

    #[test]
    fn test_actions_limited_to_unpaid() {
        assert!(is_actionable(&make_challan(ChallanStatus::Unpaid, "2024-01-31")));
        assert!(!is_actionable(&make_challan(ChallanStatus::Paid, "2024-01-31")));
        assert!(!is_actionable(&make_challan(ChallanStatus::UnderAppeal, "2024-01-31")));
    }

    #[test]
    fn test_editor_values_follow_stored_challan() {
        let mut challans = vec![make_challan(ChallanStatus::Unpaid, "2024-02-01")];
        assert_eq!(editor_values(&challans, 1), Some(("1".to_string(), "Unpaid")));
        assert_eq!(editor_values(&challans, 2), None);

        challans[0].rule = None;
        challans[0].status = ChallanStatus::UnderAppeal;
        assert_eq!(editor_values(&challans, 1), Some((String::new(), "UnderAppeal")));
    }
}
