//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Three-level administrative area (city / zone / sub-area)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: u32,
    pub city: String,
    pub zone: String,
    pub sub_area: String,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.city, self.zone, self.sub_area)
    }
}

/// Officer rank, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Constable,
    #[serde(rename = "Head Constable")]
    HeadConstable,
    #[serde(rename = "ASI")]
    Asi,
    #[serde(rename = "SI")]
    Si,
    Inspector,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Constable,
        Rank::HeadConstable,
        Rank::Asi,
        Rank::Si,
        Rank::Inspector,
    ];

    /// Label used on the wire and in dropdowns
    pub fn label(self) -> &'static str {
        match self {
            Rank::Constable => "Constable",
            Rank::HeadConstable => "Head Constable",
            Rank::Asi => "ASI",
            Rank::Si => "SI",
            Rank::Inspector => "Inspector",
        }
    }

    pub fn from_label(label: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OfficerStatus {
    #[default]
    Active,
    Leave,
    Inactive,
}

impl OfficerStatus {
    pub const ALL: [OfficerStatus; 3] = [
        OfficerStatus::Active,
        OfficerStatus::Leave,
        OfficerStatus::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OfficerStatus::Active => "Active",
            OfficerStatus::Leave => "Leave",
            OfficerStatus::Inactive => "Inactive",
        }
    }

    pub fn from_label(label: &str) -> Option<OfficerStatus> {
        OfficerStatus::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Officer / admin account (password is never read back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    pub id: u32,
    pub name: String,
    pub rank: Rank,
    pub email: String,
    #[serde(default)]
    pub area: Option<u32>,
    #[serde(default)]
    pub area_details: Option<Area>,
    #[serde(default)]
    pub status: OfficerStatus,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

impl Officer {
    pub fn city(&self) -> &str {
        self.area_details.as_ref().map(|a| a.city.as_str()).unwrap_or("")
    }

    pub fn zone(&self) -> &str {
        self.area_details.as_ref().map(|a| a.zone.as_str()).unwrap_or("")
    }
}

/// Traffic rule with its fine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub rule_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exemption: Option<String>,
    #[serde(with = "amount")]
    pub fine_amount: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub other_penalties: Option<String>,
}

impl Rule {
    /// A rule is enforceable from its start date on
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.start_date <= today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallanStatus {
    Paid,
    Unpaid,
    Cancelled,
    UnderAppeal,
}

impl ChallanStatus {
    pub const ALL: [ChallanStatus; 4] = [
        ChallanStatus::Unpaid,
        ChallanStatus::Paid,
        ChallanStatus::Cancelled,
        ChallanStatus::UnderAppeal,
    ];

    /// Wire value
    pub fn key(self) -> &'static str {
        match self {
            ChallanStatus::Paid => "Paid",
            ChallanStatus::Unpaid => "Unpaid",
            ChallanStatus::Cancelled => "Cancelled",
            ChallanStatus::UnderAppeal => "UnderAppeal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChallanStatus::UnderAppeal => "Under Appeal",
            other => other.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<ChallanStatus> {
        ChallanStatus::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Traffic citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challan {
    pub id: u32,
    pub bike_number: String,
    #[serde(default)]
    pub rule: Option<u32>,
    #[serde(default)]
    pub rule_name: String,
    #[serde(with = "amount")]
    pub amount_charged: f64,
    pub status: ChallanStatus,
    #[serde(with = "datetime")]
    pub challan_date: NaiveDateTime,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub area: Option<u32>,
    #[serde(default)]
    pub officer: Option<u32>,
    #[serde(default)]
    pub payment_proof: Option<String>,
}

impl Challan {
    /// Unpaid past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ChallanStatus::Unpaid && self.due_date < today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppealStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AppealStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppealStatus::Pending => "Pending",
            AppealStatus::Approved => "Approved",
            AppealStatus::Rejected => "Rejected",
        }
    }
}

/// Citizen contest of a challan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: u32,
    pub challan: u32,
    pub reason: String,
    #[serde(default)]
    pub evidence_url: Option<String>,
    #[serde(default)]
    pub status: AppealStatus,
    #[serde(default, with = "datetime::option")]
    pub submitted_at: Option<NaiveDateTime>,
}

/// Who is signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Officer(Rank),
    Citizen,
}

impl Role {
    /// Value kept in browser storage
    pub fn storage_value(self) -> &'static str {
        match self {
            Role::Officer(rank) => rank.label(),
            Role::Citizen => "Citizen",
        }
    }

    pub fn from_storage(value: &str) -> Option<Role> {
        if value == "Citizen" {
            return Some(Role::Citizen);
        }
        Rank::from_label(value).map(Role::Officer)
    }

    pub fn is_officer(self) -> bool {
        matches!(self, Role::Officer(_))
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginGrant {
    pub access: String,
    pub refresh: String,
    pub display_name: String,
    pub role: Role,
}

/// Image picked in a file input, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Inline `data:` URL carrying the file bytes as base64
    pub fn data_url(&self) -> String {
        let mime = if self.mime.is_empty() { "application/octet-stream" } else { &self.mime };
        format!("data:{};base64,{}", mime, STANDARD.encode(&self.bytes))
    }
}

/// Display form of a money amount: `500` or `500.50`
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Decimal fields arrive either as JSON numbers or as strings like `"500.00"`
pub mod amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Raw::deserialize(d)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(*value)
    }
}

/// Timestamps arrive as RFC 3339, naive `YYYY-MM-DDTHH:MM:SS`, or a bare date
pub mod datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised timestamp: {}", raw)))
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            let raw = Option::<String>::deserialize(d)?;
            match raw {
                None => Ok(None),
                Some(s) => parse(&s)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp: {}", s))),
            }
        }

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, s),
                None => s.serialize_none(),
            }
        }
    }
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
            area: None,
            officer: None,
            payment_proof: None,
        }
    }

    #[test]
    fn test_upload_data_url() {
        let up = Upload { name: "cnic.png".to_string(), mime: "image/png".to_string(), bytes: b"hi".to_vec() };
        assert_eq!(up.data_url(), "data:image/png;base64,aGk=");
        let bare = Upload { mime: String::new(), ..up };
        assert_eq!(bare.data_url(), "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn test_overdue_only_when_unpaid_and_past_due() {
        let today = date("2024-02-01");
        assert!(make_challan(ChallanStatus::Unpaid, "2024-01-31").is_overdue(today));
        assert!(!make_challan(ChallanStatus::Unpaid, "2024-02-01").is_overdue(today));
        assert!(!make_challan(ChallanStatus::Paid, "2024-01-01").is_overdue(today));
        assert!(!make_challan(ChallanStatus::UnderAppeal, "2024-01-01").is_overdue(today));
    }

    #[test]
    fn test_rule_active_from_start_date() {
        let rule = Rule {
            id: 1,
            rule_name: "Red Light".to_string(),
            description: String::new(),
            exemption: None,
            fine_amount: 1000.0,
            start_date: date("2024-03-10"),
            other_penalties: None,
        };
        assert!(!rule.is_active(date("2024-03-09")));
        assert!(rule.is_active(date("2024-03-10")));
        assert!(rule.is_active(date("2025-01-01")));
    }

    #[test]
    fn test_rule_decodes_decimal_string() {
        let json = r#"{
            "id": 3, "rule_name": "No Helmet", "description": "d",
            "exemption": null, "fine_amount": "500.00",
            "start_date": "2024-01-15", "other_penalties": null,
            "created_at": "2024-01-15T10:00:00Z"
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.fine_amount, 500.0);
        assert_eq!(rule.start_date, date("2024-01-15"));
    }

    #[test]
    fn test_challan_decodes_rfc3339_and_status() {
        let json = r#"{
            "id": 9, "bike_number": "ABC-12", "rule_name": "Triple Seat",
            "amount_charged": 400, "status": "UnderAppeal",
            "challan_date": "2024-01-13T08:30:00.123456Z", "due_date": "2024-02-12"
        }"#;
        let challan: Challan = serde_json::from_str(json).unwrap();
        assert_eq!(challan.status, ChallanStatus::UnderAppeal);
        assert_eq!(challan.amount_charged, 400.0);
        assert_eq!(challan.challan_date.date(), date("2024-01-13"));
    }

    #[test]
    fn test_officer_rank_labels() {
        let json = r#"{"id": 2, "name": "Jane", "rank": "Head Constable", "email": "j@x.pk",
                       "area": 4, "area_details": {"id": 4, "city": "Lahore", "zone": "Gulberg", "sub_area": "Gulberg I"},
                       "status": "Leave"}"#;
        let officer: Officer = serde_json::from_str(json).unwrap();
        assert_eq!(officer.rank, Rank::HeadConstable);
        assert_eq!(officer.status, OfficerStatus::Leave);
        assert_eq!(officer.city(), "Lahore");
        assert!(Rank::Constable < Rank::Inspector);
    }

    #[test]
    fn test_role_storage_round() {
        assert_eq!(Role::from_storage("SI"), Some(Role::Officer(Rank::Si)));
        assert_eq!(Role::from_storage("Citizen"), Some(Role::Citizen));
        assert_eq!(Role::from_storage("Mayor"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(500.0), "500");
        assert_eq!(format_amount(500.5), "500.50");
    }
}
