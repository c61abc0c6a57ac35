//! Form Drafts
//!
//! Raw form state per entity plus the required-field checks that run before
//! any request is sent. A draft that validates yields the request payload.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::cascade::{self, AreaSelection};
use crate::config::DEFAULT_DUE_DAYS;
use crate::error::ValidationError;
use crate::models::{Area, Challan, ChallanStatus, Officer, OfficerStatus, Rank, Rule, Upload};
use crate::plate::{normalize_plate, registration_number};

fn required(value: &str, what: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Missing(what))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_date(value: &str, what: &'static str) -> Result<NaiveDate, ValidationError> {
    let value = required(value, what)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|_| ValidationError::Invalid("Dates must look like YYYY-MM-DD."))
}

fn parse_money(value: &str, what: &'static str) -> Result<f64, ValidationError> {
    let value = required(value, what)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(ValidationError::Invalid("Amounts must be a positive number.")),
    }
}

fn bike_number(value: &str) -> Result<String, ValidationError> {
    normalize_plate(value).ok_or(ValidationError::Missing("a bike number"))
}

// ========================
// Login / Signup
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        Ok(Credentials {
            email: required(&self.identifier, "your email")?,
            password: required(&self.password, "your password")
                .map(|_| self.password.clone())?,
        })
    }
}

const CAPTCHA_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CAPTCHA_LEN: usize = 6;

/// Six uppercase alphanumerics drawn from `random` (values in `[0, 1)`)
pub fn generate_captcha(mut random: impl FnMut() -> f64) -> String {
    (0..CAPTCHA_LEN)
        .map(|_| {
            let idx = (random() * CAPTCHA_ALPHABET.len() as f64) as usize;
            CAPTCHA_ALPHABET[idx.min(CAPTCHA_ALPHABET.len() - 1)] as char
        })
        .collect()
}

pub fn captcha_matches(expected: &str, input: &str) -> bool {
    !expected.is_empty() && expected == input.trim()
}

/// How hard a password looks, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Normal,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Normal => "Normal",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak | PasswordStrength::Weak => "strength strength-weak",
            PasswordStrength::Normal => "strength strength-normal",
            PasswordStrength::Strong | PasswordStrength::VeryStrong => "strength strength-strong",
        }
    }

    /// Weakest password signup accepts
    pub fn is_acceptable(self) -> bool {
        self >= PasswordStrength::Normal
    }
}

/// One point each for length 6+, length 10+, an uppercase letter, a digit
/// and a symbol
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let score = [
        len >= 6,
        len >= 10,
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();
    match score {
        0 | 1 => PasswordStrength::VeryWeak,
        2 => PasswordStrength::Weak,
        3 => PasswordStrength::Normal,
        4 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitizenSignupForm {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub bike_number: String,
    /// Bike registration book copy
    pub official_copy: Option<Upload>,
    pub cnic_front: Option<Upload>,
    pub cnic_back: Option<Upload>,
}

/// Documents travel inline as `data:` URLs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupPayload {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub bike_number: String,
    pub official_copy_url: String,
    pub cnic_front_url: String,
    pub cnic_back_url: String,
}

impl CitizenSignupForm {
    pub fn validate(&self) -> Result<SignupPayload, ValidationError> {
        let email = required(&self.email, "your email")?;
        if !email.contains('@') {
            return Err(ValidationError::Invalid("Please enter a valid email."));
        }
        let phone = required(&self.phone, "your phone number")?;
        if self.password.is_empty() {
            return Err(ValidationError::Missing("a password"));
        }
        if !password_strength(&self.password).is_acceptable() {
            return Err(ValidationError::Invalid("Please choose a stronger password."));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        required(&self.bike_number, "a bike number")?;
        let bike_number = registration_number(&self.bike_number)
            .ok_or(ValidationError::Invalid("Bike numbers look like ABC1234."))?;
        let official_copy = require_upload(self.official_copy.as_ref(), "the bike's official copy")?;
        let cnic_front = require_upload(self.cnic_front.as_ref(), "the front of your CNIC")?;
        let cnic_back = require_upload(self.cnic_back.as_ref(), "the back of your CNIC")?;
        Ok(SignupPayload {
            email,
            phone,
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            bike_number,
            official_copy_url: official_copy.data_url(),
            cnic_front_url: cnic_front.data_url(),
            cnic_back_url: cnic_back.data_url(),
        })
    }
}

// ========================
// Rules
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct RuleDraft {
    pub rule_name: String,
    pub fine_amount: String,
    pub description: String,
    pub exemption: String,
    pub start_date: String,
    pub other_penalties: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulePayload {
    pub rule_name: String,
    pub fine_amount: f64,
    pub description: String,
    pub exemption: Option<String>,
    pub start_date: NaiveDate,
    pub other_penalties: Option<String>,
}

impl RuleDraft {
    /// Blank form starting today
    pub fn new(today: NaiveDate) -> Self {
        Self {
            rule_name: String::new(),
            fine_amount: String::new(),
            description: String::new(),
            exemption: String::new(),
            start_date: today.format("%Y-%m-%d").to_string(),
            other_penalties: String::new(),
        }
    }

    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            rule_name: rule.rule_name.clone(),
            fine_amount: crate::models::format_amount(rule.fine_amount),
            description: rule.description.clone(),
            exemption: rule.exemption.clone().unwrap_or_default(),
            start_date: rule.start_date.format("%Y-%m-%d").to_string(),
            other_penalties: rule.other_penalties.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<RulePayload, ValidationError> {
        Ok(RulePayload {
            rule_name: required(&self.rule_name, "a rule name")?,
            fine_amount: parse_money(&self.fine_amount, "a fine amount")?,
            description: self.description.trim().to_string(),
            exemption: optional(&self.exemption),
            start_date: parse_date(&self.start_date, "a start date")?,
            other_penalties: optional(&self.other_penalties),
        })
    }
}

// ========================
// Officers
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficerDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub rank: Option<Rank>,
    pub area: AreaSelection,
    pub status: OfficerStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficerPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub rank: Rank,
    pub area: u32,
    pub status: OfficerStatus,
}

impl OfficerDraft {
    pub fn from_officer(officer: &Officer) -> Self {
        Self {
            name: officer.name.clone(),
            email: officer.email.clone(),
            password: String::new(),
            rank: Some(officer.rank),
            area: officer
                .area_details
                .as_ref()
                .map(AreaSelection::from_area)
                .unwrap_or_default(),
            status: officer.status,
        }
    }

    /// Password is required on create; on edit a blank one keeps the old
    pub fn validate(&self, areas: &[Area], creating: bool) -> Result<OfficerPayload, ValidationError> {
        let name = required(&self.name, "a name")?;
        let email = required(&self.email, "an email")?;
        if !email.contains('@') {
            return Err(ValidationError::Invalid("Please enter a valid email."));
        }
        let password = if creating {
            Some(required(&self.password, "a password").map(|_| self.password.clone())?)
        } else {
            (!self.password.is_empty()).then(|| self.password.clone())
        };
        let rank = self.rank.ok_or(ValidationError::Missing("a rank"))?;
        if self.area.city.is_none() {
            return Err(ValidationError::Missing("a city"));
        }
        if self.area.zone.is_none() {
            return Err(ValidationError::Missing("an area"));
        }
        let area = cascade::resolve(areas, &self.area).ok_or(ValidationError::Missing("a sub-area"))?;
        Ok(OfficerPayload {
            name,
            email,
            password,
            rank,
            area,
            status: self.status,
        })
    }
}

// ========================
// Challans
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallanDraft {
    pub bike_number: String,
    pub rule: Option<u32>,
    /// Blank means "charge the rule's fine"
    pub amount: String,
    /// Blank means issue date plus the default period
    pub due_date: String,
    pub area: AreaSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallanPayload {
    pub bike_number: String,
    pub rule: u32,
    pub amount_charged: f64,
    pub due_date: NaiveDate,
    pub area: u32,
}

impl ChallanDraft {
    pub fn validate(
        &self,
        rules: &[Rule],
        areas: &[Area],
        today: NaiveDate,
    ) -> Result<ChallanPayload, ValidationError> {
        let bike_number = bike_number(&self.bike_number)?;
        let rule = chargeable_rule(rules, self.rule, today)?;
        let amount_charged = if self.amount.trim().is_empty() {
            rule.fine_amount
        } else {
            parse_money(&self.amount, "an amount")?
        };
        let due_date = if self.due_date.trim().is_empty() {
            today + Duration::days(DEFAULT_DUE_DAYS)
        } else {
            parse_date(&self.due_date, "a due date")?
        };
        if due_date < today {
            return Err(ValidationError::Invalid("The due date cannot be in the past."));
        }
        let area = cascade::resolve(areas, &self.area).ok_or(ValidationError::Missing("the location"))?;
        Ok(ChallanPayload {
            bike_number,
            rule: rule.id,
            amount_charged,
            due_date,
            area,
        })
    }
}

/// A rule a challan can be charged under: known and already in force
fn chargeable_rule(rules: &[Rule], id: Option<u32>, today: NaiveDate) -> Result<&Rule, ValidationError> {
    let rule = id
        .and_then(|id| rules.iter().find(|r| r.id == id))
        .ok_or(ValidationError::Missing("the rule violated"))?;
    if !rule.is_active(today) {
        return Err(ValidationError::Invalid("That rule is not in force yet."));
    }
    Ok(rule)
}

/// Partial edit of an issued challan. Only the set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChallanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<u32>,
    /// Display name kept locally for the row; the backend derives its own
    #[serde(skip)]
    pub rule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_charged: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChallanStatus>,
}

impl ChallanUpdate {
    pub fn status(status: ChallanStatus) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    /// Move a challan to another rule; the amount follows that rule's fine
    pub fn reassign_rule(rules: &[Rule], rule_id: u32, today: NaiveDate) -> Result<Self, ValidationError> {
        let rule = chargeable_rule(rules, Some(rule_id), today)?;
        Ok(Self {
            rule: Some(rule.id),
            rule_name: Some(rule.rule_name.clone()),
            amount_charged: Some(rule.fine_amount),
            status: None,
        })
    }

    pub fn apply_to(&self, challan: &mut Challan) {
        if let Some(rule) = self.rule {
            challan.rule = Some(rule);
        }
        if let Some(name) = &self.rule_name {
            challan.rule_name = name.clone();
        }
        if let Some(amount) = self.amount_charged {
            challan.amount_charged = amount;
        }
        if let Some(status) = self.status {
            challan.status = status;
        }
    }
}

// ========================
// Appeals / Payments
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealDraft {
    pub reason: String,
    pub evidence: Option<Upload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppealSubmission {
    pub challan: u32,
    pub reason: String,
    pub evidence: Option<Upload>,
}

impl AppealDraft {
    pub fn validate(&self, challan: u32) -> Result<AppealSubmission, ValidationError> {
        Ok(AppealSubmission {
            challan,
            reason: required(&self.reason, "a reason")?,
            evidence: self.evidence.clone(),
        })
    }
}

fn require_upload(upload: Option<&Upload>, what: &'static str) -> Result<Upload, ValidationError> {
    match upload {
        Some(up) if !up.bytes.is_empty() => Ok(up.clone()),
        _ => Err(ValidationError::Missing(what)),
    }
}

/// Payment proof must carry an image
pub fn require_proof(upload: Option<&Upload>) -> Result<Upload, ValidationError> {
    require_upload(upload, "a payment proof image")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_area(id: u32, city: &str, zone: &str, sub_area: &str) -> Area {
        Area {
            id,
            city: city.to_string(),
            zone: zone.to_string(),
            sub_area: sub_area.to_string(),
        }
    }

    fn make_rule(id: u32, fine: f64, start: &str) -> Rule {
        Rule {
            id,
            rule_name: format!("Rule {}", id),
            description: String::new(),
            exemption: None,
            fine_amount: fine,
            start_date: date(start),
            other_penalties: None,
        }
    }

    fn make_upload() -> Upload {
        Upload {
            name: "proof.png".to_string(),
            mime: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    fn lahore_selection() -> AreaSelection {
        let mut sel = AreaSelection::default();
        sel.select_city("Lahore");
        sel.select_zone("Gulberg");
        sel.select_sub_area("Gulberg I");
        sel
    }

    #[test]
    fn test_appeal_requires_reason() {
        let draft = AppealDraft { reason: "   ".to_string(), evidence: None };
        assert_eq!(draft.validate(7), Err(ValidationError::Missing("a reason")));

        let draft = AppealDraft { reason: " Not my bike ".to_string(), evidence: Some(make_upload()) };
        let sub = draft.validate(7).unwrap();
        assert_eq!(sub.challan, 7);
        assert_eq!(sub.reason, "Not my bike");
        assert!(sub.evidence.is_some());
    }

    #[test]
    fn test_payment_requires_image() {
        assert!(require_proof(None).is_err());
        let mut empty = make_upload();
        empty.bytes.clear();
        assert!(require_proof(Some(&empty)).is_err());
        assert_eq!(require_proof(Some(&make_upload())).unwrap().name, "proof.png");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm { identifier: "a@b.pk".to_string(), password: String::new() };
        assert!(form.validate().is_err());
        let form = LoginForm { identifier: " a@b.pk ".to_string(), password: "pw ".to_string() };
        let creds = form.validate().unwrap();
        assert_eq!(creds.email, "a@b.pk");
        assert_eq!(creds.password, "pw ");
    }

    #[test]
    fn test_captcha() {
        let mut n = 0.0;
        let code = generate_captcha(|| {
            n += 0.15;
            n % 1.0
        });
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(captcha_matches(&code, &format!(" {} ", code)));
        assert!(!captcha_matches(&code, &code.to_lowercase()));
        assert!(!captcha_matches("", ""));
        // upper bound of the random range never indexes past the alphabet
        assert_eq!(generate_captcha(|| 0.999_999_999), "999999");
    }

    fn make_signup() -> CitizenSignupForm {
        CitizenSignupForm {
            email: "c@d.pk".to_string(),
            phone: "0300".to_string(),
            password: "Secret1".to_string(),
            confirm_password: "Secret1".to_string(),
            bike_number: "leb 123".to_string(),
            official_copy: Some(make_upload()),
            cnic_front: Some(make_upload()),
            cnic_back: Some(make_upload()),
        }
    }

    #[test]
    fn test_signup_password_mismatch() {
        let form = CitizenSignupForm { confirm_password: "Secret2".to_string(), ..make_signup() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let ok = make_signup().validate().unwrap();
        assert_eq!(ok.bike_number, "LEB123");
        assert!(ok.official_copy_url.starts_with("data:image/png;base64,"));
        assert!(!ok.cnic_front_url.is_empty());
        assert!(!ok.cnic_back_url.is_empty());
    }

    #[test]
    fn test_signup_requires_documents() {
        let form = CitizenSignupForm { official_copy: None, ..make_signup() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("the bike's official copy")));

        let form = CitizenSignupForm { cnic_front: None, ..make_signup() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("the front of your CNIC")));

        let mut empty = make_upload();
        empty.bytes.clear();
        let form = CitizenSignupForm { cnic_back: Some(empty), ..make_signup() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("the back of your CNIC")));
    }

    #[test]
    fn test_signup_bike_number_format() {
        for bad in ["ABCD12", "AB12345", "12AB"] {
            let form = CitizenSignupForm { bike_number: bad.to_string(), ..make_signup() };
            assert_eq!(
                form.validate(),
                Err(ValidationError::Invalid("Bike numbers look like ABC1234."))
            );
        }
        let form = CitizenSignupForm { bike_number: " ".to_string(), ..make_signup() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("a bike number")));
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), PasswordStrength::VeryWeak);
        assert_eq!(password_strength("abcdef"), PasswordStrength::VeryWeak);
        assert_eq!(password_strength("abcdef1"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abcdef1"), PasswordStrength::Normal);
        assert_eq!(password_strength("Abcdefghi1"), PasswordStrength::Strong);
        assert_eq!(password_strength("Abcdefghi1!"), PasswordStrength::VeryStrong);
        assert!(!PasswordStrength::Weak.is_acceptable());
        assert!(PasswordStrength::Normal.is_acceptable());

        let form = CitizenSignupForm {
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
            ..make_signup()
        };
        assert_eq!(form.validate(), Err(ValidationError::Invalid("Please choose a stronger password.")));
    }

    #[test]
    fn test_rule_draft() {
        let mut draft = RuleDraft::new(date("2024-05-01"));
        assert_eq!(draft.validate(), Err(ValidationError::Missing("a rule name")));
        draft.rule_name = "No Helmet".to_string();
        draft.fine_amount = "-5".to_string();
        assert!(draft.validate().is_err());
        draft.fine_amount = "500".to_string();
        let payload = draft.validate().unwrap();
        assert_eq!(payload.fine_amount, 500.0);
        assert_eq!(payload.start_date, date("2024-05-01"));
        assert_eq!(payload.exemption, None);
    }

    #[test]
    fn test_officer_draft_needs_full_area() {
        let areas = vec![make_area(4, "Lahore", "Gulberg", "Gulberg I")];
        let mut draft = OfficerDraft {
            name: "Asad".to_string(),
            email: "asad@police.pk".to_string(),
            password: "secret".to_string(),
            rank: Some(Rank::Si),
            ..Default::default()
        };
        assert_eq!(draft.validate(&areas, true), Err(ValidationError::Missing("a city")));
        draft.area = lahore_selection();
        let payload = draft.validate(&areas, true).unwrap();
        assert_eq!(payload.area, 4);
        assert_eq!(payload.password.as_deref(), Some("secret"));

        draft.password.clear();
        assert!(draft.validate(&areas, true).is_err());
        assert_eq!(draft.validate(&areas, false).unwrap().password, None);
    }

    #[test]
    fn test_challan_defaults_from_rule() {
        let areas = vec![make_area(4, "Lahore", "Gulberg", "Gulberg I")];
        let rules = vec![make_rule(1, 500.0, "2024-01-01"), make_rule(2, 900.0, "2030-01-01")];
        let today = date("2024-06-01");
        let mut draft = ChallanDraft {
            bike_number: "leb-77".to_string(),
            rule: Some(1),
            area: lahore_selection(),
            ..Default::default()
        };
        let payload = draft.validate(&rules, &areas, today).unwrap();
        assert_eq!(payload.bike_number, "LEB-77");
        assert_eq!(payload.amount_charged, 500.0);
        assert_eq!(payload.due_date, date("2024-07-01"));
        assert_eq!(payload.area, 4);

        draft.rule = Some(2);
        assert!(draft.validate(&rules, &areas, today).is_err());

        draft.rule = Some(1);
        draft.due_date = "2024-05-01".to_string();
        assert!(draft.validate(&rules, &areas, today).is_err());
    }

    #[test]
    fn test_reassign_rule_follows_fine() {
        let rules = vec![make_rule(1, 500.0, "2024-01-01"), make_rule(2, 900.0, "2030-01-01")];
        let today = date("2024-06-01");

        let update = ChallanUpdate::reassign_rule(&rules, 1, today).unwrap();
        assert_eq!(update.rule, Some(1));
        assert_eq!(update.amount_charged, Some(500.0));
        assert_eq!(update.rule_name.as_deref(), Some("Rule 1"));
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"rule":1,"amount_charged":500.0}"#);

        assert_eq!(
            ChallanUpdate::reassign_rule(&rules, 2, today),
            Err(ValidationError::Invalid("That rule is not in force yet."))
        );
        assert_eq!(
            ChallanUpdate::reassign_rule(&rules, 9, today),
            Err(ValidationError::Missing("the rule violated"))
        );
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_string(&ChallanUpdate::status(ChallanStatus::UnderAppeal)).unwrap();
        assert_eq!(body, r#"{"status":"UnderAppeal"}"#);
    }
}
