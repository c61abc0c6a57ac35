//! Listing Pipeline
//!
//! Case-insensitive substring search followed by an optional sort, recomputed
//! over the full in-memory list whenever the view state changes.

use std::cmp::Ordering;

use crate::models::{format_amount, Challan, Officer, Rule};

/// Entity exposing the string fields a search box looks at
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

/// Sort order over one entity type
pub trait SortOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl Searchable for Rule {
    fn search_fields(&self) -> Vec<String> {
        vec![self.rule_name.clone(), format_amount(self.fine_amount)]
    }
}

impl Searchable for Officer {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.rank.label().to_string(),
            self.city().to_string(),
            self.zone().to_string(),
            self.email.clone(),
        ]
    }
}

impl Searchable for Challan {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.bike_number.clone(),
            self.rule_name.clone(),
            format_amount(self.amount_charged),
        ]
    }
}

/// Fields searched on the public rules page (description included)
pub fn public_rule_fields(rule: &Rule) -> Vec<String> {
    vec![
        rule.rule_name.clone(),
        rule.description.clone(),
        format_amount(rule.fine_amount),
    ]
}

/// Empty query matches everything
pub fn matches_fields(fields: &[String], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Filter then stable-sort, using the entity's own search fields
pub fn filter_and_sort<T, S>(items: &[T], query: &str, sort: Option<S>) -> Vec<T>
where
    T: Searchable + Clone,
    S: SortOrder<T>,
{
    filter_and_sort_by(items, query, T::search_fields, sort)
}

/// Filter then stable-sort with a custom field extractor
pub fn filter_and_sort_by<T, S, F>(items: &[T], query: &str, fields: F, sort: Option<S>) -> Vec<T>
where
    T: Clone,
    S: SortOrder<T>,
    F: Fn(&T) -> Vec<String>,
{
    let mut data: Vec<T> = items
        .iter()
        .filter(|item| matches_fields(&fields(*item), query))
        .cloned()
        .collect();
    if let Some(order) = sort {
        data.sort_by(|a, b| order.compare(a, b));
    }
    data
}

/// Alphabetical comparison ignoring case, ties broken by raw text
fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn num_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

// ========================
// Rules
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSort {
    Name(Direction),
    Fine(Direction),
}

impl RuleSort {
    /// (option key, dropdown label)
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("name-asc", "Name (A-Z)"),
        ("name-desc", "Name (Z-A)"),
        ("fine-asc", "Fine (Low to High)"),
        ("fine-desc", "Fine (High to Low)"),
    ];

    /// Unknown or empty keys mean "keep insertion order"
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name-asc" => Some(RuleSort::Name(Direction::Asc)),
            "name-desc" => Some(RuleSort::Name(Direction::Desc)),
            "fine-asc" => Some(RuleSort::Fine(Direction::Asc)),
            "fine-desc" => Some(RuleSort::Fine(Direction::Desc)),
            _ => None,
        }
    }
}

impl SortOrder<Rule> for RuleSort {
    fn compare(&self, a: &Rule, b: &Rule) -> Ordering {
        match *self {
            RuleSort::Name(dir) => dir.apply(text_cmp(&a.rule_name, &b.rule_name)),
            RuleSort::Fine(dir) => dir.apply(num_cmp(a.fine_amount, b.fine_amount)),
        }
    }
}

// ========================
// Officers
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficerSort {
    Name(Direction),
    Rank(Direction),
    City(Direction),
}

impl OfficerSort {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("name-asc", "Name (A-Z)"),
        ("name-desc", "Name (Z-A)"),
        ("rank-asc", "Rank (Low to High)"),
        ("rank-desc", "Rank (High to Low)"),
        ("city-asc", "City (A-Z)"),
        ("city-desc", "City (Z-A)"),
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name-asc" => Some(OfficerSort::Name(Direction::Asc)),
            "name-desc" => Some(OfficerSort::Name(Direction::Desc)),
            "rank-asc" => Some(OfficerSort::Rank(Direction::Asc)),
            "rank-desc" => Some(OfficerSort::Rank(Direction::Desc)),
            "city-asc" => Some(OfficerSort::City(Direction::Asc)),
            "city-desc" => Some(OfficerSort::City(Direction::Desc)),
            _ => None,
        }
    }
}

impl SortOrder<Officer> for OfficerSort {
    fn compare(&self, a: &Officer, b: &Officer) -> Ordering {
        match *self {
            OfficerSort::Name(dir) => dir.apply(text_cmp(&a.name, &b.name)),
            OfficerSort::Rank(dir) => dir.apply(a.rank.cmp(&b.rank)),
            OfficerSort::City(dir) => dir.apply(text_cmp(a.city(), b.city())),
        }
    }
}

// ========================
// Challans
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallanSort {
    Amount(Direction),
    Date(Direction),
    Bike(Direction),
}

impl ChallanSort {
    pub const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("amount-asc", "Amount (Low to High)"),
        ("amount-desc", "Amount (High to Low)"),
        ("date-asc", "Date (Oldest First)"),
        ("date-desc", "Date (Newest First)"),
        ("bike-asc", "Bike Number (A-Z)"),
        ("bike-desc", "Bike Number (Z-A)"),
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "amount-asc" => Some(ChallanSort::Amount(Direction::Asc)),
            "amount-desc" => Some(ChallanSort::Amount(Direction::Desc)),
            "date-asc" => Some(ChallanSort::Date(Direction::Asc)),
            "date-desc" => Some(ChallanSort::Date(Direction::Desc)),
            "bike-asc" => Some(ChallanSort::Bike(Direction::Asc)),
            "bike-desc" => Some(ChallanSort::Bike(Direction::Desc)),
            _ => None,
        }
    }
}

impl SortOrder<Challan> for ChallanSort {
    fn compare(&self, a: &Challan, b: &Challan) -> Ordering {
        match *self {
            ChallanSort::Amount(dir) => dir.apply(num_cmp(a.amount_charged, b.amount_charged)),
            ChallanSort::Date(dir) => dir.apply(a.challan_date.cmp(&b.challan_date)),
            ChallanSort::Bike(dir) => dir.apply(text_cmp(&a.bike_number, &b.bike_number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, ChallanStatus, OfficerStatus, Rank};
    use chrono::NaiveDate;

    fn make_rule(id: u32, name: &str, fine: f64) -> Rule {
        Rule {
            id,
            rule_name: name.to_string(),
            description: format!("About {}", name.to_lowercase()),
            exemption: None,
            fine_amount: fine,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            other_penalties: None,
        }
    }

    fn make_officer(id: u32, name: &str, rank: Rank, city: &str) -> Officer {
        Officer {
            id,
            name: name.to_string(),
            rank,
            email: format!("{}@police.pk", name.to_lowercase()),
            area: Some(id),
            area_details: Some(Area {
                id,
                city: city.to_string(),
                zone: "Zone".to_string(),
                sub_area: "Sub".to_string(),
            }),
            status: OfficerStatus::Active,
            profile_pic_url: None,
        }
    }

    fn make_challan(id: u32, bike: &str, amount: f64, day: u32) -> Challan {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Challan {
            id,
            bike_number: bike.to_string(),
            rule: None,
            rule_name: "No Helmet Wearing".to_string(),
            amount_charged: amount,
            status: ChallanStatus::Unpaid,
            challan_date: date.and_hms_opt(12, 0, 0).unwrap(),
            due_date: date,
            area: None,
            officer: None,
            payment_proof: None,
        }
    }

    fn names(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(|r| r.rule_name.as_str()).collect()
    }

    #[test]
    fn test_rule_fine_desc() {
        let rules = vec![make_rule(1, "No Helmet", 500.0), make_rule(2, "Red Light", 1000.0)];
        let sorted = filter_and_sort(&rules, "", RuleSort::parse("fine-desc"));
        assert_eq!(names(&sorted), vec!["Red Light", "No Helmet"]);
    }

    #[test]
    fn test_rule_search_name_or_fine() {
        let rules = vec![
            make_rule(1, "No Helmet", 500.0),
            make_rule(2, "Red Light", 1000.0),
            make_rule(3, "Triple Seat", 400.0),
        ];
        assert_eq!(names(&filter_and_sort(&rules, "HELMET", None::<RuleSort>)), vec!["No Helmet"]);
        assert_eq!(
            names(&filter_and_sort(&rules, "00", None::<RuleSort>)),
            vec!["No Helmet", "Red Light", "Triple Seat"]
        );
        assert_eq!(names(&filter_and_sort(&rules, "1000", None::<RuleSort>)), vec!["Red Light"]);
        // description is not searched on admin listings
        assert!(filter_and_sort(&rules, "about", None::<RuleSort>).is_empty());
    }

    #[test]
    fn test_public_rules_search_description() {
        let rules = vec![make_rule(1, "No Helmet", 500.0), make_rule(2, "Red Light", 1000.0)];
        let found = filter_and_sort_by(&rules, "about red", public_rule_fields, None::<RuleSort>);
        assert_eq!(names(&found), vec!["Red Light"]);
    }

    #[test]
    fn test_whitespace_query_keeps_order() {
        let rules = vec![make_rule(1, "B", 2.0), make_rule(2, "A", 1.0)];
        let out = filter_and_sort(&rules, "   ", RuleSort::parse(""));
        assert_eq!(names(&out), vec!["B", "A"]);
    }

    #[test]
    fn test_officer_rank_sort_uses_rank_order() {
        let officers = vec![
            make_officer(1, "Asad", Rank::Inspector, "Lahore"),
            make_officer(2, "Bilal", Rank::Constable, "Karachi"),
            make_officer(3, "Chand", Rank::Si, "Multan"),
        ];
        let asc = filter_and_sort(&officers, "", OfficerSort::parse("rank-asc"));
        let ids: Vec<u32> = asc.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let by_city = filter_and_sort(&officers, "", OfficerSort::parse("city-desc"));
        assert_eq!(by_city[0].city(), "Multan");
    }

    #[test]
    fn test_officer_search_fields() {
        let officers = vec![
            make_officer(1, "Asad", Rank::Inspector, "Lahore"),
            make_officer(2, "Bilal", Rank::Constable, "Karachi"),
        ];
        let hits = filter_and_sort(&officers, "karachi", None::<OfficerSort>);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bilal");
        let hits = filter_and_sort(&officers, "inspector", None::<OfficerSort>);
        assert_eq!(hits[0].name, "Asad");
    }

    #[test]
    fn test_challan_sorts() {
        let challans = vec![
            make_challan(1, "CD-5678", 1000.0, 14),
            make_challan(2, "AB-1234", 500.0, 15),
            make_challan(3, "EF-9012", 400.0, 13),
        ];
        let ids = |v: Vec<Challan>| v.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_and_sort(&challans, "", ChallanSort::parse("date-desc"))), vec![2, 1, 3]);
        assert_eq!(ids(filter_and_sort(&challans, "", ChallanSort::parse("amount-asc"))), vec![3, 2, 1]);
        assert_eq!(ids(filter_and_sort(&challans, "", ChallanSort::parse("bike-asc"))), vec![2, 1, 3]);
        assert_eq!(ids(filter_and_sort(&challans, "ab-", ChallanSort::parse("bike-asc"))), vec![2]);
    }

    #[test]
    fn test_unknown_sort_key() {
        assert_eq!(ChallanSort::parse("colour-asc"), None);
        assert_eq!(OfficerSort::parse(""), None);
    }
}
