//! Cascading Area Selection
//!
//! City -> Zone -> Sub-area dropdowns driven by the flat area table.
//! Choosing a parent clears every level below it.

use crate::models::Area;

/// Current picks of the three dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaSelection {
    pub city: Option<String>,
    pub zone: Option<String>,
    pub sub_area: Option<String>,
}

/// Empty dropdown value means "nothing picked"
fn pick(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl AreaSelection {
    /// Pre-fill from an existing area (edit forms)
    pub fn from_area(area: &Area) -> Self {
        Self {
            city: Some(area.city.clone()),
            zone: Some(area.zone.clone()),
            sub_area: Some(area.sub_area.clone()),
        }
    }

    pub fn select_city(&mut self, city: &str) {
        self.city = pick(city);
        self.zone = None;
        self.sub_area = None;
    }

    pub fn select_zone(&mut self, zone: &str) {
        self.zone = pick(zone);
        self.sub_area = None;
    }

    pub fn select_sub_area(&mut self, sub_area: &str) {
        self.sub_area = pick(sub_area);
    }
}

/// Push `value` unless already present (first occurrence wins)
fn push_unique(out: &mut Vec<String>, value: &str) {
    if !out.iter().any(|v| v == value) {
        out.push(value.to_string());
    }
}

pub fn cities(areas: &[Area]) -> Vec<String> {
    let mut out = Vec::new();
    for area in areas {
        push_unique(&mut out, &area.city);
    }
    out
}

pub fn zones(areas: &[Area], city: Option<&str>) -> Vec<String> {
    let Some(city) = city else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for area in areas.iter().filter(|a| a.city == city) {
        push_unique(&mut out, &area.zone);
    }
    out
}

pub fn sub_areas(areas: &[Area], city: Option<&str>, zone: Option<&str>) -> Vec<String> {
    let (Some(city), Some(zone)) = (city, zone) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for area in areas.iter().filter(|a| a.city == city && a.zone == zone) {
        push_unique(&mut out, &area.sub_area);
    }
    out
}

/// Area id once all three levels are picked
pub fn resolve(areas: &[Area], selection: &AreaSelection) -> Option<u32> {
    let city = selection.city.as_deref()?;
    let zone = selection.zone.as_deref()?;
    let sub_area = selection.sub_area.as_deref()?;
    areas
        .iter()
        .find(|a| a.city == city && a.zone == zone && a.sub_area == sub_area)
        .map(|a| a.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_area(id: u32, city: &str, zone: &str, sub_area: &str) -> Area {
        Area {
            id,
            city: city.to_string(),
            zone: zone.to_string(),
            sub_area: sub_area.to_string(),
        }
    }

    fn table() -> Vec<Area> {
        vec![
            make_area(1, "Lahore", "Gulberg", "Gulberg I"),
            make_area(2, "Karachi", "Clifton Block", "Block 1"),
            make_area(3, "Lahore", "Model Town", "Faisal Town"),
            make_area(4, "Lahore", "Gulberg", "Gulberg II"),
            make_area(5, "Karachi", "Clifton Block", "Block 2"),
        ]
    }

    #[test]
    fn test_options_follow_first_occurrence() {
        let areas = table();
        assert_eq!(cities(&areas), vec!["Lahore", "Karachi"]);
        assert_eq!(zones(&areas, Some("Lahore")), vec!["Gulberg", "Model Town"]);
        assert_eq!(
            sub_areas(&areas, Some("Lahore"), Some("Gulberg")),
            vec!["Gulberg I", "Gulberg II"]
        );
        assert!(zones(&areas, None).is_empty());
        assert!(sub_areas(&areas, Some("Lahore"), None).is_empty());
    }

    #[test]
    fn test_city_change_clears_children() {
        let mut sel = AreaSelection::default();
        sel.select_city("Lahore");
        sel.select_zone("Gulberg");
        sel.select_sub_area("Gulberg II");
        assert_eq!(sel.sub_area.as_deref(), Some("Gulberg II"));

        sel.select_city("Karachi");
        assert_eq!(sel.city.as_deref(), Some("Karachi"));
        assert_eq!(sel.zone, None);
        assert_eq!(sel.sub_area, None);
    }

    #[test]
    fn test_zone_change_clears_sub_area() {
        let mut sel = AreaSelection::default();
        sel.select_city("Lahore");
        sel.select_zone("Gulberg");
        sel.select_sub_area("Gulberg I");

        sel.select_zone("Model Town");
        assert_eq!(sel.city.as_deref(), Some("Lahore"));
        assert_eq!(sel.sub_area, None);
    }

    #[test]
    fn test_resolve() {
        let areas = table();
        let mut sel = AreaSelection::default();
        sel.select_city("Karachi");
        sel.select_zone("Clifton Block");
        assert_eq!(resolve(&areas, &sel), None);
        sel.select_sub_area("Block 2");
        assert_eq!(resolve(&areas, &sel), Some(5));

        let back = AreaSelection::from_area(&areas[2]);
        assert_eq!(resolve(&areas, &back), Some(3));
    }

    #[test]
    fn test_blank_pick_is_none() {
        let mut sel = AreaSelection::default();
        sel.select_city("  ");
        assert_eq!(sel.city, None);
    }
}
