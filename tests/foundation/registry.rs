//! Integration tests for cities, pages, and the location registry.

use citymaps_foundation::{
    City, CityLocation, EmissionsLocation, LocationRegistry, ModeShare2023Location,
    ModeShareFlowLocation, ModeShareLocation, Page, RouteName, Section,
};
use std::collections::HashSet;

// =============================================================================
// Cities and Pages
// =============================================================================

#[test]
fn cities_parse_from_slugs() {
    for city in City::ALL {
        assert_eq!(city.slug().parse::<City>().unwrap(), city);
    }
    assert!("dunedin".parse::<City>().is_err());
}

#[test]
fn page_component_names() {
    assert_eq!(Page::Emissions(City::Queenstown).component_name(), "QueenstownCo2Sa1Page");
    assert_eq!(Page::ModeShare(City::Oamaru).component_name(), "OamaruModeSharePage");
    assert_eq!(Page::About.component_name(), "AboutPage");
    assert!(Page::EmissionsBase.is_layout());
    assert!(!Page::Home.is_layout());
}

// =============================================================================
// Location Registry
// =============================================================================

#[test]
fn every_symbol_is_unique() {
    let symbols: Vec<&str> = LocationRegistry::all().map(RouteName::as_str).collect();
    let unique: HashSet<&str> = symbols.iter().copied().collect();
    assert_eq!(symbols.len(), unique.len());
}

#[test]
fn every_symbol_looks_itself_up() {
    for name in LocationRegistry::all() {
        assert_eq!(LocationRegistry::lookup(name.as_str()).unwrap(), name);
        assert_eq!(name.to_string().parse::<RouteName>().unwrap(), name);
    }
}

#[test]
fn sections_hold_their_own_names() {
    for &section in LocationRegistry::sections() {
        for name in LocationRegistry::names(section) {
            assert_eq!(name.section(), section);
        }
    }
}

#[test]
fn city_sections_cover_their_cities() {
    assert_eq!(EmissionsLocation::ALL.len(), City::ALL.len());
    assert_eq!(ModeShareLocation::ALL.len(), City::ALL.len());
    assert_eq!(ModeShareFlowLocation::ALL.len(), City::ALL.len());
    assert_eq!(ModeShare2023Location::ALL.len(), 4);
    assert!(ModeShare2023Location::from_city(City::Queenstown).is_none());
}

#[test]
fn city_location_trait() {
    fn cities<L: CityLocation>() -> Vec<City> {
        L::ALL.iter().map(|l| l.city()).collect()
    }
    assert!(cities::<ModeShare2023Location>().contains(&City::Oamaru));
    assert_eq!(cities::<EmissionsLocation>(), City::ALL);
}

#[test]
fn section_parse_forms() {
    assert_eq!("mode-share-flow".parse::<Section>().unwrap(), Section::ModeShareFlow);
    assert_eq!("MODE_SHARE".parse::<Section>().unwrap(), Section::ModeShare);
    assert!("transit".parse::<Section>().is_err());
}
