//! Integration tests for path matching and resolution options.

use citymaps_foundation::{City, EmissionsLocation, ModeShareLocation, Page, RootLocation};
use citymaps_router::{Revision, RouterConfig};

// =============================================================================
// Request Normalization
// =============================================================================

#[test]
fn query_and_fragment_are_ignored() {
    let table = Revision::ModeShare.table();
    let r = table.resolve("/mode-share/oamaru?year=2018#chart");
    assert_eq!(r.page, Page::ModeShare(City::Oamaru));
    assert_eq!(r.requested, "/mode-share/oamaru");
}

#[test]
fn repeated_slashes_collapse() {
    let table = Revision::ModeShare.table();
    assert_eq!(table.resolve("//emissions///auckland").page, Page::Emissions(City::Auckland));
}

#[test]
fn case_insensitive_by_default() {
    let table = Revision::ModeShare.table();
    assert_eq!(table.resolve("/Mode-Share/WELLINGTON").page, Page::ModeShare(City::Wellington));
}

#[test]
fn trailing_slash_is_lenient_by_default() {
    let table = Revision::ModeShare.table();
    let r = table.resolve("/about/");
    assert_eq!(r.page, Page::About);
    assert!(!r.was_redirected());
}

// =============================================================================
// Strict Matching
// =============================================================================

#[test]
fn case_sensitive_matching_falls_through() {
    let config = RouterConfig::default().with_case_sensitive(true);
    let table = Revision::ModeShare.build_table(config).unwrap();
    let r = table.resolve("/mode-share/OAMARU");
    assert_eq!(r.name, Some(ModeShareLocation::Christchurch.into()));
    assert_eq!(r.path_match, ["OAMARU"]);
}

#[test]
fn strict_trailing_slash_falls_through() {
    let config = RouterConfig::default().with_strict_trailing_slash(true);
    let table = Revision::ModeShare.build_table(config).unwrap();
    assert_eq!(table.resolve("/about").page, Page::About);

    let r = table.resolve("/emissions/auckland/");
    assert_eq!(r.name, Some(EmissionsLocation::Christchurch.into()));
}

// =============================================================================
// Matching Without Redirects
// =============================================================================

#[test]
fn match_reports_redirect_target() {
    let table = Revision::ModeShare.table();
    let m = table.match_path("/emissions/gisborne");
    assert!(m.is_redirect());
    assert_eq!(m.redirect_target(), Some(EmissionsLocation::Christchurch.into()));
    assert_eq!(m.layouts, [Page::EmissionsBase]);
    assert_eq!(m.page(), None);
}

#[test]
fn longer_prefix_wins_over_shorter() {
    let table = Revision::ModeShareFlow.table();
    let r = table.resolve("/mode-share-flow/auckland");
    assert_eq!(r.page, Page::ModeShareFlow(City::Auckland));
    assert_eq!(r.layouts, [Page::ModeShareFlowBase]);
}

#[test]
fn catch_all_keeps_requested_path() {
    let table = Revision::ModeShare.table();
    let m = table.match_path("/deep/unknown/path");
    assert_eq!(m.path, "/deep/unknown/path");
    assert_eq!(m.path_match, ["deep", "unknown", "path"]);

    let r = table.resolve("/deep/unknown/path");
    assert_eq!(r.name, Some(RootLocation::About.into()));
    assert_eq!(r.path, "/about");
}

// =============================================================================
// Named Navigation
// =============================================================================

#[test]
fn href_by_name() {
    let table = Revision::ModeShare.table();
    assert_eq!(table.href(ModeShareLocation::Hamilton.into()).unwrap(), "/mode-share/hamilton");
    assert!(table.href(RootLocation::About.into()).is_ok());
    assert!(Revision::Emissions.table().href(RootLocation::About.into()).is_err());
}

#[test]
fn navigate_matches_resolve() {
    let table = Revision::ModeShare.table();
    let by_name = table.navigate(EmissionsLocation::Queenstown.into()).unwrap();
    let by_path = table.resolve("/emissions/queenstown");
    assert!(by_name.same_destination(&by_path));
}
