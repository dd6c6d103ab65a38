//! Integration tests for the built-in revisions.
//!
//! Every property here is checked against every revision it applies to.

use citymaps_foundation::{
    City, EmissionsLocation, LocationRegistry, ModeShare2023Location, ModeShareLocation, Page,
    RootLocation, RouteName,
};
use citymaps_router::{Revision, RouteTable, Target};
use std::collections::HashSet;

fn sections(table: &RouteTable) -> Vec<(String, Vec<citymaps_router::RouteId>)> {
    table
        .records()
        .filter(|(_, record)| !record.children().is_empty())
        .map(|(_, record)| (record.href(), record.children().to_vec()))
        .collect()
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn last_child_of_every_section_is_catch_all() {
    for revision in Revision::ALL {
        let table = revision.table();
        for (href, children) in sections(table) {
            let last = children.last().and_then(|&id| table.record(id)).unwrap();
            assert!(last.is_catch_all(), "{revision}: {href} does not end in a catch-all");
        }
    }
}

#[test]
fn top_level_ends_in_catch_all() {
    for revision in Revision::ALL {
        let table = revision.table();
        let &last = table.top_level().last().unwrap();
        assert!(table.record(last).unwrap().is_catch_all(), "{revision}");
    }
}

#[test]
fn names_are_unique() {
    for revision in Revision::ALL {
        let table = revision.table();
        let declared: Vec<RouteName> = table.records().filter_map(|(_, r)| r.name()).collect();
        let unique: HashSet<RouteName> = declared.iter().copied().collect();
        assert_eq!(declared.len(), unique.len(), "{revision}");
    }
}

#[test]
fn every_redirect_targets_a_registered_name() {
    for revision in Revision::ALL {
        let table = revision.table();
        for (_, record) in table.records() {
            if let Target::Redirect(target) = record.target() {
                assert!(table.contains(target), "{revision}: {target} missing");
            }
        }
    }
}

// =============================================================================
// Known and Unknown Paths
// =============================================================================

#[test]
fn known_paths_render_their_pages() {
    for revision in Revision::ALL {
        let table = revision.table();
        for name in table.names() {
            let record = table.get(name).unwrap();
            let Target::Render(page) = record.target() else {
                continue;
            };
            let resolution = table.resolve(&record.href());
            assert_eq!(resolution.page, page, "{revision}: {name}");
            assert!(!resolution.was_redirected(), "{revision}: {name}");
        }
    }
}

#[test]
fn unknown_city_redirects_to_section_default() {
    let cases: [(Revision, &str, RouteName); 4] = [
        (Revision::Emissions, "/emissions/dunedin", EmissionsLocation::Christchurch.into()),
        (Revision::ModeShare, "/mode-share/nelson", ModeShareLocation::Christchurch.into()),
        (
            Revision::ModeShareFlow,
            "/mode-share-flow/napier",
            citymaps_foundation::ModeShareFlowLocation::Christchurch.into(),
        ),
        (
            Revision::ModeShare2023,
            "/mode-share-2023/hamilton",
            ModeShare2023Location::Christchurch.into(),
        ),
    ];

    for (revision, path, default) in cases {
        let table = revision.table();
        let resolution = table.resolve(path);
        assert_eq!(resolution.name, Some(default), "{revision}: {path}");
        assert_eq!(resolution.redirects.len(), 1);
        assert_eq!(resolution.redirects[0].to, default);
    }
}

#[test]
fn unknown_emissions_city_matches_christchurch() {
    for revision in Revision::ALL {
        let table = revision.table();
        let unknown = table.resolve("/emissions/unknown-city");
        let known = table.resolve("/emissions/christchurch");
        assert!(unknown.same_destination(&known), "{revision}");
        assert_eq!(unknown.page, Page::Emissions(City::Christchurch));
        assert_eq!(unknown.path_match, ["unknown-city"]);
    }
}

#[test]
fn global_fallbacks() {
    let cases = [
        (Revision::Emissions, Page::Emissions(City::Christchurch)),
        (Revision::ModeShare, Page::About),
        (Revision::ModeShareFlow, Page::Home),
        (Revision::ModeShare2023, Page::About),
    ];
    for (revision, page) in cases {
        assert_eq!(revision.table().resolve("/no/such/page").page, page, "{revision}");
    }
}

#[test]
fn current_revision_root_catch_all_is_named() {
    let table = Revision::CURRENT.table();
    let matched = table.match_path("/anything");
    assert_eq!(matched.name, Some(RootLocation::Root.into()));
    assert_eq!(matched.redirect_target(), Some(RootLocation::About.into()));
}

// =============================================================================
// Named Navigation
// =============================================================================

#[test]
fn navigation_by_every_registered_name() {
    for revision in Revision::ALL {
        let table = revision.table();
        for name in LocationRegistry::all() {
            match table.navigate(name) {
                Ok(_) => assert!(table.contains(name), "{revision}: {name}"),
                Err(_) => assert!(!table.contains(name), "{revision}: {name}"),
            }
        }
    }
}

#[test]
fn mode_share_2023_pages_use_viewers() {
    let table = Revision::ModeShare2023.table();
    let r = table.navigate(ModeShare2023Location::Wellington.into()).unwrap();
    assert_eq!(r.page.component_name(), "WellingtonModeShareViewer");
    assert_eq!(r.layouts, [Page::ModeShare2023Base]);
    assert_eq!(r.path, "/mode-share-2023/wellington");
}
