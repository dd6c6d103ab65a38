//! Integration tests for building route tables from declarations.

use citymaps_foundation::{
    City, EmissionsLocation, ErrorKind, ModeShareLocation, Page, RootLocation,
};
use citymaps_router::{Revision, Route, RouteTable, RouterConfig, Target};

fn emissions_page(city: City, name: EmissionsLocation) -> Route {
    Route::page(city.slug(), name, Page::Emissions(city))
}

fn small_site() -> Vec<Route> {
    vec![
        Route::section(
            "/emissions",
            Page::EmissionsBase,
            vec![
                emissions_page(City::Auckland, EmissionsLocation::Auckland),
                emissions_page(City::Christchurch, EmissionsLocation::Christchurch),
                Route::catch_all(EmissionsLocation::Christchurch),
            ],
        ),
        Route::page("/about", RootLocation::About, Page::About),
        Route::catch_all(RootLocation::About),
    ]
}

// =============================================================================
// Valid Tables
// =============================================================================

#[test]
fn builds_small_site() {
    let table = RouteTable::new(small_site()).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.top_level().len(), 3);
    assert!(table.contains(EmissionsLocation::Auckland.into()));
    assert!(!table.contains(EmissionsLocation::Oamaru.into()));
    assert_eq!(table.routes().len(), 3);
}

#[test]
fn records_know_their_full_paths() {
    let table = RouteTable::new(small_site()).unwrap();
    let auckland = table.get(EmissionsLocation::Auckland.into()).unwrap();
    assert_eq!(auckland.href(), "/emissions/auckland");
    assert_eq!(auckland.target(), Target::Render(Page::Emissions(City::Auckland)));

    let parent = auckland.parent().and_then(|id| table.record(id)).unwrap();
    assert_eq!(parent.href(), "/emissions");
    assert_eq!(parent.path(), "/emissions");
}

#[test]
fn builder_accepts_routes_one_at_a_time() {
    let mut builder = RouteTable::builder().config(RouterConfig::strict());
    for route in small_site() {
        builder = builder.route(route);
    }
    let table = builder.build().unwrap();
    assert!(table.config().case_sensitive);
    assert_eq!(table.len(), 6);
}

#[test]
fn revision_declarations_round_trip_through_the_builder() {
    for revision in Revision::ALL {
        let rebuilt = RouteTable::new(revision.routes()).unwrap();
        assert_eq!(rebuilt.len(), revision.table().len(), "{revision}");
    }
}

// =============================================================================
// Rejected Tables
// =============================================================================

#[test]
fn rejects_section_without_catch_all() {
    let routes = vec![
        Route::section(
            "/mode-share",
            Page::ModeShareBase,
            vec![Route::page("oamaru", ModeShareLocation::Oamaru, Page::ModeShare(City::Oamaru))],
        ),
        Route::catch_all(ModeShareLocation::Oamaru),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingCatchAll { ref parent } if parent == "/mode-share"));
}

#[test]
fn rejects_catch_all_before_siblings() {
    let routes = vec![
        Route::catch_all(RootLocation::About),
        Route::page("/about", RootLocation::About, Page::About),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MisplacedCatchAll { .. }));
}

#[test]
fn rejects_duplicate_names() {
    let routes = vec![
        Route::page("/about", RootLocation::About, Page::About),
        Route::page("/about-us", RootLocation::About, Page::About),
        Route::catch_all(RootLocation::About),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName(_)));
}

#[test]
fn rejects_redirect_to_missing_name() {
    let routes = vec![
        Route::page("/about", RootLocation::About, Page::About),
        Route::catch_all(EmissionsLocation::Wellington),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownRedirectTarget { .. }));
}

#[test]
fn rejects_redirect_loops() {
    let routes = vec![
        Route::redirect("/home", RootLocation::About).named(RootLocation::Root),
        Route::redirect("/about", RootLocation::Root).named(RootLocation::About),
        Route::catch_all(RootLocation::Root),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RedirectCycle(_)));
}

#[test]
fn long_chain_is_not_a_cycle() {
    let routes = vec![
        Route::redirect("/home", RootLocation::About).named(RootLocation::Root),
        Route::page("/about", RootLocation::About, Page::About),
        Route::catch_all(RootLocation::Root),
    ];
    assert!(RouteTable::new(routes.clone()).is_ok());

    let config = RouterConfig::default().with_max_redirects(1);
    let err = RouteTable::builder().config(config).routes(routes).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RedirectLimit { limit: 1, .. }));
    assert!(format!("{err}").contains("ROOT_ROOT -> ROOT_ABOUT"));
}

#[test]
fn rejects_parameters() {
    let routes = vec![
        Route::page("/:city", RootLocation::About, Page::About),
        Route::catch_all(RootLocation::About),
    ];
    let err = RouteTable::new(routes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
}

#[test]
fn short_redirect_limit_rejects_revision() {
    let config = RouterConfig::default().with_max_redirects(0);
    let err = Revision::ModeShare.build_table(config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RedirectLimit { limit: 0, .. }));
}
