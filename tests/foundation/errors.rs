//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use citymaps_foundation::{
    EmissionsLocation, Error, ErrorKind, LocationRegistry, ModeShareLocation, RootLocation,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("/:city", "parameters are not supported");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("/:city"));
}

#[test]
fn error_invalid_route() {
    let err = Error::invalid_route("/emissions", "both a component and a redirect");
    assert!(matches!(err.kind, ErrorKind::InvalidRoute { .. }));
    assert!(format!("{err}").contains("/emissions"));
}

#[test]
fn error_duplicate_name() {
    let err = Error::duplicate_name(ModeShareLocation::Oamaru.into());
    assert!(matches!(err.kind, ErrorKind::DuplicateName(_)));
    assert!(format!("{err}").contains("MODE_SHARE_OAMARU"));
}

#[test]
fn error_unknown_route_name() {
    let err = Error::unknown_route_name(RootLocation::About.into());
    assert_eq!(format!("{err}"), "no route named ROOT_ABOUT");
}

#[test]
fn error_unknown_symbol() {
    let err = Error::unknown_symbol("EMISSIONS_DUNEDIN");
    assert!(matches!(err.kind, ErrorKind::UnknownSymbol(_)));
    assert!(format!("{err}").contains("EMISSIONS_DUNEDIN"));
}

#[test]
fn error_internal() {
    let err = Error::internal("table vanished");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_is_optional() {
    let err = Error::invalid_input("usage: :go NAME");
    assert!(err.context.is_none());

    let err = err.with_context("REPL");
    assert_eq!(err.context.as_deref(), Some("REPL"));
}

#[test]
fn context_does_not_change_display() {
    let plain = Error::unknown_route_name(EmissionsLocation::Auckland.into());
    let with = Error::unknown_route_name(EmissionsLocation::Auckland.into()).with_context("x");
    assert_eq!(format!("{plain}"), format!("{with}"));
}

// =============================================================================
// Errors From Parsing
// =============================================================================

#[test]
fn lookup_failure_is_unknown_symbol() {
    let err = LocationRegistry::lookup("MODE_SHARE_DUNEDIN").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSymbol(ref s) if s == "MODE_SHARE_DUNEDIN"));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::internal("x"));
}
