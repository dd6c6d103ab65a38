//! Text rendering of resolutions and route tables for the terminal.

use std::fmt::Write as _;

use citymaps_foundation::{LocationRegistry, Page, Section};
use citymaps_router::{Resolution, RouteId, RouteMatch, RouteTable, Target};

/// Renders a resolution: the page, its layouts, and any redirects followed.
#[must_use]
pub fn resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    for hop in &resolution.redirects {
        let _ = writeln!(out, "\x1b[2m  {} -> {}\x1b[0m", hop.from, hop.to);
    }
    let _ = write!(
        out,
        "\x1b[1m{}\x1b[0m => {}",
        resolution.path,
        mounted(&resolution.layouts, resolution.page)
    );
    if let Some(name) = resolution.name {
        let _ = write!(out, " \x1b[32m[{name}]\x1b[0m");
    }
    if !resolution.path_match.is_empty() {
        let _ = write!(out, " (pathMatch: {})", resolution.path_match.join("/"));
    }
    out
}

/// Renders a single match step.
#[must_use]
pub fn route_match(table: &RouteTable, matched: &RouteMatch) -> String {
    let declared = table
        .record(matched.route)
        .map_or_else(String::new, citymaps_router::RouteRecord::path);
    let action = match matched.target {
        Target::Render(page) => format!("render {}", mounted(&matched.layouts, page)),
        Target::Redirect(name) => format!("redirect to {name}"),
    };
    let mut out = format!("{} matches \x1b[1m{declared}\x1b[0m: {action}", matched.path);
    if !matched.path_match.is_empty() {
        let _ = write!(out, " (pathMatch: {})", matched.path_match.join("/"));
    }
    out
}

/// Renders a route table as an indented tree.
#[must_use]
pub fn route_tree(table: &RouteTable) -> String {
    let mut out = String::new();
    for &id in table.top_level() {
        tree_node(table, id, 0, &mut out);
    }
    out
}

fn tree_node(table: &RouteTable, id: RouteId, depth: usize, out: &mut String) {
    let Some(record) = table.record(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{}", record.pattern());
    match record.target() {
        Target::Render(page) => {
            let _ = write!(out, "  {page}");
        }
        Target::Redirect(name) => {
            let _ = write!(out, "  -> {name}");
        }
    }
    if let Some(name) = record.name() {
        let _ = write!(out, "  \x1b[32m[{name}]\x1b[0m");
    }
    out.push('\n');
    for &child in record.children() {
        tree_node(table, child, depth + 1, out);
    }
}

/// Renders the registered names, optionally for one section only, marking
/// those the table does not contain.
#[must_use]
pub fn names(table: &RouteTable, section: Option<Section>) -> String {
    let mut out = String::new();
    let sections = section.map_or_else(|| LocationRegistry::sections().to_vec(), |s| vec![s]);
    for section in sections {
        let _ = writeln!(out, "\x1b[1m{section}\x1b[0m");
        for &name in LocationRegistry::names(section) {
            match table.href(name) {
                Ok(href) => {
                    let _ = writeln!(out, "  {name:<32} {href}");
                }
                Err(_) => {
                    let _ = writeln!(out, "\x1b[2m  {name:<32} (not in this revision)\x1b[0m");
                }
            }
        }
    }
    out
}

fn mounted(layouts: &[Page], page: Page) -> String {
    layouts
        .iter()
        .chain(std::iter::once(&page))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" > ")
}
