//! Browse a small instances collection from the terminal: filter it, expand
//! a row, and query its payload.
//!
//! Run with `cargo run --example browse`.

use std::error::Error;

use serde_json::json;
use vitrine::{Backend, Instance, TunnelEndpoint, Vitrine};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let instances: Vec<Instance> = serde_json::from_value(json!([
        {
            "id": "i-0a1b2c", "name": "web-alpha", "backend_name": "aws-prod",
            "private_ip": "10.0.0.4", "public_ip": "203.0.113.9",
            "status": "running", "type": "m5.large",
            "raw": {
                "state": {"name": "running", "code": 16},
                "tags": [
                    {"key": "env", "value": "prod"},
                    {"key": "team", "value": "web"}
                ]
            }
        },
        {
            "id": "i-1d2e3f", "name": "web-beta", "backend_name": "gcp-dev",
            "private_ip": "10.0.0.7", "public_ip": "",
            "status": "stopped", "type": "e2-medium",
            "raw": {"state": {"name": "stopped", "code": 80}, "tags": []}
        },
        {
            "id": "i-4a5b6c", "name": "db-primary", "backend_name": "aws-prod",
            "private_ip": "10.0.1.12", "public_ip": "",
            "status": "running", "type": "r5.xlarge",
            "raw": {"state": {"name": "running", "code": 16}, "tags": [{"key": "env", "value": "prod"}]}
        }
    ]))?;

    let backends: Vec<Backend> = serde_json::from_value(json!([
        {"id": 0, "name": "aws-prod", "type": "aws"},
        {"id": 1, "name": "gcp-dev", "type": "gcp"}
    ]))?;

    let mut view = Vitrine::instances()
        .facet_options_from(&backends)
        .tunnel(TunnelEndpoint::new("term")?)
        .build_with(instances);

    println!("all rows:");
    for row in view.page_records() {
        println!("  {} {} [{}] {}", row.id, row.name, row.backend_name, row.status);
    }

    view.set_filter_text("web");
    println!("\nfree text `web`: {} of {} rows", view.total_visible(), view.records().len());

    view.toggle_facet("aws-prod");
    println!("plus facet `aws-prod`:");
    for row in view.page_records() {
        println!("  {} {}", row.id, row.name);
    }

    view.clear_filters();
    view.expand("i-0a1b2c");
    for path in ["", "$.state.name", "$.tags[?(@.value == 'prod')].key", "$.absent", "$.bad["] {
        view.set_panel_path("i-0a1b2c", path);
        if let Some(panel) = view.panel("i-0a1b2c") {
            match panel.outcome().error() {
                Some(error) => println!("\n`{path}` -> {error}"),
                None => println!("\n`{path}` -> {:?}", panel.values()),
            }
        }
    }

    if let Some(link) = view.tunnel_link("i-0a1b2c") {
        println!("\ntunnel: {link}");
    }

    Ok(())
}
