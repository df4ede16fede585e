//! Tests for the list command.

mod common;

use common::*;

#[test]
fn test_list_prints_builtin_manifest() {
    let env = TestEnv::builder().build();

    let result = env.run(&["list"]);

    assert!(result.is_success());
    assert_eq!(
        result.stdout_lines(),
        vec![
            "Plotly: node_modules/plotly.js/dist/plotly.js -> static/js/plotly.js",
            "Tailwind CSS: node_modules/tailwindcss/dist/tailwind.min.js -> static/js/tailwind.min.js",
            "Lucide: node_modules/lucide/dist/umd/lucide.js -> static/js/lucide.js",
            "directory: static/js",
            "directory: static/css",
        ]
    );
    assert!(!env.project_path("static").exists());
}

#[test]
fn test_list_json() {
    let env = TestEnv::builder().build();

    let result = env.run(&["list", "--json"]);

    assert!(result.is_success());
    let events = result.json_events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "asset");
    assert_eq!(events[0]["name"], "Plotly");
    assert_eq!(events[2]["name"], "Lucide");
    assert_eq!(events[3]["event"], "complete");
    assert_eq!(events[3]["asset_count"], 3);
    assert_eq!(events[3]["directories"].as_array().unwrap().len(), 2);
}
