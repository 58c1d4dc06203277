//! End-to-end tests for `roster catalog`.

mod common;

use common::{TestEnv, CATALOG};
use serde_json::json;

fn env_with_catalog() -> TestEnv {
    let env = TestEnv::new();
    env.write("dados.json", CATALOG);
    env
}

#[test]
fn categories_keep_first_seen_order() {
    let env = env_with_catalog();
    let result = env.run(&["--json", "catalog", "categories"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.json(),
        json!({"event": "categories", "categories": ["livros", "games", "casa"]})
    );
}

#[test]
fn top_ranks_string_and_number_prices_together() {
    let env = env_with_catalog();

    let desc = env.run(&["--json", "catalog", "top"]).json();
    let ids: Vec<_> = desc["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(2), json!(4), json!(5), json!(1), json!("3a")]);
    assert_eq!(desc["order"], "descending");

    let asc = env.run(&["--json", "catalog", "top", "--order", "asc", "-n", "2"]).json();
    assert_eq!(asc["products"][0]["id"], "3a");
    assert_eq!(asc["products"][1]["id"], 1);
    assert_eq!(asc["products"].as_array().unwrap().len(), 2);
}

#[test]
fn list_prints_numbered_products() {
    let env = env_with_catalog();
    let result = env.run(&["catalog", "list", "--category", "livros"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[0]. ID: 1 - R$30.50"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("[1]. ID: 3a - R$12.90"), "stdout:\n{}", result.stdout);
}

#[test]
fn cheapest_and_priciest_in_category() {
    let env = env_with_catalog();

    let cheapest = env.run(&["catalog", "cheapest", "--category", "livros"]);
    assert!(cheapest.success, "stderr:\n{}", cheapest.stderr);
    assert!(cheapest.stdout.contains("\tID: 3a"));

    let priciest = env.run(&["--json", "catalog", "priciest", "--category", "games"]).json();
    assert_eq!(priciest["event"], "priciest");
    assert_eq!(priciest["product"]["id"], 2);
}

#[test]
fn empty_category_fails_with_message() {
    let env = env_with_catalog();
    let result = env.run(&["catalog", "cheapest", "--category", "brinquedos"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("no products found in category 'brinquedos'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn missing_catalog_file_is_fatal() {
    let env = TestEnv::new();
    let result = env.run(&["catalog", "categories"]);

    assert!(!result.success);
    assert!(result.stderr.contains("dados.json"), "stderr:\n{}", result.stderr);
}

#[test]
fn catalog_file_flag_overrides_default_path() {
    let env = TestEnv::new();
    let path = env.write("other.json", r#"[{"id": 9, "categoria": "x", "preco": 1}]"#);

    let result = env.run(&[
        "--json",
        "--catalog-file",
        path.to_str().unwrap(),
        "catalog",
        "categories",
    ]);
    assert_eq!(result.json()["categories"], json!(["x"]));
}

#[test]
fn menu_without_terminal_fails() {
    let env = env_with_catalog();
    let result = env.run(&["catalog", "menu"]);

    assert!(!result.success);
    assert!(result.stderr.contains("interactive terminal"), "stderr:\n{}", result.stderr);
}

#[test]
fn no_subcommand_without_terminal_lists_commands() {
    let env = TestEnv::new();
    let result = env.run(&[]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("roster catalog"));
    assert!(result.stdout.contains("roster musicians"));
}
