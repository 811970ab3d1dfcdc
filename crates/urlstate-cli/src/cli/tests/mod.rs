use super::*;
use crate::cli::commands::{mutated_href, parse_href};
use serde_json::json;
use urlstate_core::schema::FieldKind;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

fn specs(raw: &[&str]) -> Vec<FieldSpec> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn cli_parse_parse_with_fields() {
    match parse(&[
        "urlstate",
        "parse",
        "/items?page=2",
        "--field",
        "page:number",
        "-f",
        "sort:string=asc",
    ]) {
        CliCommand::Parse {
            href,
            fields,
            strict,
            first_wins,
        } => {
            assert_eq!(href, "/items?page=2");
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].kind, FieldKind::Number);
            assert_eq!(fields[1].fallback.as_deref(), Some("asc"));
            assert!(!strict);
            assert!(!first_wins);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_flags() {
    match parse(&["urlstate", "parse", "/x", "--strict", "--first-wins"]) {
        CliCommand::Parse {
            strict, first_wins, ..
        } => {
            assert!(strict);
            assert!(first_wins);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_rejects_bad_field_spec() {
    assert!(Cli::try_parse_from(["urlstate", "parse", "/x", "--field", "page"]).is_err());
}

#[test]
fn cli_parse_set() {
    match parse(&["urlstate", "set", "/items?sort=asc", "page", "2"]) {
        CliCommand::Set { href, key, value } => {
            assert_eq!(href, "/items?sort=asc");
            assert_eq!(key, "page");
            assert_eq!(value, "2");
        }
        _ => panic!("expected Set"),
    }
}

#[test]
fn cli_parse_delete() {
    match parse(&["urlstate", "delete", "/items?page=2", "page"]) {
        CliCommand::Delete { href, key } => {
            assert_eq!(href, "/items?page=2");
            assert_eq!(key, "page");
        }
        _ => panic!("expected Delete"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["urlstate", "config"]), CliCommand::Config));
}

#[test]
fn parse_href_lenient() {
    let out = parse_href(
        "/items?page=abc&sort=desc",
        &specs(&["page:number", "sort:string=asc"]),
        false,
        UrlStateOptions::default(),
    )
    .unwrap();
    assert_eq!(
        serde_json::Value::Object(out),
        json!({ "page": null, "sort": "desc" })
    );
}

#[test]
fn parse_href_strict_fails() {
    let err = parse_href(
        "/items?page=abc",
        &specs(&["page:number"]),
        true,
        UrlStateOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("page"));
}

#[test]
fn parse_href_first_wins() {
    let options = UrlStateOptions {
        duplicate_keys: DuplicateKeyPolicy::FirstWins,
        ..UrlStateOptions::default()
    };
    let out = parse_href("/x?page=1&page=5", &specs(&["page:number"]), false, options).unwrap();
    assert_eq!(out["page"], json!(1.0));
}

#[test]
fn mutated_href_set_and_delete() {
    let options = UrlStateOptions::default();
    assert_eq!(
        mutated_href("/items?sort=asc", "page", Some("2"), options).unwrap(),
        "/items?sort=asc&page=2"
    );
    assert_eq!(
        mutated_href("/items?sort=asc&page=2", "page", None, options).unwrap(),
        "/items?sort=asc"
    );
}
