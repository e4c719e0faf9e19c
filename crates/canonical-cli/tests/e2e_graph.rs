//! E2E tests for the graph commands: traversals, reachability, topo, cycles.
//!
//! Runs against the built-in league graph and against temporary TOML files.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn canon_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("canon"));
    cmd.env("CANON_LOG", "error");
    cmd.env("FORMAT", "text");
    cmd.env_remove("CANON_GRAPH");
    cmd
}

fn graph_file(toml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp graph");
    file.write_all(toml.as_bytes()).expect("write temp graph");
    file
}

fn chain_file() -> NamedTempFile {
    graph_file(
        r#"
[[edges]]
from = "a"
to = "b"

[[edges]]
from = "b"
to = "c"
weight = 7

[[edges]]
from = "c"
to = "d"
"#,
    )
}

/// First JSON document on stderr; anyhow's own report follows it.
fn stderr_json(stderr: &[u8]) -> Value {
    serde_json::Deserializer::from_slice(stderr)
        .into_iter::<Value>()
        .next()
        .expect("stderr should start with JSON")
        .expect("valid JSON")
}

// ---------------------------------------------------------------------------
// League graph
// ---------------------------------------------------------------------------

#[test]
fn dfs_from_chelsea_on_league() {
    canon_cmd()
        .args(["dfs", "Chelsea"])
        .assert()
        .success()
        .stdout(
            "Chelsea Barcelona RealMadrid Tottenham Arsenal Liverpool ManCity ManUtd Juventus\n",
        );
}

#[test]
fn bfs_from_chelsea_on_league() {
    canon_cmd()
        .args(["bfs", "Chelsea"])
        .assert()
        .success()
        .stdout(
            "Chelsea Barcelona Juventus RealMadrid ManCity Tottenham ManUtd Arsenal Liverpool\n",
        );
}

#[test]
fn bfs_json_lists_order() {
    let output = canon_cmd()
        .args(["bfs", "ManCity", "--format", "json"])
        .output()
        .expect("bfs should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["walk"], "bfs");
    assert_eq!(json["start"], "ManCity");
    assert_eq!(json["order"], serde_json::json!(["ManCity", "ManUtd"]));
}

#[test]
fn reachable_true_and_false() {
    canon_cmd()
        .args(["reachable", "Chelsea", "ManUtd"])
        .assert()
        .success()
        .stdout("true\n");

    canon_cmd()
        .args(["reachable", "ManUtd", "Chelsea"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn cycle_through_barcelona() {
    canon_cmd()
        .args(["cycle", "Barcelona"])
        .assert()
        .success()
        .stdout("true\nBarcelona RealMadrid Tottenham Arsenal Liverpool Chelsea Barcelona\n");
}

#[test]
fn no_cycle_below_mancity() {
    canon_cmd()
        .args(["cycle", "ManCity"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn topo_on_league_reports_cycle() {
    canon_cmd()
        .args(["topo"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cycle detected"));
}

#[test]
fn topo_cycle_error_json_has_code() {
    let output = canon_cmd()
        .args(["topo", "--json"])
        .output()
        .expect("topo should not crash");
    assert!(!output.status.success());

    let json = stderr_json(&output.stderr);
    assert_eq!(json["error"]["error_code"], "E2002");
    assert!(json["error"]["suggestion"].is_string());
}

#[test]
fn unknown_start_node_fails() {
    let output = canon_cmd()
        .args(["dfs", "Nope", "--format", "json"])
        .output()
        .expect("dfs should not crash");
    assert!(!output.status.success());

    let json = stderr_json(&output.stderr);
    assert_eq!(json["error"]["error_code"], "E2001");
    assert_eq!(json["error"]["message"], "node 'Nope' not found");
}

#[test]
fn nodes_json_counts_league() {
    let output = canon_cmd()
        .args(["nodes", "--json"])
        .output()
        .expect("nodes should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["node_count"], 9);
    assert_eq!(json["edge_count"], 9);
    assert_eq!(json["nodes"][0]["key"], "Juventus");
}

// ---------------------------------------------------------------------------
// Graph files
// ---------------------------------------------------------------------------

#[test]
fn topo_on_chain_file() {
    let file = chain_file();
    canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .arg("topo")
        .assert()
        .success()
        .stdout("a b c d\n");
}

#[test]
fn graph_file_from_env() {
    let file = chain_file();
    canon_cmd()
        .env("CANON_GRAPH", file.path())
        .args(["bfs", "b"])
        .assert()
        .success()
        .stdout("b c d\n");
}

#[test]
fn nodes_text_shows_weights() {
    let file = chain_file();
    canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .arg("nodes")
        .assert()
        .success()
        .stdout("a -> b(1)\nb -> c(7)\nc -> d(1)\nd\n");
}

#[test]
fn undirected_edges_form_cycle() {
    let file = graph_file(
        r#"
[[edges]]
from = "x"
to = "y"
undirected = true
"#,
    );
    canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .args(["cycle", "x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("true\n"));
}

#[test]
fn empty_key_in_file_is_rejected() {
    let file = graph_file(
        r#"
[[edges]]
from = "a"
to = ""
"#,
    );
    let output = canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .args(["nodes", "--json"])
        .output()
        .expect("nodes should not crash");
    assert!(!output.status.success());

    let json = stderr_json(&output.stderr);
    assert_eq!(json["error"]["error_code"], "E1001");
}

#[test]
fn missing_graph_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    canon_cmd()
        .arg("--graph")
        .arg(dir.path().join("missing.toml"))
        .arg("nodes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn malformed_toml_is_file_invalid() {
    let file = graph_file("[[edges]\nfrom = ");
    let output = canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .args(["topo", "--format", "json"])
        .output()
        .expect("topo should not crash");
    assert!(!output.status.success());

    let json = stderr_json(&output.stderr);
    assert_eq!(json["error"]["error_code"], "E3001");
}

#[test]
fn deep_chain_file_topo_and_cycle() {
    const LEN: usize = 50_000;
    let mut toml = String::new();
    for i in 0..LEN {
        toml.push_str(&format!("[[edges]]\nfrom = \"n{i}\"\nto = \"n{}\"\n\n", i + 1));
    }
    let file = graph_file(&toml);

    let output = canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .args(["topo", "--json"])
        .output()
        .expect("topo should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["order"].as_array().map(Vec::len), Some(LEN + 1));
    assert_eq!(json["order"][0], "n0");

    canon_cmd()
        .arg("--graph")
        .arg(file.path())
        .args(["cycle", "n0"])
        .assert()
        .success()
        .stdout("false\n");
}
