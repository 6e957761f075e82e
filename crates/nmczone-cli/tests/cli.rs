use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/name_filter.json");

const FIXTURE_LINES: &str = "www.shop.bit. IN CNAME shop.bit.\n\
    alias.bit. IN CNAME shop.bit.\n\
    shop.bit. IN A 1.2.3.4\n\
    shop.bit. IN A 5.6.7.8\n\
    mail.shop.bit. IN A 10.0.0.1\n\
    delegated.bit. IN NS ns1.example.com.\n";

const TEMPLATE: &str = "$TTL 3600\n@ IN SOA ns.bit. hostmaster.bit. %%serial%% 3600 600 86400 300\n";

fn nmczone() -> Command {
    let mut cmd = Command::cargo_bin("nmczone").unwrap();
    cmd.env_remove("NMCZONE_CONFIG")
        .env_remove("NMCZONE_RPC_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, json_rpc: &str) -> std::path::PathBuf {
    std::fs::write(dir.join("zone-template.conf"), TEMPLATE).unwrap();

    let config = format!(
        "json_rpc = \"{json_rpc}\"\n\
         zonefile = \"{zonefile}\"\n\
         block_count = \"{block_count}\"\n\
         serial_multiplier = 100\n\
         template = \"{template}\"\n\
         imports_file = \"{imports}\"\n\
         rpc_timeout_secs = 2\n\
         max_retries = 0\n",
        zonefile = dir.join("bit.zone").display(),
        block_count = dir.join("block_count").display(),
        template = dir.join("zone-template.conf").display(),
        imports = dir.join("imports.json").display(),
    );

    let path = dir.join("nmczone.toml");
    std::fs::write(&path, config).unwrap();
    path
}

#[test]
fn render_prints_zone_lines() {
    nmczone()
        .args(["render", "--input", FIXTURE])
        .assert()
        .success()
        .stdout(FIXTURE_LINES);
}

#[test]
fn render_reads_stdin() {
    nmczone()
        .args(["render", "--input", "-"])
        .write_stdin(std::fs::read_to_string(FIXTURE).unwrap())
        .assert()
        .success()
        .stdout(FIXTURE_LINES);
}

#[test]
fn render_empty_tld_writes_relative_owners() {
    nmczone()
        .args(["render", "--input", FIXTURE, "--tld", ""])
        .assert()
        .success()
        .stdout(
            "www.shop IN CNAME shop.bit.\n\
             alias IN CNAME shop.bit.\n\
             shop IN A 1.2.3.4\n\
             shop IN A 5.6.7.8\n\
             mail.shop IN A 10.0.0.1\n\
             delegated IN NS ns1.example.com.\n",
        );
}

#[test]
fn render_json_records() {
    let output = nmczone()
        .args(["render", "--input", FIXTURE, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().map(Vec::len), Some(6));
    assert_eq!(
        records[0],
        json!({ "type": "CNAME", "domain": "www.shop.bit.", "target": "shop.bit." })
    );
}

#[test]
fn render_imports() {
    nmczone()
        .args(["render", "--input", FIXTURE, "--imports"])
        .assert()
        .success()
        .stdout("lib.delegated.bit. d/shared\n");
}

#[test]
fn render_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.json");
    std::fs::write(&input, "not json").unwrap();

    nmczone()
        .args(["render", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nmczone.toml");

    nmczone()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    nmczone()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    nmczone()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    nmczone()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serial_multiplier = 1"))
        .stdout(predicate::str::contains("height_method = \"getinfo\""));
}

#[test]
fn config_show_applies_rpc_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "http://127.0.0.1:8336/");

    nmczone()
        .arg("--config")
        .arg(&path)
        .args(["config", "show", "--format", "json"])
        .env("NMCZONE_RPC_URL", "http://node.internal:8336/")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"json_rpc\": \"http://node.internal:8336/\""));
}

#[test]
fn config_path_prints_path() {
    nmczone()
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("custom.toml\n");
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    nmczone()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn unreachable_node_leaves_no_zone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "http://127.0.0.1:1/");

    nmczone()
        .arg("--config")
        .arg(&path)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch names"));

    assert!(!dir.path().join("bit.zone").exists());
    assert!(!dir.path().join("block_count").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_against_mock_node() {
    let server = MockServer::start().await;
    let listing: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(FIXTURE).unwrap()).unwrap();

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "name_filter" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": listing,
            "error": null,
            "id": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "getinfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "blocks": 420_000 },
            "error": null,
            "id": 2,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &server.uri());

    let status = tokio::task::spawn_blocking(move || {
        nmczone()
            .arg("--config")
            .arg(&path)
            .arg("generate")
            .assert()
            .success();
    })
    .await;
    assert!(status.is_ok());

    let zone = std::fs::read_to_string(dir.path().join("bit.zone")).unwrap();
    let expected = format!(
        "$TTL 3600\n@ IN SOA ns.bit. hostmaster.bit. 42000000 3600 600 86400 300\n{FIXTURE_LINES}\n"
    );
    assert_eq!(zone, expected);

    assert_eq!(
        std::fs::read_to_string(dir.path().join("block_count")).unwrap(),
        "420000"
    );

    let imports: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("imports.json")).unwrap())
            .unwrap();
    assert_eq!(
        imports,
        json!([{ "import": "d/shared", "domain": "lib.delegated.bit." }])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_prints_zone() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "name_filter" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "name": "d/solo", "value": "{\"ip6\":\"2001:db8::1\"}" }],
            "error": null,
            "id": 1,
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "getinfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "blocks": 7 },
            "error": null,
            "id": 2,
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "http://127.0.0.1:1/");
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        nmczone()
            .arg("--config")
            .arg(&path)
            .args(["--rpc-url", &uri, "generate", "--dry-run"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "$TTL 3600\n@ IN SOA ns.bit. hostmaster.bit. 700 3600 600 86400 300\nsolo.bit. IN AAAA 2001:db8::1\n\n"
    );
    assert!(!dir.path().join("bit.zone").exists());
    assert!(!dir.path().join("block_count").exists());
}
