//! Scenario fixture tests.
//!
//! Every `tests/fixtures/*.toml` file is replayed against the default
//! directive and must match the expectations written in it.

use std::path::PathBuf;

use modiste::atelier::{ModifierDirective, ModifierOptions};
use modiste::Scenario;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_fixture(name: &str) -> modiste::ScenarioReport {
    let scenario = Scenario::load(&fixtures_dir().join(name)).unwrap();
    scenario.run(&ModifierDirective::default())
}

#[test]
fn all_fixtures_pass() {
    let mut paths: Vec<_> = std::fs::read_dir(fixtures_dir())
        .unwrap()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures found");

    let mut failures = Vec::new();
    for path in &paths {
        let report = Scenario::load(path)
            .unwrap()
            .run(&ModifierDirective::default());

        for step in report.steps.iter().filter(|step| !step.passed()) {
            failures.push(format!(
                "{} step {}: {}",
                path.display(),
                step.step,
                step.mismatches.join("; ")
            ));
        }
    }

    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}

#[test]
fn bem_implicit_report() {
    let report = run_fixture("bem_implicit.toml");
    insta::assert_snapshot!(
        serde_json::to_string(&report).unwrap(),
        @r#"{"name":"bem modifier on the first rendered class","steps":[{"step":1,"status":0,"classes":"base-class base-class--hidden"}],"classes":"base-class base-class--hidden"}"#
    );
}

#[test]
fn invalid_value_report() {
    let report = run_fixture("invalid_value.toml");
    let statuses: Vec<_> = report.steps.iter().map(|step| step.status).collect();
    assert_eq!(statuses, vec![-1, -1, -1]);
    insta::assert_snapshot!(report.classes, @"static");
}

#[test]
fn custom_bem_directive_name() {
    let scenario = Scenario::from_toml(
        r#"
directive = "block"
rendered = "card"

[[steps]]
value = { isRaised = true }
"#,
    )
    .unwrap();

    let directive = ModifierDirective::new(ModifierOptions {
        bem_directive_name: "block".into(),
        bem_separator: "__".into(),
        ..Default::default()
    });
    insta::assert_snapshot!(scenario.run(&directive).classes, @"card card__raised");

    // The default directive treats `block` as a generic name
    insta::assert_snapshot!(
        scenario.run(&ModifierDirective::default()).classes,
        @"card is-raised"
    );
}

#[test]
fn json_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    std::fs::write(
        &path,
        r#"{
  "directive": "is",
  "steps": [
    { "value": ["hidden", "opened"], "state": { "hidden": true, "opened": "" } }
  ]
}"#,
    )
    .unwrap();

    let report = Scenario::load(&path).unwrap().run(&ModifierDirective::default());
    insta::assert_snapshot!(report.classes, @"is-hidden");
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.yaml");
    std::fs::write(&path, "steps: []").unwrap();

    let err = Scenario::load(&path).unwrap_err();
    assert!(matches!(err, modiste::CliError::UnknownFormat(_)));
}
