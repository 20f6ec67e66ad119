mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn user_can_save_preset_and_reuse_it() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["presets", "save", "  Rainy Street  ", "-p", "cinematic-drama"])
        .args(["--set", "location=rain-soaked alley", "--set", "props=red umbrella"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved preset 'Rainy Street'"));

    let presets = ctx.stored_presets("veo3-user-presets");
    assert_eq!(presets.len(), 1);
    let saved = &presets[0];
    assert_eq!(saved["name"], "Rainy Street");
    assert_eq!(saved["values"]["location"], "rain-soaked alley");
    assert_eq!(saved["values"]["frameRate"], "24fps");
    assert_eq!(saved["values"].as_object().unwrap().len(), 17);
    let id = saved["id"].as_str().unwrap().to_string();

    ctx.cli()
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Rainy Street"));

    let veo3 = ctx.generate_json(&["--preset", &id, "-f", "json", "-t", "veo3"]);
    assert_eq!(veo3["scene"]["location"], "rain-soaked alley");
    assert_eq!(veo3["visual_details"]["props"], "red umbrella");
}

#[test]
fn saved_presets_accumulate_in_order() {
    let ctx = TestContext::new();

    for name in ["First", "Second"] {
        ctx.cli().args(["presets", "save", name, "--set", "mood=calm"]).assert().success();
    }

    let names: Vec<String> = ctx
        .stored_presets("veo3-user-presets")
        .iter()
        .map(|preset| preset["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn corrupt_storage_reads_as_no_user_presets() {
    let ctx = TestContext::new();
    ctx.write_storage(r#"{"veo3-user-presets": "not json at all"}"#);

    ctx.cli()
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My presets:\n  (none)"));

    ctx.cli().args(["presets", "save", "Recovered"]).assert().success();
    assert_eq!(ctx.stored_presets("veo3-user-presets").len(), 1);
}

#[test]
fn storage_other_keys_are_preserved_on_save() {
    let ctx = TestContext::new();
    ctx.write_storage(r#"{"theme": "dark"}"#);

    ctx.cli().args(["presets", "save", "Keep"]).assert().success();

    assert_eq!(ctx.read_storage()["theme"], "dark");
}

#[test]
fn configured_presets_key_is_used() {
    let ctx = TestContext::new();
    ctx.write_config("[storage]\npresets_key = \"team-presets\"\n");

    ctx.cli().args(["presets", "save", "Team"]).assert().success();

    let storage = ctx.read_storage();
    assert!(storage.get("veo3-user-presets").is_none());
    assert_eq!(ctx.stored_presets("team-presets").len(), 1);
}
