use arena_client::{ClientConfig, run};
use arena_core::{GameSnapshot, KnightStatus};

/// Plays a framed move list from disk and checks the exported JSON.
#[test]
fn run_exports_final_state() {
    let dir = tempfile::tempdir().unwrap();
    let moves = dir.path().join("moves.txt");
    let output = dir.path().join("final_state.json");
    std::fs::write(
        &moves,
        "GAME-START\nR:E\nR:E\nR:S\nR:S\nB:W\nGAME-END\n",
    )
    .unwrap();

    let config = ClientConfig {
        moves_file: moves,
        output_file: output.clone(),
        ..ClientConfig::default()
    };
    let report = run(&config).unwrap();
    assert_eq!(report.applied(), 5);

    let snapshot: GameSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let red = snapshot.knight("Red").unwrap();
    assert_eq!(red.position(), Some([2, 2]));
    assert_eq!(red.item(), Some("Axe"));
    assert_eq!(snapshot.knight("Blue").unwrap().status(), KnightStatus::Drowned);
}

/// Layout and rule files replace the built-in defaults.
#[test]
fn run_uses_scenario_and_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let moves = dir.path().join("moves.txt");
    let scenario = dir.path().join("duel.toml");
    let rules = dir.path().join("rules.toml");
    let output = dir.path().join("out.json");

    std::fs::write(&moves, "R:E\n").unwrap();
    std::fs::write(
        &scenario,
        r#"
[[knights]]
color = "Red"
row = 4
col = 3

[[items]]
name = "Axe"
attack = 2
row = 4
col = 4

[[items]]
name = "Helmet"
defense = 1
row = 4
col = 4
"#,
    )
    .unwrap();
    std::fs::write(
        &rules,
        "pickup_priority = [{ item = \"H\", priority = 2 }, { item = \"A\", priority = 1 }]\n",
    )
    .unwrap();

    let config = ClientConfig {
        moves_file: moves,
        scenario_file: Some(scenario),
        config_file: Some(rules),
        output_file: output,
        ..ClientConfig::default()
    };
    let report = run(&config).unwrap();

    let snapshot = report.state.snapshot();
    assert_eq!(snapshot.knight("Red").unwrap().item(), Some("Helmet"));
    assert_eq!(snapshot.item("Axe").unwrap().position(), Some([4, 4]));
}

#[test]
fn missing_moves_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig {
        moves_file: dir.path().join("absent.txt"),
        output_file: dir.path().join("out.json"),
        ..ClientConfig::default()
    };

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"), "{err}");
}
