use assert_cmd::Command;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LEXICON: &str = indoc! {"
    Word,valence,arousal,dominance
    happy,8.0,6.0,6.0
    love,8.5,6.5,5.5
    rain,5.0,3.0,5.0
"};

/// Helper creating a lexicon, an input dir and an output dir
fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::write(base.join("lexicon.csv"), LEXICON).unwrap();
    fs::create_dir_all(base.join("docs")).unwrap();
    fs::create_dir_all(base.join("out")).unwrap();
    temp_dir
}

fn anew() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anew-sentiment"));
    cmd.env_remove("ANEW_LEXICON").env("ANEW_QUIET", "1");
    cmd
}

fn output_for(base: &Path, stem: &str) -> String {
    fs::read_to_string(base.join("out").join(format!("Output Anew Sentiment {stem}.csv")))
        .unwrap()
}

#[test]
fn test_analyze_single_file_writes_csv() {
    let temp_dir = setup();
    let base = temp_dir.path();
    let input = base.join("docs").join("story.txt");
    fs::write(&input, "I love the rain. I am not happy!\n").unwrap();

    anew()
        .current_dir(base)
        .args(["analyze", "--lexicon", "lexicon.csv", "--out", "out", "--file"])
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        output_for(base, "story"),
        indoc! {r#"
            Sentence ID,Sentence,Sentiment,Sentiment Label,Arousal,Dominance,# Words Found,Found Words,All Words
            1,I love the rain.,6.75,positive,4.75,5.25,2 out of 2,"['love', 'rain']","['love', 'rain']"
            2,I am not happy!,2.0,negative,4.0,4.0,1 out of 1,['neg-happy'],['happy']
        "#}
    );
}

#[test]
fn test_analyze_dir_skips_empty_documents() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(base.join("docs").join("a.txt"), "Happy rain.").unwrap();
    fs::write(base.join("docs").join("empty.txt"), "").unwrap();
    fs::write(base.join("docs").join("notes.md"), "Happy.").unwrap();

    anew()
        .current_dir(base)
        .args([
            "analyze",
            "--lexicon",
            "lexicon.csv",
            "--dir",
            "docs",
            "--out",
            "out",
            "--mode",
            "median",
        ])
        .assert()
        .success();

    let mut written: Vec<String> = fs::read_dir(base.join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["Output Anew Sentiment a.csv"]);
    assert!(output_for(base, "a").contains("6.5,positive"));
}

#[test]
fn test_lexicon_from_config_file() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(
        base.join(".anew.toml"),
        indoc! {r#"
            [lexicon]
            path = "lexicon.csv"

            [output]
            format = "json"
        "#},
    )
    .unwrap();
    fs::write(base.join("docs").join("story.txt"), "Rain.").unwrap();

    anew()
        .current_dir(base)
        .args(["analyze", "--file", "docs/story.txt", "--out", "out"])
        .assert()
        .success();

    let json = fs::read_to_string(base.join("out").join("Output Anew Sentiment story.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["label"], "neutral");
    assert_eq!(value[0]["index"], 1);
}

#[test]
fn test_terminal_format_from_config_skips_summary() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(
        base.join(".anew.toml"),
        indoc! {r#"
            [lexicon]
            path = "lexicon.csv"

            [output]
            format = "terminal"
        "#},
    )
    .unwrap();
    fs::write(base.join("docs").join("story.txt"), "Rain.").unwrap();

    let output = anew()
        .current_dir(base)
        .args(["analyze", "--plain", "--file", "docs/story.txt", "--out", "out"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Rain."));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Scored"));
    assert_eq!(fs::read_dir(base.join("out")).unwrap().count(), 0);
}

#[test]
fn test_file_format_prints_summary() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(base.join("docs").join("story.txt"), "Rain.").unwrap();

    let output = anew()
        .current_dir(base)
        .args(["analyze", "--lexicon", "lexicon.csv", "--file", "docs/story.txt", "--out", "out"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Scored 1 sentences in 1 documents"));
}

#[test]
fn test_missing_lexicon_fails_before_scoring() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(base.join("docs").join("story.txt"), "Rain.").unwrap();

    let output = anew()
        .current_dir(base)
        .args(["analyze", "--file", "docs/story.txt", "--out", "out"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No lexicon configured"));
    assert_eq!(fs::read_dir(base.join("out")).unwrap().count(), 0);
}

#[test]
fn test_missing_output_dir_is_rejected() {
    let temp_dir = setup();
    let base = temp_dir.path();
    fs::write(base.join("docs").join("story.txt"), "Rain.").unwrap();

    anew()
        .current_dir(base)
        .args([
            "analyze",
            "--lexicon",
            "lexicon.csv",
            "--file",
            "docs/story.txt",
            "--out",
            "nowhere",
        ])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    anew().current_dir(temp_dir.path()).arg("init").assert().success();
    assert!(temp_dir.path().join(".anew.toml").exists());

    anew().current_dir(temp_dir.path()).arg("init").assert().failure();
}
