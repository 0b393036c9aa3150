use anew_sentiment::core::Error;
use anew_sentiment::Lexicon;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

/// Helper writing a lexicon file into a fresh temp dir
fn write_lexicon(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lexicon.csv");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

#[test]
fn test_load_ignores_extra_columns_and_folds_case() {
    let (_dir, path) = write_lexicon(indoc! {"
        Word,Word No.,valence,valence SD,arousal,arousal SD,dominance,dominance SD
        Happy,1,8.21,1.82,6.49,2.77,6.63,2.43
        rain,2,5.08,2.51,3.65,2.35,5.21,2.36
    "});

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.len(), 2);

    let happy = lexicon.lookup("HAPPY").unwrap();
    assert_eq!(happy.valence, 8.21);
    assert_eq!(happy.arousal, 6.49);
    assert_eq!(happy.dominance, 6.63);
    assert!(lexicon.contains("rain"));
    assert!(!lexicon.contains("snow"));
}

#[test]
fn test_first_duplicate_wins() {
    let (_dir, path) = write_lexicon(indoc! {"
        Word,valence,arousal,dominance
        joy,8.6,7.2,6.9
        Joy,1.0,1.0,1.0
    "});

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.duplicates(), 1);
    assert_eq!(lexicon.lookup("joy").unwrap().valence, 8.6);
}

#[test]
fn test_missing_file_is_a_lexicon_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.csv");

    let err = Lexicon::load(&path).unwrap_err();
    match err {
        Error::Lexicon { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_numeric_score_is_rejected() {
    let (_dir, path) = write_lexicon(indoc! {"
        Word,valence,arousal,dominance
        joy,8.6,7.2,6.9
        grief,low,2.0,3.0
    "});

    let err = Lexicon::load(&path).unwrap_err();
    assert!(matches!(err, Error::Lexicon { .. }));
    assert!(err.to_string().contains("line 3"), "{err}");
}

#[test]
fn test_missing_column_is_rejected() {
    let (_dir, path) = write_lexicon(indoc! {"
        Word,valence,arousal
        joy,8.6,7.2
    "});

    assert!(matches!(
        Lexicon::load(&path),
        Err(Error::Lexicon { .. })
    ));
}

#[test]
fn test_header_only_lexicon_is_rejected() {
    let (_dir, path) = write_lexicon("Word,valence,arousal,dominance\n");
    let err = Lexicon::load(&path).unwrap_err();
    assert!(err.to_string().contains("no entries"));
}
