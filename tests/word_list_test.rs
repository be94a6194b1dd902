use isogram_check::core::ConfigProvider;
use isogram_check::utils::validation::Validate;
use isogram_check::{
    render, CharPolicy, CheckEngine, FileSource, IsogramChecker, IsogramError, OutputFormat,
    ReaderSource, TomlConfig,
};
use std::io::{Cursor, Write};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_check_word_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    std::fs::write(&path, "Dermatoglyphics\r\nmoOse\n\nisogram\nsix-year-old\n").unwrap();

    let engine = CheckEngine::new(FileSource::new(&path), IsogramChecker::default());
    let report = engine.run().unwrap();

    assert_eq!(report.total, 4);
    assert_eq!(report.isograms, 2);
    assert_eq!(report.non_isograms, 2);

    let text = render(&report, OutputFormat::Text).unwrap();
    assert_eq!(
        text,
        "Dermatoglyphics: true\nmoOse: false\nisogram: true\nsix-year-old: false"
    );
}

#[test]
fn test_config_file_drives_engine() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "[check]").unwrap();
    writeln!(config_file, "policy = \"letters\"").unwrap();
    writeln!(config_file, "max_input_chars = 32").unwrap();

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(config.policy(), CharPolicy::LettersOnly);

    let source = ReaderSource::new(Cursor::new("six-year-old\nup-to-date\n"));
    let report = CheckEngine::from_config(source, &config).run().unwrap();

    assert!(report.verdicts[0].is_isogram);
    assert!(!report.verdicts[1].is_isogram);
    assert_eq!(report.verdicts[1].repeated, Some('t'));
}

#[test]
fn test_limit_from_config_rejects_long_input() {
    let config = TomlConfig::from_toml_str("[check]\nmax_input_chars = 4\n").unwrap();
    let source = ReaderSource::new(Cursor::new("abc\nabcdefgh\n"));

    let err = CheckEngine::from_config(source, &config).run().unwrap_err();
    assert!(matches!(err, IsogramError::InvalidArgument { .. }));
}

#[test]
fn test_non_utf8_file_is_invalid_argument() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'a', b'b', 0xc3, 0x28, b'\n']).unwrap();

    let err = CheckEngine::new(FileSource::new(file.path()), IsogramChecker::default())
        .run()
        .unwrap_err();
    assert!(matches!(err, IsogramError::InvalidArgument { .. }));
}

#[test]
fn test_json_report_shape() {
    let source = ReaderSource::new(Cursor::new("aba\n"));
    let report = CheckEngine::new(source, IsogramChecker::default())
        .run()
        .unwrap();

    let json = render(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["verdicts"][0]["input"], "aba");
    assert_eq!(value["verdicts"][0]["is_isogram"], false);
    assert_eq!(value["isograms"], 0);
}
