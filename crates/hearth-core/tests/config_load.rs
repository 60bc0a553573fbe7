use hearth_core::config::HearthConfig;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp = tempdir().expect("tempdir");
    let cfg = HearthConfig::load(Some(&temp.path().join("absent.toml"))).expect("load config");
    assert_eq!(cfg, HearthConfig::default());
    assert_eq!(cfg.salat.default_location().to_string(), "Cairo, Egypt");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("hearth.toml");
    std::fs::write(
        &path,
        r#"
[salat]
default_city = "Istanbul"
default_country = "Turkey"
method = 13

[clock]
timezone = "Europe/Istanbul"
"#,
    )
    .expect("write config");

    let cfg = HearthConfig::load(Some(&path)).expect("load config");
    assert_eq!(cfg.salat.method, 13);
    assert_eq!(cfg.salat.default_location().city, "Istanbul");
    assert_eq!(cfg.salat.timeout_secs, 15);
    assert!(cfg.clock.zone().is_some());
    assert_eq!(cfg.logging, Default::default());
}

#[test]
fn unknown_timezone_is_rejected() {
    let err = HearthConfig::parse("[clock]\ntimezone = \"Mars/Olympus\"\n")
        .expect_err("invalid zone");
    assert!(err.to_string().contains("Mars/Olympus"));
}

#[test]
fn serialized_config_reloads_from_disk() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("hearth.toml");
    let mut cfg = HearthConfig::default();
    cfg.salat.default_city = "Medina".to_string();
    std::fs::write(&path, toml::to_string(&cfg).expect("serialize config")).expect("write config");

    let loaded = HearthConfig::load_file(&path).expect("reload config");
    assert_eq!(loaded, cfg);
}
