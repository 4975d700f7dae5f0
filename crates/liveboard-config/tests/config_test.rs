#![allow(clippy::unwrap_used)]
// File and environment layering for `load_config`.

use std::path::Path;

use figment::Jail;

use liveboard_config::{Config, load_config, load_config_or_default, save_config};

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("absent.toml");
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg, Config::default());
        Ok(())
    });
}

#[test]
fn test_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
                api_url = "https://status.example.com/board/"
                poll_interval_secs = 60
                utc_offset = "+08:00"

                [binding]
                grid = "cards"
            "#,
        )?;
        let cfg = load_config(Some(Path::new("config.toml"))).unwrap();
        assert_eq!(cfg.api_url, "https://status.example.com/board/");
        assert_eq!(cfg.poll_interval_secs, 60);
        assert_eq!(cfg.history_limit, 10);
        assert_eq!(cfg.utc_offset.as_deref(), Some("+08:00"));
        assert_eq!(cfg.binding.grid, "cards");
        assert_eq!(cfg.binding.modal, "statsModal");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "poll_interval_secs = 60\n")?;
        jail.set_env("LIVEBOARD_POLL_INTERVAL_SECS", "5");
        jail.set_env("LIVEBOARD_API_URL", "http://10.0.0.2:9000");
        jail.set_env("LIVEBOARD_BINDING__MODAL", "detailModal");

        let cfg = load_config(Some(Path::new("config.toml"))).unwrap();
        assert_eq!(cfg.poll_interval_secs, 5);
        assert_eq!(cfg.api_url, "http://10.0.0.2:9000");
        assert_eq!(cfg.binding.modal, "detailModal");
        Ok(())
    });
}

#[test]
fn test_malformed_file_falls_back_to_default() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "poll_interval_secs = \"soon\"\n")?;
        assert!(load_config(Some(Path::new("config.toml"))).is_err());
        assert_eq!(
            load_config_or_default(Some(Path::new("config.toml"))),
            Config::default()
        );
        Ok(())
    });
}

#[test]
fn test_save_then_load() {
    // Inside a jail so environment overrides from other tests never leak in.
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            api_url: "http://192.168.1.20:8080".into(),
            history_limit: 20,
            ..Config::default()
        };
        let written = save_config(&cfg, Some(&path)).unwrap();
        assert_eq!(written, path);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("history_limit = 20"));
        assert!(!text.contains("utc_offset"));

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.api_url, cfg.api_url);
        assert_eq!(loaded.history_limit, 20);
        Ok(())
    });
}
