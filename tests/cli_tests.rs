//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use clap::Parser;
    use wagner_fischer::cli::paths::{config_file_path, validate_config_path};
    use wagner_fischer::cli::{Cli, Commands, PersistentConfig, Settings};
    use wagner_fischer::dictionary::load_dictionary;
    use wagner_fischer::distance::Strategy;
    use wagner_fischer::rank::DEFAULT_LIMIT;

    #[test]
    fn test_persistent_config_default_resolves_to_builtins() {
        let settings = PersistentConfig::default().resolve();
        assert_eq!(
            settings,
            Settings {
                dict_path: None,
                strategy: Strategy::Banded,
                limit: DEFAULT_LIMIT,
                show_distances: false,
            }
        );
    }

    #[test]
    fn test_config_merge_prefers_overrides() {
        let base = PersistentConfig {
            dict_path: Some("words.txt".into()),
            strategy: Some(Strategy::Baseline),
            limit: Some(5),
            show_distances: Some(true),
        };
        let overrides = PersistentConfig {
            strategy: Some(Strategy::BandedCached),
            ..PersistentConfig::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.strategy, Some(Strategy::BandedCached));
        assert_eq!(merged.dict_path, Some("words.txt".into()));
        assert_eq!(merged.limit, Some(5));
        assert_eq!(merged.show_distances, Some(true));
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            dict_path: Some(temp_dir.path().join("words.txt")),
            strategy: Some(Strategy::BaselineCached),
            limit: Some(3),
            show_distances: None,
        };
        let written = config.save_to(Some(path.as_path())).unwrap();
        assert_eq!(written, path);

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_uses_kebab_case_strategies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "strategy": "banded-cached" }"#).unwrap();

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.strategy, Some(Strategy::BandedCached));
        assert_eq!(loaded.limit, None);
    }

    #[test]
    fn test_missing_config_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert_eq!(
            PersistentConfig::load_from(Some(path.as_path())).unwrap(),
            PersistentConfig::default()
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = PersistentConfig::load_from(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_path_must_be_json() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_config_path(&temp_dir.path().join("config.json")).is_ok());
        assert!(validate_config_path(&temp_dir.path().join("config.toml")).is_err());
        assert!(config_file_path(Some(temp_dir.path().join("config").as_path())).is_err());
    }

    #[test]
    fn test_load_dictionary_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let dict_path = temp_dir.path().join("words.txt");
        fs::write(&dict_path, "hello\n world \ntest\n").unwrap();

        let words = load_dictionary(&dict_path).unwrap();
        assert_eq!(words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_parse_query_command() {
        let cli = Cli::try_parse_from([
            "wagner-fischer",
            "query",
            "wrlod",
            "--dict",
            "words.txt",
            "--strategy",
            "banded-cached",
            "--limit",
            "3",
            "--show-distances",
        ])
        .unwrap();

        match cli.command {
            Commands::Query {
                term,
                dict,
                strategy,
                limit,
                show_distances,
            } => {
                assert_eq!(term, "wrlod");
                assert_eq!(dict, Some("words.txt".into()));
                assert_eq!(strategy, Some(Strategy::BandedCached));
                assert_eq!(limit, Some(3));
                assert!(show_distances);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["wagner-fischer", "distance", "a", "b", "-s", "fastest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "wagner-fischer",
            "config",
            "show",
            "--config",
            "/tmp/custom.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some("/tmp/custom.json".into()));
    }
}
