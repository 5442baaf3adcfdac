use figment::Jail;
use forma_config::FormaConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMA_VALIDATION__CATALOG_PATH", "ids.json");
        jail.set_env("FORMA_VALIDATION__FAIL_FAST", "true");

        let config = FormaConfig::load().expect("config loads");
        assert_eq!(config.validation.catalog_path, "ids.json");
        assert!(config.validation.fail_fast);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".forma")?;
        jail.create_file(".forma/config.toml", "[general]\ndefault_format = \"raw\"\n")?;
        jail.set_env("FORMA_GENERAL__DEFAULT_FORMAT", "table");

        let config = FormaConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "FORMA_VALIDATION__CATALOG_PATH=from-dotenv.json\n")?;

        let config = FormaConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.validation.catalog_path, "from-dotenv.json");
        Ok(())
    });
}
