use figment::Jail;
use trellis_config::TrellisConfig;

#[test]
fn env_fills_clerk_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("TRELLIS_CLERK__PUBLISHABLE_KEY", "pk_from_env");
        jail.set_env("TRELLIS_CLERK__SECRET_KEY", "sk_from_env");

        let config = TrellisConfig::load().expect("config loads");
        assert_eq!(config.clerk.secret_key, "sk_from_env");
        assert!(config.require_clerk().is_ok());
        Ok(())
    });
}

#[test]
fn process_env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".trellis").map_err(|e| e.to_string())?;
        jail.create_file(
            ".trellis/config.toml",
            r#"
[clerk]
secret_key = "sk_from_toml"
"#,
        )?;
        jail.set_env("TRELLIS_CLERK__SECRET_KEY", "sk_from_env");

        let config = TrellisConfig::load().expect("config loads");
        assert_eq!(config.clerk.secret_key, "sk_from_env");
        Ok(())
    });
}
