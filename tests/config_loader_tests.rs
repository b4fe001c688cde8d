use calaf_setup::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const MANAGED_VARS: &[&str] = &[
    "SETUP_PROFILE",
    "SETUP_LOG_LEVEL",
    "SETUP_LOG_FORMAT",
    "DATABASE_URL",
    "DB_HOST",
    "DB_USERNAME",
    "DB_PASSWORD",
    "DB_DATABASE",
    "DB_PORT",
    "KV_REST_API_URL",
    "KV_REST_API_TOKEN",
];

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    for key in MANAGED_VARS {
        unsafe {
            env::remove_var(key);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

fn loader(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_base_dir(PathBuf::from(dir.path()))
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader(&temp_dir).load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "pretty");
    assert!(cfg.database.url.is_none());
    assert!(cfg.kv.credentials().is_none());
    assert!(matches!(
        cfg.database.connection_url(),
        Err(ConfigError::MissingDatabaseSetting { name: "DB_HOST" })
    ));
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "DB_HOST=base.internal\nDB_PORT=3306\n");
    write_env_file(&temp_dir, ".env.staging", "DB_HOST=staging.internal\n");
    write_env_file(&temp_dir, ".env.staging.local", "DB_HOST=override.internal\n");

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "SETUP_PROFILE=staging\nDB_HOST=local.internal\nDB_USERNAME=calaf\n",
    );

    let cfg = loader(&temp_dir).load().expect("config loads");

    assert_eq!(cfg.profile, "staging");
    assert_eq!(cfg.database.host.as_deref(), Some("override.internal"));
    assert_eq!(cfg.database.port.as_deref(), Some("3306"));
    assert_eq!(cfg.database.username.as_deref(), Some("calaf"));
}

#[test]
fn explicit_profile_selects_profile_files() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env.local", "SETUP_PROFILE=staging\n");
    write_env_file(&temp_dir, ".env.staging", "DB_DATABASE=calaf_staging\n");
    write_env_file(&temp_dir, ".env.production", "DB_DATABASE=calaf_prod\n");

    let cfg = loader(&temp_dir)
        .with_profile("production")
        .load()
        .expect("config loads");

    assert_eq!(cfg.profile, "production");
    assert_eq!(cfg.database.database.as_deref(), Some("calaf_prod"));
}

#[test]
fn process_env_overrides_files() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "KV_REST_API_URL=https://file.kv.example\nKV_REST_API_TOKEN=file-token\n",
    );

    unsafe {
        env::set_var("KV_REST_API_TOKEN", "env-token");
    }

    let cfg = loader(&temp_dir).load().expect("config loads");
    let credentials = cfg.kv.credentials().expect("credentials are complete");

    assert_eq!(credentials.rest_api_url, "https://file.kv.example");
    assert_eq!(credentials.rest_api_token, "env-token");
    clear_env();
}

#[test]
fn database_parts_build_a_connection_url() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "DB_HOST=db.internal\nDB_USERNAME=calaf\nDB_PASSWORD=\nDB_DATABASE=calaf_prod\nDB_PORT=3307\n",
    );

    let cfg = loader(&temp_dir).load().expect("config loads");

    assert_eq!(cfg.database.password.as_deref(), Some(""));
    assert_eq!(
        cfg.database.connection_url().unwrap(),
        "mysql://calaf@db.internal:3307/calaf_prod"
    );
}

#[test]
fn blank_values_count_as_missing() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "KV_REST_API_URL=\nKV_REST_API_TOKEN=token\n");

    let cfg = loader(&temp_dir).load().expect("config loads");

    assert!(cfg.kv.rest_api_url.is_none());
    assert!(cfg.kv.credentials().is_none());
}

#[test]
fn invalid_log_format_is_rejected() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "SETUP_LOG_FORMAT=yaml\n");

    let err = loader(&temp_dir).load().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));
}

#[test]
fn malformed_env_file_is_reported() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "DB_HOST='unterminated\n");

    let err = loader(&temp_dir).load().unwrap_err();

    assert!(matches!(err, ConfigError::EnvFile { .. }));
}
