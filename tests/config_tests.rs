use json_pathfind::config::{DocumentPath, FromEnv, SearchConfig, Separator};
use serial_test::serial;
use std::env;

// `from_env` skips `.env` discovery, so a developer's own `.env` can't leak in.

#[test]
#[serial]
fn explicit_values_win() {
    env::set_var(DocumentPath::KEY_NAME, "from-env.json");
    let config = SearchConfig::from_env(Some("cli.json".into()), Some("/".into()));
    env::remove_var(DocumentPath::KEY_NAME);

    assert_eq!(config.document, "cli.json");
    assert_eq!(config.separator, "/");
}

#[test]
#[serial]
fn environment_used_when_not_explicit() {
    env::set_var(DocumentPath::KEY_NAME, "from-env.json");
    env::set_var(Separator::KEY_NAME, "::");
    let config = SearchConfig::from_env(None, None);
    env::remove_var(DocumentPath::KEY_NAME);
    env::remove_var(Separator::KEY_NAME);

    assert_eq!(config.document, "from-env.json");
    assert_eq!(config.separator, "::");
}

#[test]
#[serial]
fn defaults_when_unset_or_empty() {
    env::remove_var(DocumentPath::KEY_NAME);
    env::set_var(Separator::KEY_NAME, "");
    let config = SearchConfig::from_env(None, None);
    env::remove_var(Separator::KEY_NAME);

    assert_eq!(config.document, "playlist.json");
    assert_eq!(config.separator, ".");
}
