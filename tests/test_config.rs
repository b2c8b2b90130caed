use framewire::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen.host, "127.0.0.1");
    assert_eq!(cfg.listen.port, 8888);
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8888");
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml("listen:\n  host: 0.0.0.0\n  port: 9000\n").unwrap();

    assert_eq!(cfg.listen.host, "0.0.0.0");
    assert_eq!(cfg.listen.port, 9000);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:9000");
}

#[test]
fn test_config_yaml_partial_keeps_defaults() {
    let cfg = Config::from_yaml("listen:\n  port: 9000\n").unwrap();

    assert_eq!(cfg.listen.host, "127.0.0.1");
    assert_eq!(cfg.listen.port, 9000);
}

#[test]
fn test_config_yaml_empty_mapping() {
    let cfg = Config::from_yaml("{}").unwrap();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:8888");
}

#[test]
fn test_config_load_with_env_override() {
    // Single test covers both paths to keep env mutation sequential.
    unsafe {
        std::env::remove_var("FRAMEWIRE_CONFIG");
        std::env::remove_var("FRAMEWIRE_LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8888");

    unsafe {
        std::env::set_var("FRAMEWIRE_LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen.host, "0.0.0.0");
    assert_eq!(cfg.listen.port, 3000);
    unsafe {
        std::env::remove_var("FRAMEWIRE_LISTEN");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr(), cfg2.listen_addr());
}
