use ops_config::AppConfig;

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("OPS_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("OPS_MOCK_SEED", "7");
        std::env::set_var("OPS_MOCK_SITES", "20");
        std::env::set_var("OPS_SIMULATED_LATENCY_MS", "250");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.mock_seed, 7);
    assert_eq!(config.mock_sites, 20);
    assert_eq!(config.simulated_latency_ms, 250);
    assert_eq!(config.import_failure_rate, 0.10);
}
