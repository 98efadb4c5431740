use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.latency, LatencyProfile::default());
}

#[test]
fn parses_port_and_latency_override() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some(" 250 ")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.latency.override_ms, Some(250));
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_vars(Some("http"), None).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "{err}");
}

#[test]
fn invalid_latency_errors() {
    let err = ServerConfig::from_vars(None, Some("-5")).unwrap_err().to_string();
    assert!(err.contains("SIMULATED_LATENCY_MS"), "{err}");
}

#[test]
fn default_profile_uses_tool_latency() {
    let profile = LatencyProfile::default();
    assert_eq!(profile.for_tool(Tool::StoryCrafter), Duration::from_millis(2000));
    assert_eq!(profile.for_tool(Tool::SmartEvaluator), Duration::from_millis(3000));
}

#[test]
fn override_applies_to_every_tool() {
    let profile = LatencyProfile { override_ms: Some(15) };
    for tool in Tool::ALL {
        assert_eq!(profile.for_tool(tool), Duration::from_millis(15));
    }
    assert_eq!(LatencyProfile::none().for_tool(Tool::DiagramGen), Duration::ZERO);
}
