//! 설정 TOML 직렬화/역직렬화 테스트. 파일 IO 없이 문자열로 검사한다.
use htc_cycle_dashboard::config::{Config, DEFAULT_ENDPOINT_URL};

#[test]
fn default_round_trips_through_toml() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");
    assert_eq!(back.language, "auto");
    assert_eq!(back.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(back.window_alpha, 1.0);
    assert!(back.language_pack_dir.is_none());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let back: Config = toml::from_str("language = \"ko-kr\"\n").expect("parse");
    assert_eq!(back.language, "ko-kr");
    assert_eq!(back.endpoint_url, DEFAULT_ENDPOINT_URL);
    assert_eq!(back.window_alpha, 1.0);
}

#[test]
fn endpoint_override_is_preserved() {
    let back: Config =
        toml::from_str("endpoint_url = \"http://127.0.0.1:9000/analyze\"\n").expect("parse");
    assert_eq!(back.endpoint_url, "http://127.0.0.1:9000/analyze");
}
