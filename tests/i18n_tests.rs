//! 언어 결정 우선순위와 내장 번역 테이블 테스트.
use htc_cycle_dashboard::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn explicit_flag_wins_over_config() {
    assert_eq!(resolve_language("ko-kr", Some("en-us")), "ko-kr");
    assert_eq!(resolve_language("en", Some("ko-kr")), "en");
}

#[test]
fn auto_flag_falls_back_to_config() {
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
    assert_eq!(resolve_language("", Some("ko")), "ko");
}

#[test]
fn builtin_tables_cover_both_languages() {
    let ko = Translator::new("ko-kr");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::ERROR_PREFIX), "오류");

    let en = Translator::new("en-us");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::ERROR_PREFIX), "Error");
    // 거부 안내문은 상태 텍스트 치환 자리를 가진다.
    assert!(en.t(keys::ERROR_REJECTED).contains("{status}"));
    assert!(ko.t(keys::ERROR_REJECTED).contains("{status}"));
}

#[test]
fn unknown_key_yields_marker() {
    let en = Translator::new("en-us");
    assert_eq!(en.t("no.such.key"), "[missing translation]");
}
