use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const APP_TITLE: &str = "gui.nav.app_title";
    pub const APP_SUBTITLE: &str = "gui.nav.subtitle";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_GT_TEMP: &str = "input.gt_temp";
    pub const INPUT_COMP_RATIO: &str = "input.comp_ratio";
    pub const INPUT_HTC_PRESS: &str = "input.htc_press";
    pub const INPUT_BIOMASS_FLOW: &str = "input.biomass_flow";

    pub const ANALYZE_BUTTON: &str = "analyze.button";
    pub const ANALYZE_BUSY: &str = "analyze.busy";

    pub const METRIC_HEADING: &str = "metric.heading";
    pub const METRIC_EFFICIENCY: &str = "metric.efficiency";
    pub const METRIC_POWER: &str = "metric.power";
    pub const METRIC_CO2: &str = "metric.co2";
    pub const METRIC_PLACEHOLDER: &str = "metric.placeholder";

    pub const CHART_HS_TITLE: &str = "chart.hs.title";
    pub const CHART_HS_X: &str = "chart.hs.x_axis";
    pub const CHART_HS_Y: &str = "chart.hs.y_axis";
    pub const CHART_HS_SERIES: &str = "chart.hs.series";
    pub const CHART_TH_TITLE: &str = "chart.th.title";
    pub const CHART_TH_X: &str = "chart.th.x_axis";
    pub const CHART_TH_Y: &str = "chart.th.y_axis";
    pub const CHART_TH_GAS: &str = "chart.th.gas";
    pub const CHART_TH_STEAM: &str = "chart.th.steam";

    pub const ERROR_TITLE: &str = "error.title";
    pub const ERROR_REJECTED: &str = "error.server_rejected";
    pub const ERROR_UNREACHABLE: &str = "error.unreachable";
    pub const ERROR_CLOSE: &str = "error.close";

    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_LANG: &str = "settings.lang";
    pub const SETTINGS_LANG_AUTO: &str = "settings.lang_auto";
    pub const SETTINGS_ENDPOINT: &str = "settings.endpoint";
    pub const SETTINGS_UI_SCALE: &str = "settings.ui_scale";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ABOUT_TITLE: &str = "about.title";
    pub const ABOUT_APP: &str = "about.app";
    pub const ABOUT_HINT: &str = "about.hint";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 > 내장 테이블 순으로 조회하고, 한국어에 없으면 영어를 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "HTC Combined Cycle Dashboard",
        APP_SUBTITLE => "AD-HTC 가스사이클 해석 뷰어",
        INPUT_HEADING => "운전 조건",
        INPUT_GT_TEMP => "터빈 입구 온도 [°C]",
        INPUT_COMP_RATIO => "압축비",
        INPUT_HTC_PRESS => "HTC 반응기 압력 [bar]",
        INPUT_BIOMASS_FLOW => "바이오매스 유량 [kg/s]",
        ANALYZE_BUTTON => "해석 실행",
        ANALYZE_BUSY => "해석 중...",
        METRIC_HEADING => "성능 지표",
        METRIC_EFFICIENCY => "종합 효율",
        METRIC_POWER => "총 출력",
        METRIC_CO2 => "CO₂ 저감",
        METRIC_PLACEHOLDER => "—",
        CHART_HS_TITLE => "h-s 선도 (증기 사이클)",
        CHART_HS_X => "엔트로피 s [kJ/kg·K]",
        CHART_HS_Y => "엔탈피 h [kJ/kg]",
        CHART_HS_SERIES => "HTC 증기 사이클",
        CHART_TH_TITLE => "T-Ḣ 선도 (열 회수)",
        CHART_TH_X => "열전달량 [kW]",
        CHART_TH_Y => "온도 T [°C]",
        CHART_TH_GAS => "GT 배기가스",
        CHART_TH_STEAM => "급수/증기 경로",
        ERROR_TITLE => "해석 오류",
        ERROR_REJECTED => "서버가 해석 요청을 거부했습니다: {status}",
        ERROR_UNREACHABLE => {
            "해석 서비스에 연결할 수 없습니다. 동반 해석 서버가 8000 포트에서 실행 중인지 확인하세요."
        }
        ERROR_CLOSE => "닫기",
        SETTINGS_TITLE => "설정",
        SETTINGS_LANG => "언어",
        SETTINGS_LANG_AUTO => "시스템",
        SETTINGS_ENDPOINT => "해석 엔드포인트 URL",
        SETTINGS_UI_SCALE => "UI 배율",
        SETTINGS_ALPHA => "창 투명도",
        SETTINGS_SAVE => "설정 저장",
        SETTINGS_SAVED => "저장되었습니다.",
        ABOUT_TITLE => "도움말 / 정보",
        ABOUT_APP => "AD-HTC 복합 사이클 해석 결과를 표시하는 대시보드입니다.",
        ABOUT_HINT => "열역학 계산은 전부 동반 해석 서버에서 수행됩니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "HTC Combined Cycle Dashboard",
        APP_SUBTITLE => "AD-HTC gas cycle analysis viewer",
        INPUT_HEADING => "Operating Parameters",
        INPUT_GT_TEMP => "Turbine inlet temp [°C]",
        INPUT_COMP_RATIO => "Compression ratio",
        INPUT_HTC_PRESS => "HTC reactor pressure [bar]",
        INPUT_BIOMASS_FLOW => "Biomass flow [kg/s]",
        ANALYZE_BUTTON => "Run Analysis",
        ANALYZE_BUSY => "Analyzing...",
        METRIC_HEADING => "Performance Metrics",
        METRIC_EFFICIENCY => "Net Efficiency",
        METRIC_POWER => "Total Power",
        METRIC_CO2 => "CO₂ Reduction",
        METRIC_PLACEHOLDER => "—",
        CHART_HS_TITLE => "h-s Diagram (Steam Cycle)",
        CHART_HS_X => "Entropy s [kJ/kg·K]",
        CHART_HS_Y => "Enthalpy h [kJ/kg]",
        CHART_HS_SERIES => "HTC Steam Cycle",
        CHART_TH_TITLE => "T-Ḣ Diagram (Heat Integration)",
        CHART_TH_X => "Heat transfer [kW]",
        CHART_TH_Y => "Temperature T [°C]",
        CHART_TH_GAS => "GT Exhaust",
        CHART_TH_STEAM => "Water/Steam Path",
        ERROR_TITLE => "Analysis error",
        ERROR_REJECTED => "The server rejected the analysis request: {status}",
        ERROR_UNREACHABLE => {
            "Analysis service not reachable. Make sure the companion analysis server is running on port 8000."
        }
        ERROR_CLOSE => "Close",
        SETTINGS_TITLE => "Settings",
        SETTINGS_LANG => "Language",
        SETTINGS_LANG_AUTO => "System",
        SETTINGS_ENDPOINT => "Analysis endpoint URL",
        SETTINGS_UI_SCALE => "UI scale",
        SETTINGS_ALPHA => "Window transparency",
        SETTINGS_SAVE => "Save settings",
        SETTINGS_SAVED => "Saved.",
        ABOUT_TITLE => "Help / About",
        ABOUT_APP => "Dashboard for AD-HTC combined cycle analysis results.",
        ABOUT_HINT => "All thermodynamic computation happens in the companion analysis server.",
        _ => "[missing translation]",
    }
}
