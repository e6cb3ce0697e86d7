use serde::Serialize;

/// UI에서 읽어온 네 가지 운전 조건.
#[derive(Debug, Clone, Copy)]
pub struct OperatingParameters {
    /// 가스터빈 입구 온도 [°C]
    pub gt_temp_c: f64,
    /// 압축비
    pub comp_ratio: f64,
    /// HTC 반응기 압력 [bar]
    pub htc_press_bar: f64,
    /// 바이오매스 유량 [kg/s]
    pub biomass_flow_kgs: f64,
}

impl OperatingParameters {
    /// 네 개의 자유 텍스트 입력 필드를 그대로 파싱한다. 숫자가 아닌 입력은
    /// NaN으로 통과시킨다. 값 검증은 해석 서버의 몫이므로 여기서 범위 확인을
    /// 하지 않는다.
    pub fn from_fields(
        gt_temp: &str,
        comp_ratio: &str,
        htc_press: &str,
        biomass_flow: &str,
    ) -> Self {
        Self {
            gt_temp_c: parse_field(gt_temp),
            comp_ratio: parse_field(comp_ratio),
            htc_press_bar: parse_field(htc_press),
            biomass_flow_kgs: parse_field(biomass_flow),
        }
    }
}

/// 숫자가 아닌 텍스트를 NaN으로 흘려보내는 관대한 파서.
/// NaN은 serde_json에서 null로 직렬화되어 서버 측 검증에 걸린다.
pub fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// 해석 서버 /analyze 엔드포인트가 이해하는 요청 본문.
/// 필드명은 서버 측 CycleInput 모델과 일치해야 한다.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisRequest {
    pub gt_temp: f64,
    pub comp_ratio: f64,
    pub htc_press: f64,
    pub biomass_flow: f64,
}

impl From<OperatingParameters> for AnalysisRequest {
    fn from(p: OperatingParameters) -> Self {
        Self {
            gt_temp: p.gt_temp_c,
            comp_ratio: p.comp_ratio,
            htc_press: p.htc_press_bar,
            biomass_flow: p.biomass_flow_kgs,
        }
    }
}

impl AnalysisRequest {
    /// 입력 필드 네 개에서 바로 요청을 조립한다. 매 호출마다 새로 만든다.
    pub fn from_fields(
        gt_temp: &str,
        comp_ratio: &str,
        htc_press: &str,
        biomass_flow: &str,
    ) -> Self {
        OperatingParameters::from_fields(gt_temp, comp_ratio, htc_press, biomass_flow).into()
    }
}
