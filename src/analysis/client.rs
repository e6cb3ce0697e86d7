use crate::analysis::request::AnalysisRequest;
use crate::analysis::response::{self, AnalysisResponse};
use crate::i18n::{keys, Translator};

/// 해석 왕복에서 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AnalysisError {
    /// 전송은 성공했으나 서버가 비성공 상태 코드로 거부함
    Rejected {
        /// HTTP 상태 코드
        status: u16,
        /// "422 Unprocessable Entity" 형태의 상태 텍스트
        status_text: String,
    },
    /// 전송 실패 (연결 거부, DNS, 타임아웃 등)
    Unreachable(reqwest::Error),
    /// 응답 본문이 스키마와 다르거나 JSON이 아님
    Decode(serde_json::Error),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Rejected { status_text, .. } => {
                write!(f, "해석 요청 거부: {status_text}")
            }
            AnalysisError::Unreachable(e) => write!(f, "해석 서버 연결 실패: {e}"),
            AnalysisError::Decode(e) => write!(f, "응답 해석 실패: {e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Rejected { .. } => None,
            AnalysisError::Unreachable(e) => Some(e),
            AnalysisError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(value: reqwest::Error) -> Self {
        AnalysisError::Unreachable(value)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(value: serde_json::Error) -> Self {
        AnalysisError::Decode(value)
    }
}

impl AnalysisError {
    /// 사용자에게 보여줄 차단형 안내문을 고른다. 연결 실패와 응답 해석 실패는
    /// 동일하게 "동반 서버 확인" 안내로 합쳐진다.
    pub fn user_notice(&self, tr: &Translator) -> String {
        match self {
            AnalysisError::Rejected { status_text, .. } => tr
                .t(keys::ERROR_REJECTED)
                .replace("{status}", status_text),
            AnalysisError::Unreachable(_) | AnalysisError::Decode(_) => {
                tr.t(keys::ERROR_UNREACHABLE).to_string()
            }
        }
    }
}

/// 발행한 요청의 일련번호를 추적한다. 진행 중 재요청은 막지 않되, 나중에
/// 발행된 요청이 있으면 그보다 오래된 응답을 버려서 마지막 요청의 결과만
/// 화면에 반영되도록 한다.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// 새 요청에 일련번호를 발급한다. 단조 증가.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// 해당 일련번호의 응답을 반영해도 되는지. 최신 발행분보다 오래된
    /// 응답은 거부된다.
    pub fn accepts(&self, seq: u64) -> bool {
        seq >= self.latest
    }
}

/// 해석 서비스에 대한 단발 POST 교환을 수행하는 클라이언트.
/// 재시도/백오프 없음. 호출마다 정확히 한 번 왕복한다.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 요청을 JSON으로 보내고 응답을 스키마 해석한다. 실패는 세 부류로
    /// 태깅되어 반환되며 여기서 진단 로그를 남긴다.
    pub fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        let result = self.exchange(req);
        if let Err(e) = &result {
            tracing::error!(endpoint = %self.endpoint, error = %e, "analysis request failed");
        }
        result
    }

    fn exchange(&self, req: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(req)
            .send()
            .map_err(AnalysisError::Unreachable)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AnalysisError::Rejected {
                status: status.as_u16(),
                status_text: status.to_string(),
            });
        }
        let body = resp.bytes().map_err(AnalysisError::Unreachable)?;
        Ok(response::decode(&body)?)
    }
}
