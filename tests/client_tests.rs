//! 해석 클라이언트의 결과 분류 테스트. 고정 HTTP 응답을 한 번 돌려주는
//! 로컬 TCP 리스너로 서버 동작을 흉내낸다.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use htc_cycle_dashboard::analysis::client::{AnalysisClient, AnalysisError, RequestTracker};
use htc_cycle_dashboard::analysis::request::AnalysisRequest;
use htc_cycle_dashboard::i18n::Translator;

const WELL_FORMED_BODY: &str = r#"{
    "metrics": { "efficiency": 0.423, "power": 12.8, "co2": 19.0 },
    "charts": {
        "hs": { "s": [1.5, 7.5], "h": [500.0, 3200.0] },
        "th": {
            "gas_H": [0.0, 45000.0],
            "gas_T": [620.0, 120.0],
            "steam_H": [0.0, 45000.0],
            "steam_T": [30.0, 262.0]
        }
    }
}"#;

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// 요청 하나를 받아 지정한 응답을 돌려주고 종료하는 리스너를 띄운다.
fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // 요청(헤더 + Content-Length만큼의 본문)을 전부 소진한 뒤 응답한다.
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match stream.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => {
                        buf.extend_from_slice(&chunk[..n]);
                        if let Some(header_end) =
                            buf.windows(4).position(|w| w == b"\r\n\r\n")
                        {
                            let headers = String::from_utf8_lossy(&buf[..header_end]);
                            let content_length = headers
                                .lines()
                                .find_map(|l| {
                                    let (name, value) = l.split_once(':')?;
                                    name.eq_ignore_ascii_case("content-length")
                                        .then(|| value.trim().parse::<usize>().ok())?
                                })
                                .unwrap_or(0);
                            if buf.len() >= header_end + 4 + content_length {
                                break;
                            }
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/analyze")
}

fn sample_request() -> AnalysisRequest {
    AnalysisRequest::from_fields("1300", "15", "20", "5")
}

#[test]
fn success_response_is_decoded() {
    let endpoint = serve_once(http_response("200 OK", WELL_FORMED_BODY));
    let client = AnalysisClient::new(endpoint);
    let resp = client.analyze(&sample_request()).expect("analyze");
    assert_eq!(resp.metrics.power, 12.8);
    assert_eq!(resp.charts.hs.s, vec![1.5, 7.5]);
}

#[test]
fn non_success_status_is_classified_as_rejected() {
    let endpoint = serve_once(http_response("500 Internal Server Error", "{}"));
    let client = AnalysisClient::new(endpoint);
    let err = client.analyze(&sample_request()).expect_err("must fail");
    match &err {
        AnalysisError::Rejected {
            status,
            status_text,
        } => {
            assert_eq!(*status, 500);
            assert!(status_text.contains("500"), "got {status_text}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    // 사용자 안내문에는 상태 텍스트가 들어간다.
    let tr = Translator::new("en");
    assert!(err.user_notice(&tr).contains("500"));
}

#[test]
fn unreachable_endpoint_is_classified() {
    // 즉시 닫힌 포트로 연결을 시도한다.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let client = AnalysisClient::new(format!("http://127.0.0.1:{port}/analyze"));
    let err = client.analyze(&sample_request()).expect_err("must fail");
    assert!(matches!(err, AnalysisError::Unreachable(_)));
}

#[test]
fn malformed_body_is_classified_as_decode_failure() {
    let endpoint = serve_once(http_response("200 OK", "not a json body"));
    let client = AnalysisClient::new(endpoint);
    let err = client.analyze(&sample_request()).expect_err("must fail");
    assert!(matches!(err, AnalysisError::Decode(_)));

    // 해석 실패와 연결 실패는 동일한 "동반 서버 확인" 안내문을 쓴다.
    let tr = Translator::new("en");
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let unreachable = AnalysisClient::new(format!("http://127.0.0.1:{port}/analyze"))
        .analyze(&sample_request())
        .expect_err("must fail");
    assert_eq!(err.user_notice(&tr), unreachable.user_notice(&tr));
}

#[test]
fn tracker_discards_responses_older_than_latest_request() {
    let mut tracker = RequestTracker::default();
    let first = tracker.issue();
    let second = tracker.issue();
    // 첫 요청의 응답이 늦게 도착하면 버려지고, 최신 요청의 응답만 반영된다.
    assert!(!tracker.accepts(first));
    assert!(tracker.accepts(second));
    assert_eq!(tracker.latest(), second);

    // 진행 중 재요청 자체는 막지 않는다. 번호는 단조 증가할 뿐이다.
    let third = tracker.issue();
    assert!(third > second);
    assert!(!tracker.accepts(second));
}
