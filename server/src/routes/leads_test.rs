use super::*;
use std::sync::{Arc, Mutex};

use crate::integrations::{CallPlacer, LeadStore};

struct MockLeadStore {
    result: Mutex<Option<Result<Vec<String>, IntegrationError>>>,
    seen: Mutex<Vec<LeadFields>>,
}

impl MockLeadStore {
    fn new(result: Result<Vec<String>, IntegrationError>) -> Self {
        Self { result: Mutex::new(Some(result)), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl LeadStore for MockLeadStore {
    async fn create_lead(&self, lead: &LeadFields) -> Result<Vec<String>, IntegrationError> {
        self.seen.lock().unwrap().push(lead.clone());
        self.result.lock().unwrap().take().unwrap_or_else(|| Ok(Vec::new()))
    }
}

struct MockCallPlacer {
    result: Mutex<Option<Result<u16, IntegrationError>>>,
    seen: Mutex<Vec<CallRequest>>,
}

impl MockCallPlacer {
    fn new(result: Result<u16, IntegrationError>) -> Self {
        Self { result: Mutex::new(Some(result)), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl CallPlacer for MockCallPlacer {
    async fn create_phone_call(&self, call: &CallRequest) -> Result<u16, IntegrationError> {
        self.seen.lock().unwrap().push(call.clone());
        self.result.lock().unwrap().take().unwrap_or(Ok(201))
    }
}

fn lead() -> LeadFields {
    LeadFields {
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone: "5551234".into(),
        business_name: "Bakery".into(),
    }
}

// =============================================================
// POST /api/leads
// =============================================================

#[tokio::test]
async fn create_lead_returns_record_ids() {
    let store = Arc::new(MockLeadStore::new(Ok(vec!["recA".into()])));
    let state = AppState::new(Some(store.clone() as Arc<dyn LeadStore>), None);

    let Json(created) = create_lead(State(state), Json(lead())).await.unwrap();

    assert_eq!(created.ids, vec!["recA".to_owned()]);
    assert_eq!(store.seen.lock().unwrap().as_slice(), &[lead()]);
}

#[tokio::test]
async fn create_lead_without_store_is_unavailable() {
    let err = create_lead(State(AppState::default()), Json(lead())).await.unwrap_err();
    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn create_lead_upstream_failure_is_bad_gateway() {
    let store = Arc::new(MockLeadStore::new(Err(IntegrationError::ApiResponse {
        status: 422,
        body: "INVALID_VALUE_FOR_COLUMN".into(),
    })));
    let state = AppState::new(Some(store as Arc<dyn LeadStore>), None);

    let err = create_lead(State(state), Json(lead())).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

// =============================================================
// POST /api/calls
// =============================================================

#[tokio::test]
async fn create_call_forwards_request_and_reports_status() {
    let placer = Arc::new(MockCallPlacer::new(Ok(201)));
    let state = AppState::new(None, Some(placer.clone() as Arc<dyn CallPlacer>));
    let call = CallRequest::for_lead(&lead(), "+91");

    let Json(started) = create_call(State(state), Json(call)).await.unwrap();

    assert_eq!(started.upstream_status, 201);
    assert_eq!(placer.seen.lock().unwrap()[0].to_number, "+915551234");
}

#[tokio::test]
async fn create_call_rejected_upstream_still_answers_ok() {
    let placer = Arc::new(MockCallPlacer::new(Ok(400)));
    let state = AppState::new(None, Some(placer as Arc<dyn CallPlacer>));

    let Json(started) = create_call(State(state), Json(CallRequest::for_lead(&lead(), "+1")))
        .await
        .unwrap();
    assert_eq!(started.upstream_status, 400);
}

#[tokio::test]
async fn create_call_transport_failure_is_bad_gateway() {
    let placer = Arc::new(MockCallPlacer::new(Err(IntegrationError::ApiRequest("timed out".into()))));
    let state = AppState::new(None, Some(placer as Arc<dyn CallPlacer>));

    let err = create_call(State(state), Json(CallRequest::for_lead(&lead(), "+1")))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn create_call_without_placer_is_unavailable() {
    let err = create_call(State(AppState::default()), Json(CallRequest::for_lead(&lead(), "+1")))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn create_call_keeps_callee_number_out_of_info_and_warn_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    for status in [201, 422] {
        let placer = Arc::new(MockCallPlacer::new(Ok(status)));
        let state = AppState::new(None, Some(placer as Arc<dyn CallPlacer>));
        create_call(State(state), Json(CallRequest::for_lead(&lead(), "+91")))
            .await
            .unwrap();
    }

    let text = logs.text();
    assert!(text.contains("call initiated"));
    assert!(text.contains("call initiation rejected upstream"));
    assert!(!text.contains("5551234"));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn integration_error_to_status_maps_variants() {
    assert_eq!(
        integration_error_to_status(&IntegrationError::HttpClientBuild("tls".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(integration_error_to_status(&IntegrationError::ApiRequest("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(integration_error_to_status(&IntegrationError::ApiParse("x".into())), StatusCode::BAD_GATEWAY);
}
