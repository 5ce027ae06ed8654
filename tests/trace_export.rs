//! Tests for what reaches the trace file under the default filter.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use userdeck::observability::exporter::{create_tracer_provider, SCOPE_NAME};
use userdeck::observability::file_writer::FileWriter;
use userdeck::observability::init::DEFAULT_LEVEL;
use userdeck::{handle_event, initialize, Action, Config, Event};

#[test]
fn failed_load_is_written_at_default_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.json");

    let provider = create_tracer_provider(FileWriter::new(path.clone()), Resource::empty());
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_LEVEL))
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    tracing::subscriber::with_default(subscriber, || {
        let mut state = initialize(&Config::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        let [Action::FetchUsers(request)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        let response = Event::WebResponse {
            status: 500,
            body: b"Internal Server Error".to_vec(),
            context: request.context(),
        };
        handle_event(&mut state, &response).unwrap();
    });

    let trace = std::fs::read_to_string(&path).unwrap();
    assert!(trace.contains("complete_load"));
    assert!(trace.contains("loading users failed"));
}
