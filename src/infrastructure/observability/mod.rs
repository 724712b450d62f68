use crate::config::Config;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Counter of booking submissions, labelled by `channel` and `outcome`.
pub const BOOKINGS_SUBMITTED: &str = "bookings_submitted_total";

/// Counter of public booking requests refused by the per-contact limit.
pub const BOOKINGS_THROTTLED: &str = "bookings_throttled_total";

const DEFAULT_FILTER: &str = "rentadrive=debug,tower_http=debug,axum=info,reqwest=info,hyper=warn";

/// Flushes pending spans when the gateway stops.
pub struct ObservabilityGuard;

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        global::shutdown_tracer_provider();
    }
}

pub fn init(config: &Config) -> Result<ObservabilityGuard, Box<dyn std::error::Error>> {
    init_tracing(config)?;
    init_metrics(config)?;
    Ok(ObservabilityGuard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn otlp_tracer(
    endpoint: &str,
    service_name: &str,
) -> Result<sdktrace::Tracer, opentelemetry::trace::TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    // Spans only leave the process when an OTLP collector is configured
    let otel_layer = match &config.otel_exporter_endpoint {
        Some(endpoint) => Some(
            tracing_opentelemetry::layer().with_tracer(otlp_tracer(endpoint, &config.service_name)?),
        ),
        None => None,
    };

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    if let Some(endpoint) = &config.otel_exporter_endpoint {
        tracing::info!("Exporting traces for {} to {}", config.service_name, endpoint);
    }
    Ok(())
}

fn init_metrics(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    describe_metrics();
    tracing::info!("Booking metrics served on :{}/metrics", config.metrics_port);
    Ok(())
}

/// Register help text for the gateway's counters with the installed recorder.
pub fn describe_metrics() {
    metrics::describe_counter!(
        BOOKINGS_SUBMITTED,
        "Booking submissions by channel and outcome (created, rejected, failed)"
    );
    metrics::describe_counter!(
        BOOKINGS_THROTTLED,
        "Website booking requests refused by the per-contact hourly limit"
    );
}
