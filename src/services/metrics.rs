//! Metrics collection and Prometheus integration service.

use crate::models::auth::VerificationOutcome;
use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Commit the binary was built from, `unknown` outside a git checkout
pub const BUILD_COMMIT: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

pub const BUILD_TIME: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => "unknown",
};

/// Route excluded from request metrics
const METRICS_ROUTE: &str = "/api/metrics";

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub partner_auth_decisions_total: CounterVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "route"],
        )?;

        let partner_auth_decisions_total = CounterVec::new(
            Opts::new(
                "partner_auth_decisions_total",
                "Partner authentication decisions by outcome",
            ),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(partner_auth_decisions_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[
                env!("CARGO_PKG_VERSION"),
                BUILD_COMMIT,
                BUILD_TIME,
            ])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            partner_auth_decisions_total,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == METRICS_ROUTE {
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, &status.to_string(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Count one partner authentication decision
    pub fn record_auth_decision(&self, outcome: VerificationOutcome) {
        self.partner_auth_decisions_total
            .with_label_values(&[outcome.label()])
            .inc();
    }

    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::AuthRejection;

    #[test]
    fn test_auth_decisions_rendered() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_auth_decision(VerificationOutcome::Authorized);
        metrics.record_auth_decision(VerificationOutcome::Rejected(AuthRejection::InvalidSignature));
        metrics.record_auth_decision(VerificationOutcome::Rejected(AuthRejection::InvalidSignature));

        let output = metrics.render().unwrap();
        assert!(output.contains("partner_auth_decisions_total{outcome=\"authorized\"} 1"));
        assert!(output.contains("partner_auth_decisions_total{outcome=\"invalid_signature\"} 2"));
    }

    #[test]
    fn test_metrics_route_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", METRICS_ROUTE, 200, Duration::from_millis(1));
        metrics.record_request("GET", "/api/health", 200, Duration::from_millis(1));

        let output = metrics.render().unwrap();
        assert!(!output.contains("route=\"/api/metrics\""));
        assert!(output.contains("route=\"/api/health\""));
    }
}
