use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter, IntCounterVec,
    IntGauge, TextEncoder,
};

// Metrics registry
static CONTACT_SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "contact_submissions_total",
        "Total number of contact form submissions",
        &["outcome"]
    )
    .unwrap()
});

static RATE_LIMIT_EXCEEDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "rate_limit_exceeded_total",
        "Total number of rate limit violations"
    )
    .unwrap()
});

static EMAILS_SENT_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "emails_sent_total",
        "Total number of email dispatch attempts",
        &["template", "outcome"]
    )
    .unwrap()
});

static RATE_LIMIT_TRACKED_CLIENTS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "rate_limit_tracked_clients",
        "Number of client identifiers currently tracked by the rate limiter"
    )
    .unwrap()
});

pub struct MetricsRecorder;

impl MetricsRecorder {
    pub fn record_contact_submission(outcome: &str) {
        CONTACT_SUBMISSIONS_TOTAL
            .with_label_values(&[outcome])
            .inc();
    }

    pub fn record_rate_limit_exceeded() {
        RATE_LIMIT_EXCEEDED_TOTAL.inc();
    }

    pub fn record_email(template: &str, outcome: &str) {
        EMAILS_SENT_TOTAL
            .with_label_values(&[template, outcome])
            .inc();
    }

    pub fn set_tracked_clients(count: i64) {
        RATE_LIMIT_TRACKED_CLIENTS.set(count);
    }

    /// Export all metrics in Prometheus format
    pub fn export() -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        encoder.encode_to_string(&metric_families)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_includes_recorded_metrics() {
        MetricsRecorder::record_contact_submission("accepted");
        MetricsRecorder::record_rate_limit_exceeded();
        MetricsRecorder::record_email("admin_notification", "success");
        MetricsRecorder::set_tracked_clients(3);

        let exported = MetricsRecorder::export().unwrap();
        assert!(exported.contains("contact_submissions_total"));
        assert!(exported.contains("rate_limit_exceeded_total"));
        assert!(exported.contains("emails_sent_total"));
        assert!(exported.contains("rate_limit_tracked_clients"));
    }
}
