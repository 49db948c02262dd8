//! Colorful console output for capital checks.
//!
//! Provides a custom `tracing` layer that renders the `capital_check` and
//! `capital_summary` events emitted by [`check`](crate::check).

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_DIRECTIVE: &str = "regcap=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG` and falls back to `regcap=info`. Does nothing if another
/// global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CapitalConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!(
        "RegCap v{} - Regulatory Capital Constraints",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats capital events with colors.
pub struct CapitalConsoleLayer;

impl<S: Subscriber> Layer<S> for CapitalConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("regcap") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_capital_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    constraint: Option<String>,
    binding: Option<String>,
    value: Option<f64>,
    capital_ratio: Option<f64>,
    minimum: Option<f64>,
    total_shortfall: Option<f64>,
    satisfied: Option<bool>,
    feasible: Option<bool>,
    constraint_count: Option<u64>,
    violation_count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "constraint" => self.constraint = Some(value.to_string()),
            "binding" => self.binding = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "value" => self.value = Some(value),
            "capital_ratio" => self.capital_ratio = Some(value),
            "minimum" => self.minimum = Some(value),
            "total_shortfall" => self.total_shortfall = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "satisfied" => self.satisfied = Some(value),
            "feasible" => self.feasible = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "constraint_count" => self.constraint_count = Some(value),
            "violation_count" => self.violation_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

fn format_capital_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("capital_check") => format_check(v),
        Some("capital_summary") => format_summary(v),
        _ => String::new(),
    }
}

fn format_check(v: &EventVisitor) -> String {
    let constraint = v.constraint.as_deref().unwrap_or("unknown");
    let value = v.value.unwrap_or(f64::NAN);
    let status = if v.satisfied.unwrap_or(false) {
        "OK".bright_green().bold().to_string()
    } else {
        "BREACH".bright_red().bold().to_string()
    };

    format!(
        "{} {} {} {:<10} ratio {} (min {}), slack {} {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Capital]".bright_cyan(),
        constraint.white().bold(),
        format_ratio(v.capital_ratio).yellow(),
        format_ratio(v.minimum).white(),
        format_value(value),
        status
    )
}

fn format_summary(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);
    let count = v.constraint_count.unwrap_or(0);
    let violations = v.violation_count.unwrap_or(0);
    let binding = v.binding.as_deref().unwrap_or("none");
    let shortfall = v.total_shortfall.unwrap_or(0.0);

    let mut output = format!(
        "{} {} {} Checked {} constraints: {} violated",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Capital]".bright_cyan(),
        count.to_string().bright_yellow(),
        violations.to_string().bright_yellow()
    );

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');

    let status_text = if feasible {
        "ALL CAPITAL MINIMUMS MET"
    } else {
        "CAPITAL MINIMUMS BREACHED"
    };
    let status_colored = if feasible {
        format!("  {}  ", status_text).bright_green().bold().to_string()
    } else {
        format!("  {}  ", status_text).bright_red().bold().to_string()
    };
    let status_padding = 58 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');

    for (label, text) in [
        ("Binding constraint:", binding.to_string()),
        ("Total shortfall:", format!("{:.2}", shortfall)),
    ] {
        output.push_str(&format!(
            "{}  {:<20}{:>34}  {}",
            "║".bright_cyan(),
            label,
            text,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r.is_finite() => format!("{:.2}%", r * 100.0),
        _ => "n/a".to_string(),
    }
}

fn format_value(value: f64) -> String {
    let text = format!("{:.2}", value);
    if value.is_nan() || value < 0.0 {
        text.bright_red().to_string()
    } else {
        text.bright_green().to_string()
    }
}
