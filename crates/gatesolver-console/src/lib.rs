//! Colorful console output for search runs.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve, phase and width start/end)
//! - **DEBUG**: Progress updates every `progress_interval` expansions
//! - **TRACE**: Every accepted successor
//! - **WARN**: Configuration adjustments

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gatesolver_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the tracing subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
            _                 _
  __ _ __ _| |_ ___ ___  ___ | |_   _____ _ __
 / _` / _` | __/ _ / __|/ _ \| \ \ / / _ \ '__|
| (_| | (_| | ||  __\__ \ (_) | |\ V /  __/ |
 \__, |\__,_|\__\___|___/\___/|_| \_/ \___|_|
 |___/
"#;

    let version_line = format!("        v{} - Breadth-First Puzzle Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("gatesolver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    status: Option<String>,
    phase: Option<String>,
    acceptor: Option<String>,
    path: Option<String>,
    phase_index: Option<u64>,
    pieces: Option<u64>,
    rows: Option<u64>,
    width: Option<u64>,
    key_bits: Option<u64>,
    expanded: Option<u64>,
    generated: Option<u64>,
    duplicated: Option<u64>,
    frontier: Option<u64>,
    peak_frontier: Option<u64>,
    depth: Option<u64>,
    speed: Option<u64>,
    memory_bytes: Option<u64>,
    duration_ms: Option<u64>,
    configured: Option<u64>,
    clamped: Option<u64>,
    solved: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field.name(), s);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "pieces" | "piece_count" => self.pieces = Some(value),
            "rows" => self.rows = Some(value),
            "width" => self.width = Some(value),
            "key_bits" => self.key_bits = Some(value),
            "expanded" => self.expanded = Some(value),
            "generated" => self.generated = Some(value),
            "duplicated" => self.duplicated = Some(value),
            "frontier" => self.frontier = Some(value),
            "peak_frontier" => self.peak_frontier = Some(value),
            "depth" => self.depth = Some(value),
            "speed" => self.speed = Some(value),
            "memory_bytes" => self.memory_bytes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "configured" => self.configured = Some(value),
            "clamped" => self.clamped = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field.name(), value.to_string());
    }
}

impl EventVisitor {
    fn record_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "status" => self.status = Some(value),
            "phase" => self.phase = Some(value),
            "acceptor" => self.acceptor = Some(value),
            "path" => self.path = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "width_end" => format_width_end(v),
        "progress" => format_progress(v),
        "successor" => format_successor(v, level),
        "max_width_clamped" => format_clamped(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    format!(
        "{} {} Solving │ {} │ {} pieces │ {}x{} grid │ {} key bits",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.strategy.as_deref().unwrap_or("Unknown").white().bold(),
        count(v.pieces).bright_yellow(),
        count(v.rows).bright_yellow(),
        count(v.width).bright_yellow(),
        count(v.key_bits).bright_magenta(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("Unknown");
    let status = if status == "Solved" {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ {} │ {} expanded │ {} generated │ {} duplicated │ {} bytes",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.expanded).white(),
        count(v.generated).white(),
        count(v.duplicated).white(),
        count(v.memory_bytes).bright_magenta(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let mut output = format!(
        "{} {} {} #{} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0),
    );
    if let Some(ref acceptor) = v.acceptor {
        output.push_str(&format!(" │ {} acceptor", acceptor.bright_black()));
    }
    output
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let icon = if v.solved.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    let mut output = format!(
        "{} {} {} #{} ended {} │ {} │ {} expanded │ {} nodes/s",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0),
        icon,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.expanded).white(),
        count(v.speed).bright_magenta().bold(),
    );

    if let Some(peak) = v.peak_frontier {
        output.push_str(&format!(
            " │ peak frontier {}",
            peak.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_width_end(v: &EventVisitor) -> String {
    let result = if v.solved.unwrap_or(false) {
        "solved".bright_green().bold().to_string()
    } else {
        "exhausted".yellow().to_string()
    };
    format!(
        "{} {} IW({}) {} │ {} bytes",
        format_elapsed(),
        "◆".bright_cyan(),
        v.width.unwrap_or(0),
        result,
        count(v.memory_bytes).bright_magenta(),
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} {:>10} expanded │ {:>10} queued │ depth {:>4} │ {:>12}/s",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.expanded).white(),
        count(v.frontier).white(),
        v.depth.unwrap_or(0),
        count(v.speed).bright_magenta().bold(),
    )
}

fn format_successor(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} {}",
        format_elapsed(),
        "+".bright_green(),
        v.path.as_deref().unwrap_or("").bright_black()
    )
}

fn format_clamped(v: &EventVisitor) -> String {
    format!(
        "{} {} max width {} exceeds {} pieces, using {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.configured.unwrap_or(0),
        v.pieces.unwrap_or(0),
        v.clamped.unwrap_or(0),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(15), "15ms");
        assert_eq!(format_duration_ms(2_500), "2.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_successor_only_at_trace() {
        let v = EventVisitor {
            event: Some("successor".to_string()),
            path: Some("0r1l".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("0r1l"));
    }

    #[test]
    fn test_width_end_mentions_width() {
        let v = EventVisitor {
            event: Some("width_end".to_string()),
            width: Some(2),
            solved: Some(true),
            memory_bytes: Some(4096),
            ..EventVisitor::default()
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("IW(2)"));
        assert!(line.contains("4,096"));
    }
}
