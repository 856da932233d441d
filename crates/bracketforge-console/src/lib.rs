//! Colorful console output for bracket generation.
//!
//! Provides a custom `tracing` layer that formats solver events with colors,
//! and a plain-text bracket renderer.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end with field size and search statistics
//! - **TRACE**: Individual backtracks and rejected candidate matchups

pub mod render;

pub use render::render_bracket;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "bracketforge_solver=info";

/// Initializes console output with the default filter.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initializes console output, falling back to `directive` when
/// `RUST_LOG` is unset or unparsable.
pub fn init_with_directive(directive: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BracketConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "BracketForge".bright_cyan().bold(),
        format!("v{}", VERSION).bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct BracketConsoleLayer;

impl<S: Subscriber> Layer<S> for BracketConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("bracketforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    home: Option<String>,
    away: Option<String>,
    constraint: Option<String>,
    team_count: Option<u64>,
    division_count: Option<u64>,
    tolerance: Option<u64>,
    matchups: Option<u64>,
    steps: Option<u64>,
    backtracks: Option<u64>,
    depth: Option<u64>,
    duration_ms: Option<u64>,
    feasible: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "home" => self.home = Some(s.trim_matches('"').to_string()),
            "away" => self.away = Some(s.trim_matches('"').to_string()),
            "constraint" => self.constraint = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "team_count" => self.team_count = Some(value),
            "division_count" => self.division_count = Some(value),
            "tolerance" => self.tolerance = Some(value),
            "matchups" => self.matchups = Some(value),
            "steps" => self.steps = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "home" => self.home = Some(value.to_string()),
            "away" => self.away = Some(value.to_string()),
            "constraint" => self.constraint = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "backtrack" => format_backtrack(v, level),
        "rejected" => format_rejected(v, level),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let teams = v.team_count.unwrap_or(0);
    let divisions = v.division_count.unwrap_or(0);
    let tolerance = v.tolerance.unwrap_or(0);

    format!(
        "{} Pairing │ {} teams │ {} divisions │ tolerance {}",
        "▶".bright_green().bold(),
        teams.to_formatted_string(&Locale::en).bright_yellow(),
        divisions.to_formatted_string(&Locale::en).bright_yellow(),
        tolerance.bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);
    let status = if feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };

    format!(
        "{} Pairing complete │ {} │ {} matchups │ {} steps │ {} backtracks │ {}",
        "■".bright_cyan().bold(),
        status,
        v.matchups.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.backtracks
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_backtrack(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} Backtrack at depth {:>3} │ {} vs {}",
        "↺".bright_black(),
        v.depth.unwrap_or(0),
        v.home.as_deref().unwrap_or("?").bright_black(),
        v.away.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_rejected(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} Rejected {} vs {} │ {}",
        "✗".bright_black(),
        v.home.as_deref().unwrap_or("?").bright_black(),
        v.away.as_deref().unwrap_or("?").bright_black(),
        v.constraint.as_deref().unwrap_or("?").red()
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
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("phase_start".into()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_backtrack_only_at_trace() {
        let v = EventVisitor {
            event: Some("backtrack".into()),
            home: Some("Team A".into()),
            away: Some("Team B".into()),
            depth: Some(2),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("Team A"));
    }

    #[test]
    fn test_rejected_names_constraint() {
        let v = EventVisitor {
            event: Some("rejected".into()),
            home: Some("Team A".into()),
            away: Some("Team C".into()),
            constraint: Some("matchup/DistinctDivisions".into()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
        let line = format_event(&v, Level::TRACE);
        assert!(line.contains("Team C"));
        assert!(line.contains("matchup/DistinctDivisions"));
    }

    #[test]
    fn test_solve_end_reports_status() {
        let v = EventVisitor {
            event: Some("solve_end".into()),
            matchups: Some(0),
            feasible: Some(false),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).contains("INFEASIBLE"));
    }
}
