//! Colored console output for argcheck.
//!
//! Provides a custom `tracing` layer that formats validation events with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Failed checks forwarded in warn mode
//! - **DEBUG**: Compiled functions, violations, binding rejections
//! - **TRACE**: Individual check evaluations

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the argcheck console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Does nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ArgCheckConsoleLayer)
            .try_init();
    });
}

fn default_directive() -> Directive {
    match "argcheck=info".parse() {
        Ok(directive) => directive,
        Err(_) => LevelFilter::INFO.into(),
    }
}

/// A tracing layer that formats validation events with colors.
pub struct ArgCheckConsoleLayer;

impl<S: Subscriber> Layer<S> for ArgCheckConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("argcheck") {
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

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    function: Option<String>,
    param: Option<String>,
    check: Option<String>,
    kind: Option<String>,
    error: Option<String>,
    params: Option<u64>,
    checks: Option<u64>,
    passed: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let unquoted = s
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(&s);
        self.record_str(field, unquoted);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "params" => self.params = Some(value),
            "checks" => self.checks = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "passed" {
            self.passed = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "function" => &mut self.function,
            "param" => &mut self.param,
            "check" => &mut self.check,
            "kind" => &mut self.kind,
            "error" => &mut self.error,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "compile" => format_compile(v),
        "violation" => format_violation(v, level),
        "bind_rejected" => format_bind_rejected(v, level),
        "check" => format_check(v, level),
        _ => String::new(),
    }
}

fn format_function(v: &EventVisitor) -> String {
    v.function
        .as_deref()
        .unwrap_or("<unknown>")
        .white()
        .bold()
        .to_string()
}

fn format_compile(v: &EventVisitor) -> String {
    format!(
        "{} compiled {} │ {} params │ {} checks",
        "✔".bright_green().bold(),
        format_function(v),
        v.params.unwrap_or(0).bright_yellow(),
        v.checks.unwrap_or(0).bright_yellow(),
    )
}

fn format_violation(v: &EventVisitor, level: Level) -> String {
    let marker = if level == Level::WARN {
        "⚠".bright_yellow().bold().to_string()
    } else {
        "✘".bright_red().bold().to_string()
    };
    let mut output = format!(
        "{} {} │ {}",
        marker,
        format_function(v),
        v.kind.as_deref().unwrap_or("CallArgCheckError").bright_magenta(),
    );
    if let Some(ref param) = v.param {
        output.push_str(&format!(" │ param {}", param.cyan()));
    }
    if let Some(ref error) = v.error {
        output.push_str(&format!("\n    {}", error.bright_black()));
    }
    output
}

fn format_bind_rejected(v: &EventVisitor, level: Level) -> String {
    let marker = if level == Level::WARN {
        "⚠".bright_yellow().bold().to_string()
    } else {
        "✘".bright_red().bold().to_string()
    };
    format!(
        "{} {} │ {} │ {}",
        marker,
        format_function(v),
        "binding rejected".bright_red(),
        v.error.as_deref().unwrap_or("").bright_black(),
    )
}

fn format_check(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    let status = if v.passed.unwrap_or(false) {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    };
    format!(
        "  {} {} {}",
        status,
        v.param.as_deref().unwrap_or("").bright_black(),
        v.check.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_compile() {
        let v = EventVisitor {
            event: Some("compile".into()),
            function: Some("resize".into()),
            params: Some(2),
            checks: Some(5),
            ..Default::default()
        };
        let out = strip_ansi(&format_event(&v, Level::DEBUG));
        assert_eq!(out, "✔ compiled resize │ 2 params │ 5 checks");
    }

    #[test]
    fn test_format_violation() {
        let v = EventVisitor {
            event: Some("violation".into()),
            function: Some("resize".into()),
            kind: Some("CallArgValueCheckViolation".into()),
            param: Some("[0]='width'".into()),
            error: Some("violation of value check".into()),
            ..Default::default()
        };
        let out = strip_ansi(&format_event(&v, Level::DEBUG));
        assert!(out.starts_with("✘ resize │ CallArgValueCheckViolation │ param [0]='width'"));
        assert!(out.ends_with("violation of value check"));

        let warned = strip_ansi(&format_event(&v, Level::WARN));
        assert!(warned.starts_with("⚠"));
    }

    #[test]
    fn test_format_bind_rejected() {
        let v = EventVisitor {
            event: Some("bind_rejected".into()),
            function: Some("f".into()),
            error: Some("missing a required argument: 'x'".into()),
            ..Default::default()
        };
        let out = strip_ansi(&format_event(&v, Level::DEBUG));
        assert_eq!(
            out,
            "✘ f │ binding rejected │ missing a required argument: 'x'"
        );
    }

    #[test]
    fn test_check_only_at_trace() {
        let v = EventVisitor {
            event: Some("check".into()),
            param: Some("[0]='x'".into()),
            check: Some("Positive()".into()),
            passed: Some(true),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert_eq!(
            strip_ansi(&format_event(&v, Level::TRACE)),
            "  ✓ [0]='x' Positive()"
        );
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".into()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
