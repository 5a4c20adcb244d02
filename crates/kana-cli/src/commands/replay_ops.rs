use std::fs;
use std::path::Path;
use std::process;

use kana_core::settings::{parse_settings_toml, Settings};
use kana_core::{extract_trailing_kana, resolve, KanaMatcher};
use kana_session::{Engine, KanaProvider};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::trace::{read_trace, NotificationRecord, TraceEvent};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One processed trace event.
#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: TraceEvent,
    pub snapshots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationRecord>,
}

/// Feed `events` to `provider` in order, recording the history after each.
pub fn replay(provider: &mut KanaProvider, events: Vec<TraceEvent>) -> Vec<ReplayStep> {
    events
        .into_iter()
        .enumerate()
        .map(|(i, event)| {
            let notification = provider.handle(event.clone().into());
            ReplayStep {
                index: i + 1,
                event,
                snapshots: provider.snapshots().to_vec(),
                notification: notification.map(NotificationRecord::from),
            }
        })
        .collect()
}

fn load_settings(path: Option<&str>) -> Settings {
    match path {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(parse_settings_toml(&content), "Error: {}")
        }
        None => Settings::default(),
    }
}

fn describe(notification: &NotificationRecord) -> String {
    match notification {
        NotificationRecord::Clear => "clear".to_string(),
        NotificationRecord::Update { text } => format!("update {text}"),
        NotificationRecord::Error { kind, message } => format!("error {kind}: {message}"),
    }
}

/// Left-align `s` to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Text rendering of a replay. Without `verbose` only steps that emitted
/// something are listed.
pub fn render_text(steps: &[ReplayStep], verbose: bool) -> Vec<String> {
    let shown: Vec<&ReplayStep> = steps
        .iter()
        .filter(|s| verbose || s.notification.is_some())
        .collect();
    let labels: Vec<String> = shown
        .iter()
        .map(|s| format!("{} {}", s.event.kind(), s.event.detail()).trim_end().to_string())
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let index_width = steps.len().to_string().len();

    shown
        .iter()
        .zip(&labels)
        .map(|(step, label)| {
            let mut line = format!("#{:>index_width$}  {}", step.index, pad(label, label_width));
            if verbose {
                line.push_str(&format!("  [{}]", step.snapshots.join(", ")));
            }
            if let Some(n) = &step.notification {
                line.push_str(&format!("  -> {}", describe(n)));
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn replay_cmd(
    trace_file: &str,
    engine: Option<Engine>,
    user_agent: Option<&str>,
    settings_file: Option<&str>,
    json: bool,
    verbose: bool,
) {
    let settings = load_settings(settings_file);
    let events = die!(read_trace(Path::new(trace_file)), "Error reading {trace_file}: {}");

    let mut provider = match (engine, user_agent) {
        (Some(engine), _) => die!(KanaProvider::new(engine, &settings), "Error: {}"),
        (None, Some(ua)) => die!(KanaProvider::for_user_agent(ua, &settings), "Error: {}"),
        (None, None) => die!(KanaProvider::new(Engine::Continuous, &settings), "Error: {}"),
    };
    let engine = provider.engine();
    let steps = replay(&mut provider, events);

    if json {
        for step in &steps {
            println!("{}", die!(serde_json::to_string(step), "Error: {}"));
        }
        return;
    }

    eprintln!("engine: {engine}, {} events", steps.len());
    for line in render_text(&steps, verbose) {
        println!("{line}");
    }
}

pub fn resolve_cmd(snapshots: &[String]) {
    match resolve(snapshots) {
        Some(kana) => println!("{kana}"),
        None => {
            eprintln!("Error: no snapshots given");
            process::exit(1);
        }
    }
}

pub fn extract_cmd(text: &str, settings_file: Option<&str>) {
    let settings = load_settings(settings_file);
    let matcher: KanaMatcher = die!(settings.matcher(), "Error: {}");
    println!("{}", extract_trailing_kana(&matcher, text));
}
