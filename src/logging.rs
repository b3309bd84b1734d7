//! Structured logging.
//!
//! One JSON object per line on stdout, with a per-process run id and a
//! monotonically increasing sequence number. Setting `LOG_DIR` also
//! mirrors records into `<LOG_DIR>/<run_id>/{events,trace}.jsonl`.

use chrono::Utc;
use serde_json::{json, Map, Value};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

// =============================================================================
// Log Levels
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("trace") => Level::Trace,
            Ok("debug") => Level::Debug,
            Ok("info") => Level::Info,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            Ok("fatal") => Level::Fatal,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

// =============================================================================
// Log Domains
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Feed,   // Fetch, payload digest, parse
    Render, // Markers and popups
    Legend, // Legend control
    System, // Startup, config, output
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Feed => "feed",
            Domain::Render => "render",
            Domain::Legend => "legend",
            Domain::System => "system",
        }
    }

    pub fn is_enabled(&self) -> bool {
        // LOG_DOMAINS: comma-separated list or "all"
        match std::env::var("LOG_DOMAINS").as_deref() {
            Ok("all") | Err(_) => true,
            Ok(domains) => domains.split(',').any(|d| d.trim() == self.as_str()),
        }
    }
}

// =============================================================================
// Run context
// =============================================================================

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);
static RUN_CONTEXT: OnceLock<RunContext> = OnceLock::new();

fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug)]
struct Sinks {
    events: Mutex<BufWriter<File>>,
    trace: Mutex<BufWriter<File>>,
}

#[derive(Debug)]
struct RunContext {
    run_id: String,
    sinks: Option<Sinks>,
}

fn open_sinks(base: &str, run_id: &str) -> Option<Sinks> {
    let mut run_dir = PathBuf::from(base);
    run_dir.push(run_id);
    if let Err(err) = create_dir_all(&run_dir) {
        eprintln!("[log] failed to create run dir: {}", err);
        return None;
    }
    let open = |name: &str| match File::create(run_dir.join(name)) {
        Ok(f) => Some(Mutex::new(BufWriter::new(f))),
        Err(err) => {
            eprintln!("[log] failed to create {}: {}", name, err);
            None
        }
    };
    Some(Sinks {
        events: open("events.jsonl")?,
        trace: open("trace.jsonl")?,
    })
}

fn run_context() -> &'static RunContext {
    RUN_CONTEXT.get_or_init(|| {
        let run_id = std::env::var("RUN_ID")
            .unwrap_or_else(|_| format!("r-{}-{}", ts_epoch_ms(), process::id()));
        let sinks = std::env::var("LOG_DIR")
            .ok()
            .and_then(|base| open_sinks(&base, &run_id));
        RunContext { run_id, sinks }
    })
}

fn write_line(writer: &Mutex<BufWriter<File>>, line: &str) {
    if let Ok(mut w) = writer.lock() {
        let _ = writeln!(w, "{}", line);
        let _ = w.flush();
    }
}

// =============================================================================
// Core logging functions
// =============================================================================

/// RFC3339 timestamp with milliseconds
pub fn ts_now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Epoch milliseconds
pub fn ts_epoch_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Whether records at `level` would currently be emitted.
pub fn enabled(level: Level) -> bool {
    level >= Level::from_env()
}

pub fn run_id() -> &'static str {
    &run_context().run_id
}

/// Emit a structured log entry
pub fn log(level: Level, domain: Domain, event: &str, fields: Map<String, Value>) {
    if !enabled(level) || !domain.is_enabled() {
        return;
    }
    let ctx = run_context();
    let line = format_record(&ctx.run_id, next_seq(), level, domain, event, fields);
    if let Some(sinks) = &ctx.sinks {
        match level {
            Level::Trace | Level::Debug => write_line(&sinks.trace, &line),
            _ => write_line(&sinks.events, &line),
        }
    }
    println!("{}", line);
}

fn format_record(
    run_id: &str,
    seq: u64,
    level: Level,
    domain: Domain,
    event: &str,
    mut fields: Map<String, Value>,
) -> String {
    let msg = fields.remove("msg").unwrap_or(Value::String(String::new()));
    let mut entry = Map::new();
    entry.insert("ts".to_string(), json!(ts_now()));
    entry.insert("run_id".to_string(), json!(run_id));
    entry.insert("seq".to_string(), json!(seq));
    entry.insert("lvl".to_string(), json!(level.as_str().to_uppercase()));
    entry.insert("component".to_string(), json!(domain.as_str()));
    entry.insert("event".to_string(), json!(event));
    entry.insert("msg".to_string(), msg);
    entry.insert("data".to_string(), Value::Object(fields));
    Value::Object(entry).to_string()
}

pub fn info(domain: Domain, event: &str, fields: Map<String, Value>) {
    log(Level::Info, domain, event, fields);
}

pub fn warn(domain: Domain, event: &str, fields: Map<String, Value>) {
    log(Level::Warn, domain, event, fields);
}

pub fn debug(domain: Domain, event: &str, fields: Map<String, Value>) {
    log(Level::Debug, domain, event, fields);
}

// =============================================================================
// Field helpers
// =============================================================================

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_obj_helper() {
        let m = obj(&[("key", v_str("value")), ("num", v_num(42.0))]);
        assert_eq!(m.get("key").unwrap(), "value");
        assert_eq!(m.get("num").unwrap(), 42.0);
    }

    #[test]
    fn test_seq_increments() {
        let s1 = next_seq();
        let s2 = next_seq();
        assert!(s2 > s1);
    }

    #[test]
    fn test_debug_gated_at_default_level() {
        if std::env::var("LOG_LEVEL").is_ok() {
            return;
        }
        assert!(!enabled(Level::Debug));
        assert!(enabled(Level::Info));
        assert!(enabled(Level::Fatal));
        assert_eq!(Level::Fatal.as_str(), "fatal");
    }

    #[test]
    fn test_run_dir_sinks_created() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_str().unwrap();

        let sinks = open_sinks(base, "r-sinks").expect("sinks");
        write_line(&sinks.events, r#"{"event":"fetch_done"}"#);
        write_line(&sinks.trace, r#"{"event":"features"}"#);

        let run_dir = dir.path().join("r-sinks");
        let events = std::fs::read_to_string(run_dir.join("events.jsonl")).unwrap();
        let trace = std::fs::read_to_string(run_dir.join("trace.jsonl")).unwrap();
        assert_eq!(events, "{\"event\":\"fetch_done\"}\n");
        assert_eq!(trace, "{\"event\":\"features\"}\n");
    }

    #[test]
    fn test_record_shape() {
        let line = format_record(
            "r-test",
            7,
            Level::Warn,
            Domain::Render,
            "feature_skipped",
            obj(&[("msg", v_str("bad coords")), ("index", v_num(3.0))]),
        );
        let v: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["run_id"], "r-test");
        assert_eq!(v["seq"], 7);
        assert_eq!(v["lvl"], "WARN");
        assert_eq!(v["component"], "render");
        assert_eq!(v["event"], "feature_skipped");
        assert_eq!(v["msg"], "bad coords");
        assert_eq!(v["data"]["index"], 3.0);
        assert!(v["data"].get("msg").is_none());
    }
}
