//! Call gating and the in-memory snapshots

use std::sync::Arc;
use std::thread;

use logmux::{DebugConfig, Debugger, LogInfo, Severity, SinkKind};

#[test]
fn no_active_sink_is_a_complete_noop() {
    let debugger = Debugger::new();

    // Nothing validates or renders on a gated call, even bad input.
    debugger
        .log("broken {tpl", LogInfo::new().with_level("nonsense"))
        .unwrap();

    assert!(debugger.web_records().is_none());
    assert!(debugger.query_records().is_none());
}

#[test]
fn disabled_facade_drops_calls_without_error() {
    let debugger = Debugger::with_config(DebugConfig {
        logging_disabled: true,
    });
    debugger.enable_web_log();

    debugger
        .log("suppressed", LogInfo::new().with_level("nonsense"))
        .unwrap();

    assert_eq!(debugger.web_records().unwrap().len(), 0);
}

#[test]
fn kill_switch_toggles_at_runtime() {
    let debugger = Debugger::new();
    debugger.enable_web_log();

    debugger.log("one", LogInfo::new()).unwrap();
    debugger.set_logging_disabled(true);
    debugger.log("two", LogInfo::new()).unwrap();
    debugger.set_logging_disabled(false);
    debugger.log("three", LogInfo::new()).unwrap();

    let messages: Vec<String> = debugger
        .web_records()
        .unwrap()
        .into_iter()
        .map(|record| record.message)
        .collect();
    assert_eq!(messages, vec!["one", "three"]);
}

#[test]
fn web_and_query_sinks_collect_the_same_stream() {
    let debugger = Debugger::new();
    debugger.enable_web_log();
    debugger.enable_query_log();

    debugger.log("page hit", LogInfo::new()).unwrap();
    debugger
        .log("SELECT 1", LogInfo::new().with_type("query"))
        .unwrap();

    let web = debugger.web_records().unwrap();
    let queries = debugger.query_records().unwrap();
    assert_eq!(web.len(), 2);
    assert_eq!(queries.len(), 2);
    assert_eq!(web[1].message, queries[1].message);
    assert_eq!(queries[1].r#type.as_deref(), Some("query"));
}

#[test]
fn facade_is_shared_across_threads() {
    let debugger = Arc::new(Debugger::new());
    debugger.enable_web_log();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let debugger = debugger.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    debugger
                        .log(format!("worker {worker} message {i}"), LogInfo::new())
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(debugger.web_log_active());
    assert_eq!(debugger.web_records().unwrap().len(), 100);
}

#[test]
fn enabling_a_sink_mid_run_is_atomic() {
    let debugger = Arc::new(Debugger::new());
    debugger.enable_web_log();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let debugger = debugger.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    debugger
                        .log(format!("worker {worker} message {i}"), LogInfo::new())
                        .unwrap();
                }
            })
        })
        .collect();

    // Races the registration against the in-flight log calls.
    debugger.enable_query_log();

    for handle in handles {
        handle.join().unwrap();
    }

    let web: Vec<String> = debugger
        .web_records()
        .unwrap()
        .into_iter()
        .map(|record| record.message)
        .collect();
    let queries: Vec<String> = debugger
        .query_records()
        .unwrap()
        .into_iter()
        .map(|record| record.message)
        .collect();

    assert_eq!(web.len(), 100, "the first sink sees every record");
    assert!(queries.len() <= web.len());
    assert!(
        web.ends_with(&queries),
        "a record reaches the late sink only once registration is complete"
    );
    assert_eq!(debugger.active_sinks(), vec![SinkKind::Web, SinkKind::Query]);
}

#[test]
fn tagged_calls_keep_their_tag_everywhere() {
    let debugger = Debugger::new();
    debugger.enable_web_log();

    debugger
        .log_tag("cache cleared", "cache", LogInfo::new())
        .unwrap();

    let records = debugger.web_records().unwrap();
    assert_eq!(records[0].tag.as_deref(), Some("cache"));
    assert_eq!(records[0].level, Severity::Info);
}
