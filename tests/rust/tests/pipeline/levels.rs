//! Level normalization through the facade
//!
//! Levels arrive either as `Severity` values or as names; names are
//! resolved during dispatch and unknown ones fail the whole call.

use logmux::{DebugError, Debugger, LogInfo, Severity, SinkKind};
use tests::mocks::CapturingSink;

fn make_debugger() -> (Debugger, tests::SharedRecords) {
    let debugger = Debugger::new();
    let sink = CapturingSink::new("capture");
    let records = sink.records.clone();
    debugger.attach_sink(SinkKind::Web, Box::new(sink));
    (debugger, records)
}

#[test]
fn default_level_is_info() {
    let (debugger, records) = make_debugger();

    debugger.log("no level given", LogInfo::new()).unwrap();

    assert_eq!(records.lock()[0].level, Severity::Info);
}

#[test]
fn named_levels_normalize() {
    let (debugger, records) = make_debugger();

    debugger
        .log("long name", LogInfo::new().with_level("critical"))
        .unwrap();
    debugger
        .log("short name", LogInfo::new().with_level("crit"))
        .unwrap();
    debugger
        .log("mixed case", LogInfo::new().with_level("EMERGENCY"))
        .unwrap();

    let records = records.lock();
    assert_eq!(records[0].level, Severity::Crit);
    assert_eq!(records[1].level, Severity::Crit);
    assert_eq!(records[2].level, Severity::Emerg);
}

#[test]
fn severity_values_pass_through_unchanged() {
    let (debugger, records) = make_debugger();
    let all = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Crit,
        Severity::Err,
        Severity::Warn,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    for severity in all {
        debugger
            .log(severity.as_str(), LogInfo::new().with_level(severity))
            .unwrap();
    }

    let seen: Vec<Severity> = records.lock().iter().map(|r| r.level).collect();
    assert_eq!(seen, all);
}

#[test]
fn unknown_level_fails_and_reaches_no_sink() {
    let (debugger, records) = make_debugger();

    let err = debugger
        .log("should not land", LogInfo::new().with_level("verbose"))
        .unwrap_err();

    assert!(matches!(err, DebugError::InvalidLevel { given } if given == "verbose"));
    assert!(records.lock().is_empty(), "no sink should see the record");
}

#[test]
fn warning_and_error_force_their_levels() {
    let (debugger, records) = make_debugger();

    debugger
        .log_warning("watch out", LogInfo::new().with_level(Severity::Debug))
        .unwrap();
    debugger
        .log_error("it broke", LogInfo::new().with_level("info"))
        .unwrap();

    let records = records.lock();
    assert_eq!(records[0].level, Severity::Warn);
    assert_eq!(records[1].level, Severity::Err);
}
