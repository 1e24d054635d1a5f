//! Tests for the process-wide logger functions and macros
//!
//! The shared logger is global to this test binary, so every test holds
//! `FACADE` while it swaps or reconfigures it.

use parking_lot::{Mutex, MutexGuard};
use rust_level_logger::prelude::*;
use rust_level_logger::{self as log, debugf, error, errorf, info, infof, warn, warnf};
use std::sync::Arc;

static FACADE: Mutex<()> = Mutex::new(());

/// Install a fresh quiet logger writing to a new sink.
fn install(level: Level) -> (MutexGuard<'static, ()>, Arc<DefaultLogger>, MemorySink) {
    let guard = FACADE.lock();
    let sink = MemorySink::new();
    let logger = Arc::new(
        DefaultLogger::builder()
            .level(level)
            .output(sink.clone())
            .flags(Flags::NONE)
            .build(),
    );
    log::set_logger(logger.clone());
    (guard, logger, sink)
}

#[test]
fn test_error_level_scenario() {
    let (_guard, _logger, sink) = install(Level::INFO);

    log::set_level(Level::ERROR);
    log::debug(&["x".into()]);
    log::info(&["x".into()]);
    log::warn(&["x".into()]);
    assert_eq!(sink.contents(), "");

    log::error(&["x".into()]);
    assert_eq!(sink.contents(), "[ERROR] x\n");
}

#[test]
fn test_template_functions() {
    let (_guard, _logger, sink) = install(Level::DEBUG);

    log::debugf("%s suffix", &["-word".into()]);
    log::infof("%d, %o, %s", &[1.into(), 12.into(), "string".into()]);
    log::warnf("%5.1f|%-4s|", &[3.14159.into(), "ab".into()]);
    log::errorf("%d", &["nan".into()]);

    assert_eq!(
        sink.lines(),
        vec![
            "[DEBUG] -word suffix",
            "[INFO ] 1, 14, string",
            "[WARN ]   3.1|ab  |",
            "[ERROR] %!d(string=nan)",
        ]
    );
}

#[test]
fn test_set_level_coercion() {
    let (_guard, logger, _sink) = install(Level::INFO);

    log::set_level("debug");
    assert_eq!(logger.level(), Level::DEBUG);

    log::set_level("Warning");
    assert_eq!(logger.level(), Level::WARN);

    log::set_level(3);
    assert_eq!(logger.level(), Level::ERROR);

    log::set_level(-18);
    assert_eq!(logger.level(), Level::new(-18));

    log::set_level("verbose");
    assert_eq!(logger.level(), DEFAULT_LEVEL);

    log::set_level(Level::FATAL);
    log::set_level(true);
    assert_eq!(logger.level(), Level::WARN);

    log::set_level(Level::FATAL);
    log::set_level(());
    assert_eq!(logger.level(), Level::WARN);
}

#[test]
fn test_setters_reach_current_logger() {
    let (_guard, logger, sink) = install(Level::INFO);

    log::set_prefix("api: ");
    log::set_flags(Flags::MSG_PREFIX | Flags::SHORT_FILE);
    assert_eq!(logger.prefix(), "api: ");
    assert_eq!(logger.flags(), Flags::MSG_PREFIX | Flags::SHORT_FILE);

    let line = line!() + 1;
    log::info(&["ready".into()]);
    assert_eq!(
        sink.contents(),
        format!("facade_tests.rs:{}: api: [INFO ] ready\n", line)
    );

    let other = MemorySink::new();
    log::set_output(other.clone());
    log::set_flags(Flags::NONE);
    log::warn(&["moved".into()]);
    assert_eq!(other.contents(), "api: [WARN ] moved\n");
}

#[test]
fn test_replacing_logger_redirects_calls() {
    let (_guard, first, first_sink) = install(Level::INFO);

    let first_dyn: Arc<dyn Logger> = first.clone();
    assert!(Arc::ptr_eq(&log::default_logger(), &first_dyn));

    let second_sink = MemorySink::new();
    let second: Arc<dyn Logger> = Arc::new(
        DefaultLogger::builder()
            .output(second_sink.clone())
            .flags(Flags::NONE)
            .build(),
    );

    let previous = log::set_logger(second.clone());
    assert!(Arc::ptr_eq(&previous, &first_dyn));
    assert!(Arc::ptr_eq(&log::default_logger(), &second));

    log::info(&["to second".into()]);
    assert_eq!(first_sink.contents(), "");
    assert_eq!(second_sink.contents(), "[INFO ] to second\n");
}

#[test]
fn test_macros_forward_to_shared_logger() {
    let (_guard, _logger, sink) = install(Level::DEBUG);

    let user = "ada";
    info!("user ", user, " logged in");
    warn!(1, 12, "string");
    error!();
    debugf!("%s is %d", "answer", 42);
    infof!("%t", false);
    warnf!("%q", "quoted");
    errorf!("%6.2f%%", 99.5);

    assert_eq!(
        sink.lines(),
        vec![
            "[INFO ] user ada logged in",
            "[WARN ] 1 12string",
            "[ERROR] ",
            "[DEBUG] answer is 42",
            "[INFO ] false",
            "[WARN ] \"quoted\"",
            "[ERROR]  99.50%",
        ]
    );
}

#[test]
fn test_caller_location_through_facade() {
    let (_guard, logger, sink) = install(Level::INFO);
    logger.set_flags(Flags::SHORT_FILE);

    let function_line = line!() + 1;
    log::error(&["from function".into()]);
    let macro_line = line!() + 1;
    errorf!("from %s", "macro");

    assert_eq!(
        sink.lines(),
        vec![
            format!("facade_tests.rs:{}: [ERROR] from function", function_line),
            format!("facade_tests.rs:{}: [ERROR] from macro", macro_line),
        ]
    );
}

#[test]
fn test_fatal_through_facade_uses_exit_hook() {
    let _guard = FACADE.lock();
    let sink = MemorySink::new();
    let codes = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&codes);

    log::set_logger(Arc::new(
        DefaultLogger::builder()
            .output(sink.clone())
            .flags(Flags::NONE)
            .exit_hook(Arc::new(move |code: i32| recorded.lock().push(code)))
            .build(),
    ));

    log::fatal(&["first".into()]);
    log::fatalf("second %d", &[2.into()]);

    assert_eq!(sink.contents(), "[FATAL] first\n[FATAL] second 2\n");
    assert_eq!(*codes.lock(), vec![1, 1]);
}

#[test]
fn test_functions_use_overridden_leveled_methods() {
    use std::io::Write;
    use std::panic::Location;

    #[derive(Default)]
    struct Overriding {
        calls: Mutex<Vec<String>>,
    }

    impl Logger for Overriding {
        fn log(&self, level: Level, message: Message<'_>, _: &'static Location<'static>) {
            self.calls
                .lock()
                .push(format!("log {} {}", level.value(), message.render()));
        }

        fn set_level(&self, _: Level) {}
        fn set_output(&self, _: Box<dyn Write + Send>) {}
        fn set_prefix(&self, _: &str) {}
        fn set_flags(&self, _: Flags) {}

        fn warn(&self, args: &[Value]) {
            self.calls.lock().push(format!("warn {}", rust_level_logger::sprint(args)));
        }

        fn errorf(&self, format: &str, args: &[Value]) {
            self.calls
                .lock()
                .push(format!("errorf {}", rust_level_logger::sprintf(format, args)));
        }
    }

    let _guard = FACADE.lock();
    let logger = Arc::new(Overriding::default());
    log::set_logger(logger.clone());

    log::warn(&["x".into()]);
    log::errorf("code %d", &[5.into()]);
    log::info(&["plain".into()]);

    assert_eq!(
        *logger.calls.lock(),
        vec!["warn x", "errorf code 5", "log 1 plain"]
    );
}
