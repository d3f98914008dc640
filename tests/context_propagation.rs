//! Context binding across call chains and threads.

use std::thread;

use logkit::{default_logger, logger_from, with_logger, Context, LogLevel, LoggerConfig, Mode};

mod common;

use common::CaptureWriter;

#[derive(Clone)]
struct TenantId(&'static str);

fn handle_job(ctx: &Context) {
    let logger = logger_from(ctx);
    logger.info("job started");
}

#[test]
fn test_bound_logger_reaches_callees() {
    let writer = CaptureWriter::new();
    let logger = LoggerConfig::new(Mode::Production, LogLevel::Info)
        .build_with_writer(writer.clone());
    let ctx = with_logger(&Context::background(), logger).with_value(TenantId("acme"));

    handle_job(&ctx);

    let lines = writer.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["message"], "job started");
    assert_eq!(ctx.value::<TenantId>().map(|t| t.0), Some("acme"));
}

#[test]
fn test_span_fields_appear_on_events() {
    let writer = CaptureWriter::new();
    let base = LoggerConfig::new(Mode::Production, LogLevel::Info)
        .build_with_writer(writer.clone());

    let job_span = base.in_scope(|| tracing::info_span!("job", job_id = 7));
    let job_logger = base.with_span(job_span);
    let step_span = job_logger.in_scope(|| tracing::info_span!("step", step = "fetch"));
    let step_logger = job_logger.with_span(step_span);

    let ctx = with_logger(&Context::background(), step_logger);
    logger_from(&ctx).warn("slow upstream");
    base.warn("outside any span");

    let lines = writer.json_lines();
    assert_eq!(lines.len(), 2, "output: {}", writer.output());

    assert_eq!(lines[0]["span"]["name"], "step");
    assert_eq!(lines[0]["span"]["step"], "fetch");
    let spans = lines[0]["spans"].as_array().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0]["job_id"], 7);

    assert!(lines[1].get("span").is_none());
}

#[test]
fn test_span_fields_survive_a_quiet_level() {
    let writer = CaptureWriter::new();
    let base = LoggerConfig::new(Mode::Production, LogLevel::Error)
        .build_with_writer(writer.clone());
    let span = base.in_scope(|| tracing::debug_span!("batch", batch = 3));

    base.with_span(span).error("batch failed");

    let lines = writer.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["span"]["batch"], 3);
}

#[test]
fn test_context_moves_across_threads() {
    let writer = CaptureWriter::new();
    let logger = LoggerConfig::new(Mode::Production, LogLevel::Info)
        .build_with_writer(writer.clone());
    let ctx = with_logger(&Context::background(), logger.clone());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = ctx.clone();
            thread::spawn(move || {
                let bound = logger_from(&ctx);
                bound.info(format_args!("worker {i} done"));
                bound
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().ptr_eq(&logger));
    }
    assert_eq!(writer.json_lines().len(), 4);
}

#[test]
fn test_unbound_context_uses_default() {
    let ctx = Context::background().with_value(TenantId("acme"));
    assert!(logger_from(&ctx).ptr_eq(default_logger()));
}
