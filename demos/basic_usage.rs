//! Basic usage of the logz facility: built-in formats, prefixes, context,
//! and a custom formatter.
//!
//! Run with: `cargo run --example basic_usage`

use logz::context;
use logz::prelude::*;

fn main() {
    // Console logging with the default text format
    let basic_logger = Logger::builder()
        .min_level(Severity::Debug)
        .prefix("my-app")
        .build();

    basic_logger.info("This is an info message");
    basic_logger.error_with_context(
        "This is an error message",
        context! { "errorCode" => 123, "userId" => "user-456" },
    );

    // JSON format logging
    let json_logger = Logger::builder()
        .min_level(Severity::Debug)
        .format(LogFormat::Json)
        .prefix("my-app")
        .build();

    json_logger.info("This is a JSON formatted message");
    json_logger.warning_with_context(
        "API rate limit approaching",
        context! { "currentRate" => 95, "limit" => 100, "endpoint" => "/api/users" },
    );

    // Custom format callback replaces both built-in modes
    let custom_logger = Logger::builder()
        .min_level(Severity::Debug)
        .format_fn(|level, message, _context| format!("[CUSTOM] {}: {}", level, message))
        .prefix("custom")
        .build();

    custom_logger.info("Custom formatted message");

    // Per-sink level filtering downstream of one logger
    let filtered_logger = Logger::builder()
        .min_level(Severity::Debug)
        .prefix("filtered")
        .sink(LevelFilterSink::new(
            Severity::Error,
            WriterSink::new(std::io::stderr()),
        ))
        .sink(LevelFilterSink::new(
            Severity::Info,
            WriterSink::new(std::io::stdout()),
        ))
        .build();

    filtered_logger.debug("This won't appear anywhere");
    filtered_logger.info("This goes to stdout");
    filtered_logger.error("This goes to both stderr and stdout");
}
