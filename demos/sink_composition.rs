//! Sink composition for a multi-component application: per-component
//! loggers, fan-out to console and files, and a shared error file fed by
//! level-filter wrappers.
//!
//! Run with: `cargo run --example sink_composition`

use logz::context;
use logz::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    std::fs::create_dir_all("./logs")?;

    let api_log = Arc::new(FileSink::new("./logs/api.log")?);
    let db_log = Arc::new(FileSink::new("./logs/database.log")?);

    // One error file shared by every component
    let error_log: SharedSink = Arc::new(FileSink::new("./logs/errors.log")?);

    // API logger: JSON to console + api.log, errors also to errors.log
    let api_logger = Logger::builder()
        .min_level(Severity::Info)
        .format(LogFormat::Json)
        .prefix("API")
        .sink(
            MultiSink::default()
                .with(ConsoleSink::new())
                .with(LevelFilterSink::from_shared(
                    Severity::Error,
                    Arc::clone(&error_log),
                )),
        )
        .shared_sink(api_log)
        .build();

    // Database logger: text to database.log, errors also to errors.log
    let db_logger = Logger::builder()
        .min_level(Severity::Debug)
        .prefix("DB")
        .shared_sink(db_log)
        .sink(LevelFilterSink::from_shared(
            Severity::Error,
            Arc::clone(&error_log),
        ))
        .build();

    // Application logger: console plus the shared error file
    let app_logger = Logger::builder()
        .min_level(Severity::Info)
        .prefix("APP")
        .sink(ConsoleSink::new())
        .sink(LevelFilterSink::from_shared(Severity::Error, error_log))
        .build();

    app_logger.info("Application starting up");

    api_logger.info_with_context(
        "Incoming API request",
        context! {
            "method" => "GET",
            "path" => "/api/users",
            "ip" => "192.168.1.100",
        },
    );

    db_logger.debug_with_context(
        "Executing SQL query",
        context! {
            "query" => "SELECT * FROM users WHERE active = ?",
            "duration" => "12ms",
        },
    );

    db_logger.info_with_context(
        "Query executed successfully",
        context! { "rowsReturned" => 25, "duration" => "12ms" },
    );

    api_logger.error_with_context(
        "Authentication failed",
        context! {
            "method" => "POST",
            "path" => "/api/login",
            "reason" => "invalid_credentials",
            "attempts" => 3,
        },
    );

    db_logger.error_with_context(
        "Database connection failed",
        context! {
            "host" => "localhost:5432",
            "database" => "myapp",
            "error" => "connection timeout",
        },
    );

    app_logger.info("Application shutting down gracefully");

    println!("\nCheck the ./logs/ directory for log files:");
    println!("- api.log: API-related logs");
    println!("- database.log: database operation logs");
    println!("- errors.log: all error-level messages from all loggers");

    Ok(())
}
