// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Env var holding `EnvFilter` directives that replace the configured level.
pub const LOG_ENV: &str = "CONNECT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// The TUI owns the terminal, so its logs are appended to a file.
    File(PathBuf),
    Stderr,
}

fn build_filter(level: &str, override_directives: Option<&str>) -> Result<EnvFilter> {
    match override_directives.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("parse {LOG_ENV}={directives:?}")),
        _ => EnvFilter::try_new(level).with_context(|| format!("parse log level {level:?}")),
    }
}

pub fn init(level: &str, target: &LogTarget) -> Result<()> {
    let override_directives = env::var(LOG_ENV).ok();
    let filter = build_filter(level, override_directives.as_deref())?;

    let installed = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| {
                    format!(
                        "open log file {}; set [log].file to a writable path",
                        path.display()
                    )
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init(),
    };
    installed.map_err(|error| anyhow!("install log subscriber: {error}"))
}
