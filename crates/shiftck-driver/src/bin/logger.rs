use std::{fs, io, sync::Arc};

use anyhow::{Context, Result};
use shiftck_config::Config;
use tracing::{Dispatch, Level};
use tracing_subscriber::{Registry, filter::Targets, fmt::writer::BoxMakeWriter, prelude::*};

const TRACE_FILE: &str = "trace";

fn targets(level: Level) -> Targets {
    Targets::new().with_target("shiftck_driver", level).with_target("shiftck", level)
}

pub fn install(config: &Config) -> Result<()> {
    let level = if config.verbose { Level::INFO } else { Level::WARN };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(targets(level));

    let trace_layer = if config.dump_trace {
        let file = fs::create_dir_all(&config.log_dir)
            .and_then(|()| fs::File::create(config.log_dir.join(TRACE_FILE)))
            .with_context(|| format!("cannot create trace file in {}", config.log_dir.display()))?;
        let writer = BoxMakeWriter::new(Arc::new(file));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .json()
            .with_filter(targets(Level::DEBUG));
        Some(fmt_layer)
    } else {
        None
    };

    let dispatch = Dispatch::new(Registry::default().with(stderr_layer).with(trace_layer));
    dispatch.init();
    Ok(())
}
