use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::EventsArgs;
use crate::config::build_translate_config;
use crate::display::{Context as DisplayContext, Progress, print_report};
use crate::io::create_output;

use super::{TOTAL_STEPS, translate_input};

pub fn run_events(args: EventsArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_translate_config(&args.translate)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let translated = translate_input(args.common.input.as_deref(), config, &mut progress)?;
    progress.finish();

    if ctx.interactive {
        print_report(&mut io::stderr().lock(), &translated.report);
    }

    let mut out = create_output(args.output.as_deref())?;
    let events = translated.log.events();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, events)
    } else {
        serde_json::to_writer(&mut out, events)
    }
    .context("Failed to serialize events")?;
    writeln!(out).context("Failed to write events")?;
    out.flush().context("Failed to write events")?;

    Ok(())
}
