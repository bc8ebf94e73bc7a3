use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::SummaryArgs;
use crate::config::{build_translate_config, describe};
use crate::display::{Context as DisplayContext, Progress, print_config, print_report, print_summary};

use super::{TOTAL_STEPS, translate_input};

pub fn run_summary(args: SummaryArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_translate_config(&args.translate)?;
    let notes = describe(&config);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let translated = translate_input(args.common.input.as_deref(), config, &mut progress)?;
    progress.finish();

    let summary = translated.log.summary();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary).context("Failed to write summary")?;
        writeln!(out).context("Failed to write summary")?;
    } else {
        print_config(&mut out, &notes);
        print_summary(&mut out, &summary);
        print_report(&mut out, &translated.report);
    }

    Ok(())
}
