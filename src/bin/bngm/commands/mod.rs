mod events;
mod summary;

use events::run_events;
use summary::run_summary;

use std::path::Path;

use anyhow::{Context, Result, bail};
use bngl_model::io::{Node, read_document};
use bngl_model::{EventLog, IdAllocator, Report, TranslateConfig, Translator};

use crate::cli::Command;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::{open_input, stdin_is_tty};
use crate::util::text::count;

const TOTAL_STEPS: u8 = 2;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Summary(args) => run_summary(args, ctx),
        Command::Events(args) => run_events(args, ctx),
    }
}

/// A translated model with everything the commands report on.
struct Translated {
    log: EventLog,
    report: Report,
}

/// Reads and translates the input, reporting progress on the way.
fn translate_input(
    input: Option<&Path>,
    config: TranslateConfig,
    progress: &mut Progress,
) -> Result<Translated> {
    if input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: bngm <COMMAND> <INPUT> or pipe XML via stdin."
        );
    }

    progress.step("Reading document");
    let root = read_model(input)?;
    progress.complete_step("Reading document", &[format!("Root element <{}>", root.tag())]);

    progress.step("Translating model");
    let ids = IdAllocator::new();
    let mut log = EventLog::new();
    let report = Translator::new(&mut log, &ids)
        .config(config)
        .translate(&root)
        .context("Translation failed")?;

    let summary = log.summary();
    let substeps = vec![
        format!(
            "{}, {}",
            count(summary.molecule_types, "molecule type"),
            count(summary.seed_molecules, "seed molecule")
        ),
        format!(
            "{}, {}",
            count(summary.rules, "rule"),
            count(summary.observables, "observable")
        ),
        format!("{} component ids issued", ids.issued()),
    ];
    progress.complete_step("Translating model", &substeps);

    Ok(Translated { log, report })
}

fn read_model(input: Option<&Path>) -> Result<Node> {
    let reader = open_input(input)?;
    let name = reader.describe(input);
    read_document(reader).with_context(|| format!("Failed to read model from {name}"))
}
