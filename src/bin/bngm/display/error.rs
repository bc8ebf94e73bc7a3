use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self {
            hints: Vec::new(),
            has_typed_hints: false,
        };

        collector.collect_document_hints(err);
        collector.collect_translate_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_document_hints(&mut self, err: &Error) {
        use bngl_model::io::Error as DocumentError;

        let Some(doc_err) = err.chain().find_map(|e| e.downcast_ref::<DocumentError>()) else {
            return;
        };
        self.has_typed_hints = true;

        match doc_err {
            DocumentError::Io { source } => self.collect_std_io_hints(source),
            DocumentError::Parse { line, column, .. } => {
                self.add(format!(
                    "The XML is not well formed near line {line}, column {column}"
                ));
                self.add("Check for unclosed elements or unescaped '<' and '&' in values");
                self.add("Export the model again with BioNetGen's writeXML action");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("The input is not valid UTF-8 text");
                self.add("BioNetGen XML files are expected to be UTF-8 encoded");
            }
            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_translate_hints(&mut self, err: &Error) {
        use bngl_model::{Block, TranslateError};

        let Some(tr_err) = err.chain().find_map(|e| e.downcast_ref::<TranslateError>()) else {
            return;
        };
        self.has_typed_hints = true;

        match tr_err {
            TranslateError::MalformedBlock { block: Block::Model, .. } => {
                self.add("The document needs a <Model> element holding all six model lists");
                self.add(
                    "Expected lists: ListOfParameters, ListOfMoleculeTypes, ListOfSpecies, \
                     ListOfCompartments, ListOfReactionRules, ListOfObservables",
                );
            }
            TranslateError::MalformedBlock { detail, .. } if detail.contains("ListOfComponents") => {
                self.add("A molecule without a component list was found");
                self.add("Pass --allow-bare-molecules to translate it as component-less");
            }
            TranslateError::MalformedBlock { block, .. } => {
                self.add(format!("The {block} block does not have the expected shape"));
                self.add("Element names are case sensitive (ListofMolecules, ListofBonds)");
            }
            TranslateError::Config(_) => {
                self.add("Known keys: strip_compartment_suffix, legacy_bond_states, allow_bare_molecules");
                self.add("All keys are booleans and may be omitted");
            }
            TranslateError::UnresolvedReference { .. }
            | TranslateError::InvalidBond { .. }
            | TranslateError::AmbiguousRate { .. }
            | TranslateError::MissingRate { .. } => {
                self.add("Unit-level problems are reported in the summary, not as errors");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Input appears to be from a terminal");
            self.add("Provide an INPUT file or pipe the XML to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
