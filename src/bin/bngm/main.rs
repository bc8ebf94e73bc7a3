use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod logging;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let common = cli.command.common();

    logging::init(common.quiet, common.verbose);

    let ctx = display::Context::detect().with_quiet(common.quiet);
    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
