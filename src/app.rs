use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        prefix,
        regedit,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose)?;
    let ctx = AppContext::bootstrap(prefix, regedit, json)?;

    match command {
        Command::Show => commands::show::run(&ctx),
        Command::Set(args) => commands::set::run(&ctx, args),
        Command::Reset => commands::reset::run(&ctx),
        Command::Paths => commands::paths::run(&ctx),
        Command::BufferSizes => commands::buffer_sizes::run(&ctx),
    }
}
