mod plan;

use clap::{CommandFactory, FromArgMatches};

use crate::args::ProbeArgs;
use crate::config::{load_config, resolve_settings};
use crate::error::AppResult;
use crate::system::console::Console;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: ProbeArgs) -> AppResult<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, config.as_ref())?;
    let console = Console::new(args.no_color);

    let plan = build_plan(args.command, &settings);
    execute_plan(&plan, &settings, &console).await
}
