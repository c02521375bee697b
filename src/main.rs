use std::process::ExitCode;

use touchcal::cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    trace_panics();

    let cli = match Cli::try_from_env() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` end up here as well
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    touchcal::init_logging(&cli.log_level);

    if let Err(err) = touchcal::start(&cli) {
        error!("{:#}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn trace_panics() {
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing_panic::panic_hook(panic_info);
        prev_hook(panic_info);
    }));
}
