//! kube-secrets binary entry point.

use std::process::ExitCode;

use kube_secrets::cli::{self, Cli};
use kube_secrets::core::config::Config;
use kube_secrets::ui::{logging, output};

fn main() -> ExitCode {
    let args = Cli::parse_args();
    let verbosity = output::Verbosity::from_flags(args.quiet, args.debug);

    logging::init(args.debug);

    match cli::run(args, Config::from_env(), verbosity) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err, verbosity);
            ExitCode::FAILURE
        }
    }
}
