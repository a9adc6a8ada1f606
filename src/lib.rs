pub mod args;
pub mod errors;
pub mod interfaces;
pub mod server;
pub mod utils {
    pub mod cmd_utils;
    pub mod error_utils;
}

pub use args::Args;

use args::{Command, ServerAction};
use errors::DockerSvcMgrError;
use interfaces::{CommandHelper, DefaultCommandHelper};
use server::ServiceManager;

/// Run the requested server action with the real command helper.
pub fn run_app(args: &Args) -> Result<(), DockerSvcMgrError> {
    run_app_with_helpers(args, &DefaultCommandHelper)
}

/// Same as [`run_app`], but with an injected command helper so callers can
/// capture the compose invocations instead of spawning them.
pub fn run_app_with_helpers(
    args: &Args,
    cmd_helper: &dyn CommandHelper,
) -> Result<(), DockerSvcMgrError> {
    let manager = ServiceManager::new(args, cmd_helper);
    let Command::Server { action } = &args.command;
    match action {
        ServerAction::Start(opts) => manager.start(&opts.service),
        ServerAction::Stop(opts) => manager.stop(&opts.service),
        ServerAction::Restart(opts) => manager.restart(&opts.service),
    }
}
