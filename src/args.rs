use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub fn args_checks() -> Result<Args, clap::Error> {
    Args::try_parse()
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory scanned for a service file to rename before start
    #[arg(long, value_name = "PATH", default_value = "/docker/app")]
    pub app_path: PathBuf,
    /// Compose project file handed to docker-compose via -f
    #[arg(
        long,
        value_name = "FILE",
        default_value = "/docker/config/docker-compose-config.yaml"
    )]
    pub compose_file: PathBuf,
    /// Print extra stuff
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage compose services on this host
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },
}

#[derive(Subcommand)]
pub enum ServerAction {
    /// Start the specified service
    Start(ServiceOpts),
    /// Stop the specified service
    Stop(ServiceOpts),
    /// Stop, remove the container, then start the specified service
    Restart(ServiceOpts),
}

#[derive(clap::Args)]
pub struct ServiceOpts {
    /// Name of the service (required)
    #[arg(short = 's', long)]
    pub service: String,
}

impl ServerAction {
    pub fn service(&self) -> &str {
        match self {
            ServerAction::Start(opts) | ServerAction::Stop(opts) | ServerAction::Restart(opts) => {
                &opts.service
            }
        }
    }
}

impl Args {
    /// Validate what clap's required-flag check can't catch
    pub fn validate(&self) -> Result<(), String> {
        let Command::Server { action } = &self.command;
        if action.service().is_empty() {
            return Err("service name must not be empty".to_string());
        }
        Ok(())
    }
}
