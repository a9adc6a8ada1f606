use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::Args;
use crate::errors::DockerSvcMgrError;
use crate::interfaces::CommandHelper;

const COMPOSE_BIN: &str = "docker-compose";
const COMPOSE_PROJECT: &str = "config";

/// Runs compose actions for one service at a time. Paths come in at
/// construction so tests can point the rename step at a temp directory.
pub struct ServiceManager<'a> {
    app_path: PathBuf,
    compose_file: PathBuf,
    verbose: bool,
    cmd_helper: &'a dyn CommandHelper,
}

impl<'a> ServiceManager<'a> {
    pub fn new(args: &Args, cmd_helper: &'a dyn CommandHelper) -> Self {
        Self {
            app_path: args.app_path.clone(),
            compose_file: args.compose_file.clone(),
            verbose: args.verbose,
            cmd_helper,
        }
    }

    /// Rename step first, then `up -d`. The compose command is not issued
    /// when the rename step fails.
    ///
    /// # Errors
    /// Returns an error if the rename step or the compose command fails.
    pub fn start(&self, service: &str) -> Result<(), DockerSvcMgrError> {
        println!("Starting service: {service}");
        self.rename_service_file(service)?;
        self.exec_compose(&["up", "-d"], service)
    }

    /// # Errors
    /// Returns an error if the compose command fails.
    pub fn stop(&self, service: &str) -> Result<(), DockerSvcMgrError> {
        println!("Stopping service: {service}");
        self.exec_compose(&["stop"], service)
    }

    /// Stop, remove the container, then start. A failing phase halts the
    /// remaining phases; there is no rollback of phases already run.
    ///
    /// # Errors
    /// Returns the first phase's error.
    pub fn restart(&self, service: &str) -> Result<(), DockerSvcMgrError> {
        println!("Restarting service: {service}");
        self.stop(service)?;
        self.exec_compose(&["rm", "-f"], service)?;
        self.start(service)
    }

    /// Rename the first directory entry matching the service to
    /// `<service><ext>`, deleting a conflicting destination first. Entries
    /// are visited in name order, subdirectories are skipped, and no match
    /// is a silent no-op.
    ///
    /// The match keeps the shipped tool's comparison: an entry matches when
    /// its name is a prefix of `"<service>-"`, not the other way around.
    /// Callers depend on the shipped behavior, so it stays.
    ///
    /// # Errors
    /// Returns an error if the directory scan, the delete of a conflicting
    /// destination, or the rename itself fails.
    pub fn rename_service_file(&self, service: &str) -> Result<(), DockerSvcMgrError> {
        let marker = format!("{service}-");
        for entry in WalkDir::new(&self.app_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| DockerSvcMgrError::ReadDir {
                path: self.app_path.clone(),
                source: e.into(),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| DockerSvcMgrError::InvalidPath(entry.path().display().to_string()))?
                .to_string();
            if !marker.starts_with(&name) {
                continue;
            }
            let new_name = format!("{service}{}", file_ext(&name));
            let old_file = self.app_path.join(&name);
            let new_file = self.app_path.join(&new_name);
            if self.verbose {
                println!("Renaming {} to {}", old_file.display(), new_file.display());
            }
            if new_file.exists() {
                fs::remove_file(&new_file).map_err(|e| DockerSvcMgrError::RemoveFile {
                    path: new_file.clone(),
                    source: e,
                })?;
            }
            fs::rename(&old_file, &new_file).map_err(|e| DockerSvcMgrError::Rename {
                from: old_file,
                to: new_file,
                source: e,
            })?;
            return Ok(());
        }
        Ok(())
    }

    fn exec_compose(&self, action: &[&str], service: &str) -> Result<(), DockerSvcMgrError> {
        let args = self.compose_args(action, service);
        if self.verbose {
            println!("Executing: {} {}", COMPOSE_BIN, args.join(" "));
        }
        self.cmd_helper.exec_cmd(COMPOSE_BIN, args)?;
        Ok(())
    }

    /// `--compatibility -p config -f <compose-file> <action...> <service>`
    fn compose_args(&self, action: &[&str], service: &str) -> Vec<String> {
        let mut args = vec![
            "--compatibility".to_string(),
            "-p".to_string(),
            COMPOSE_PROJECT.to_string(),
            "-f".to_string(),
            self.compose_file.display().to_string(),
        ];
        args.extend(action.iter().map(|a| (*a).to_string()));
        args.push(service.to_string());
        args
    }
}

/// Extension including the leading dot, empty when the name has no dot.
/// `Path::extension` disagrees on dotfiles, and the rename step has always
/// used the last-dot rule.
fn file_ext(name: &str) -> &str {
    name.rfind('.').map_or("", |i| &name[i..])
}
