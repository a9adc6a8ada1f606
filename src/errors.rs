use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DockerSvcMgrError {
    #[error("read dir {} error: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("remove file {} error: {source}", path.display())]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rename {} to {} error: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Command execution error: {0}")]
    CommandExecution(#[from] Box<dyn std::error::Error>),
}
