use mockall::automock;

/// Interface for command-related functions to facilitate testing
#[automock]
pub trait CommandHelper {
    fn exec_cmd(&self, cmd: &str, args: Vec<String>) -> Result<(), Box<dyn std::error::Error>>;
}

/// Default implementation of CommandHelper that uses the actual functions
pub struct DefaultCommandHelper;

impl CommandHelper for DefaultCommandHelper {
    fn exec_cmd(&self, cmd: &str, args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        // Convert Vec<String> to Vec<&str> for compatibility with the helper
        let args_ref: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        crate::utils::cmd_utils::exec_cmd(cmd, &args_ref)
    }
}
