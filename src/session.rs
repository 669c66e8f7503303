use crate::config::IttConfig;
use crate::console::{ConsoleReporter, Prompt};
use crate::host::ScriptHost;
use crate::remote::RemoteSource;

/// The collaborators one command run talks to.
pub struct Session<'a> {
    pub config: &'a IttConfig,
    pub remote: &'a dyn RemoteSource,
    pub host: &'a dyn ScriptHost,
    pub reporter: &'a dyn ConsoleReporter,
    pub prompt: &'a mut dyn Prompt,
}
