use crate::cli::{Command, HELP};
use crate::command_handlers::{install, launch, tweak};
use crate::config::EmptyAction;
use crate::session::Session;
use anyhow::Result;

pub fn dispatch(cmd: Command, session: &mut Session) -> Result<()> {
    match cmd {
        Command::Install { names, auto_confirm } => install::run_install(&names, auto_confirm, session),
        Command::Tweak { names, auto_confirm } => tweak::run_tweak(&names, auto_confirm, session),
        Command::Quick { file } => launch::quick_install(file.as_deref(), session),
        Command::Help => {
            session.reporter.info(HELP);
            Ok(())
        }
        Command::Empty => match session.config.on_empty {
            EmptyAction::Bootstrap => launch::bootstrap(session),
            EmptyAction::Noop => {
                session.reporter.info("[i] Nothing to do. Use 'itt -h' for help.");
                Ok(())
            }
        },
        Command::Unknown(token) => {
            tracing::debug!("unrecognized command token {token:?}");
            session.reporter.error("[x] Unknown command. Use 'itt -h'.");
            Ok(())
        }
    }
}
