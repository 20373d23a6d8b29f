//! Headless preview of the contacts page.
//!
//! # Responsibility
//! - Mount the app on an in-memory document and replay scripted clicks.
//! - Print the resulting page as HTML, or the store as JSON.
//!
//! # Invariants
//! - Ids are sequential (`c1`, `c2`, ...) so output is reproducible.

use clap::Parser;
use contacts_core::{
    core_version, default_log_level, init_logging, Action, AppConfig, ContactId, ContactsApp,
    Document, LogLevel, MemoryDocument, Outcome, SequentialIdGenerator,
};
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "contacts_cli", version, about = "Render the contacts page headlessly")]
struct Cli {
    /// Id of the host element to mount into.
    #[arg(long, default_value = contacts_core::config::DEFAULT_ROOT_ID)]
    root_id: String,

    /// Heading text.
    #[arg(long, default_value = contacts_core::config::DEFAULT_TITLE)]
    title: String,

    /// Print the store as JSON instead of the rendered HTML.
    #[arg(long)]
    json: bool,

    /// Log level for the file logger: trace|debug|info|warn|error.
    #[arg(long, requires = "log_dir")]
    log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    /// Commands to replay: `add:NAME[:EMAIL]` or `remove:ID`.
    commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add { name: String, email: String },
    Remove(ContactId),
}

impl FromStr for Command {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(':') {
            Some(("add", rest)) => {
                let (name, email) = rest.split_once(':').unwrap_or((rest, ""));
                Ok(Self::Add {
                    name: name.to_string(),
                    email: email.to_string(),
                })
            }
            Some(("remove", id)) if !id.is_empty() => Ok(Self::Remove(ContactId::from(id))),
            _ => Err(format!(
                "invalid command `{value}`; expected add:NAME[:EMAIL] or remove:ID"
            )),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.unwrap_or_else(default_log_level);
        init_logging(level.as_str(), log_dir)?;
    }
    log::info!("event=cli_start module=cli status=ok version={}", core_version());

    let config = AppConfig::default()
        .with_root_id(cli.root_id.clone())
        .with_title(cli.title.clone());
    let mut app = ContactsApp::mount_with_generator(
        MemoryDocument::with_root(&cli.root_id),
        config,
        SequentialIdGenerator::default(),
    )?;

    for command in cli.commands {
        let outcome = replay(&mut app, command)?;
        log::debug!("event=command_replayed module=cli status=ok outcome={outcome:?}");
    }

    if cli.json {
        return Ok(serde_json::to_string_pretty(app.store().contacts())?);
    }
    let root = app
        .document()
        .element_by_id(&cli.root_id)
        .ok_or("root element disappeared after mount")?;
    Ok(app.document().to_html(root)?)
}

/// Types into the form or clicks a delete button, then dispatches the click.
fn replay(
    app: &mut ContactsApp<MemoryDocument, SequentialIdGenerator>,
    command: Command,
) -> Result<Outcome, Box<dyn Error>> {
    let view = app.view().clone();
    let document = app.document();
    let target = match command {
        Command::Add { name, email } => {
            document.set_input_value(&view.name_input, &name)?;
            document.set_input_value(&view.email_input, &email)?;
            view.add_button
        }
        Command::Remove(id) => {
            let button = document
                .find_by_class(view.contacts, "remove")?
                .into_iter()
                .find(|button| {
                    matches!(
                        document.attribute(*button, contacts_core::CONTACT_ID_ATTRIBUTE),
                        Ok(Some(value)) if value == id.as_str()
                    )
                });
            match button {
                Some(button) => button,
                // No row to click; dispatch directly so the no-op is still observable.
                None => return Ok(app.dispatch(Action::Remove(id))?),
            }
        }
    };

    match document.click(target)? {
        Some(action) => Ok(app.dispatch(action)?),
        None => Ok(Outcome::Ignored),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Command};
    use clap::Parser;
    use contacts_core::{ContactId, LogLevel};

    #[test]
    fn command_parses_add_and_remove() {
        assert_eq!(
            "add:Carol".parse::<Command>().unwrap(),
            Command::Add {
                name: "Carol".to_string(),
                email: String::new()
            }
        );
        assert_eq!(
            "add:Dan:dan@example.com".parse::<Command>().unwrap(),
            Command::Add {
                name: "Dan".to_string(),
                email: "dan@example.com".to_string()
            }
        );
        assert_eq!(
            "remove:8mopn7".parse::<Command>().unwrap(),
            Command::Remove(ContactId::from("8mopn7"))
        );
        assert!("remove:".parse::<Command>().is_err());
        assert!("edit:x".parse::<Command>().is_err());
    }

    #[test]
    fn log_level_needs_log_dir_and_a_known_value() {
        assert!(Cli::try_parse_from(["contacts_cli", "--log-level", "debug"]).is_err());
        assert!(Cli::try_parse_from([
            "contacts_cli",
            "--log-level",
            "loud",
            "--log-dir",
            "/tmp/contacts-logs"
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "contacts_cli",
            "--log-level",
            "WARN",
            "--log-dir",
            "/tmp/contacts-logs",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
    }

    #[test]
    fn run_replays_commands_into_json() {
        let cli = Cli::parse_from(["contacts_cli", "--json", "add:Carol", "remove:8mopn7"]);
        let output = run(cli).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Alice", "Paul", "Carol"]);
        assert_eq!(json[2]["id"], "c1");
        assert!(json[2]["email"].is_null());
    }

    #[test]
    fn run_renders_html_with_custom_title() {
        let cli = Cli::parse_from(["contacts_cli", "--title", "People", "add:"]);
        let output = run(cli).unwrap();
        assert!(output.starts_with("<div id=\"root\"><div class=\"app\"><h1 class=\"title\">People</h1>"));
        assert_eq!(output.matches("class=\"contact\"").count(), 3);
    }
}
