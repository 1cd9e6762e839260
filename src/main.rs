use anyhow::Result;
use registration_form::client::RegistrationClient;
use registration_form::config::Config;
use registration_form::form::{FieldChange, FormController};
use registration_form::i18n::StaticTextTable;
use registration_form::render::RenderedForm;
use registration_form::schema::UserSchema;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const USAGE: &str = "Commands:
  username <text>      set the username
  language <value>     set the favorite language (javascript, rust)
  food <value>         set the favorite food (pizza, spaghetti, broccoli, or empty)
  agree | disagree     tick or clear the terms checkbox
  toggle               switch between English and Spanish
  submit               submit the form
  show                 print the form
  help                 print this help
  quit                 exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Change(FieldChange),
    Toggle,
    Submit,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
    let rest = rest.trim_end_matches(['\r', '\n']);

    let command = match word {
        "username" => Command::Change(FieldChange::Username(rest.to_string())),
        "language" => Command::Change(FieldChange::FavLanguage(rest.trim().to_string())),
        "food" => Command::Change(FieldChange::FavFood(rest.trim().to_string())),
        "agree" => Command::Change(FieldChange::Agreement(true)),
        "disagree" => Command::Change(FieldChange::Agreement(false)),
        "toggle" => Command::Toggle,
        "submit" => Command::Submit,
        "show" | "" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn print_form(controller: &FormController) {
    let form = RenderedForm::render(controller.state(), controller.language(), &StaticTextTable);
    println!("\n{}\n", form);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registration_form=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let config = Config::from_env()?.with_language_arg(arg.as_deref())?;
    let client = RegistrationClient::from_config(&config)?;
    info!(
        "Starting registration form (language: {}, endpoint: {})",
        config.language,
        client.endpoint()
    );

    let mut controller =
        FormController::new(config.language, Arc::new(UserSchema), Arc::new(client));
    controller.settle().await;

    println!("{}", USAGE);
    print_form(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(Command::Change(change)) => controller.on_change(change),
                    Some(Command::Toggle) => {
                        controller.toggle_language();
                        print_form(&controller);
                    }
                    Some(Command::Submit) => {
                        if !controller.on_submit() {
                            println!("Submit is disabled until the form is valid.");
                        }
                    }
                    Some(Command::Show) => print_form(&controller),
                    Some(Command::Help) => println!("{}", USAGE),
                    Some(Command::Quit) => break,
                    None => println!("Unknown command. Type 'help' for a list."),
                }
            }
            applied = controller.next_event(), if controller.pending() > 0 => {
                if applied && controller.pending() == 0 {
                    print_form(&controller);
                }
            }
        }
    }

    info!("Bye");
    Ok(())
}
