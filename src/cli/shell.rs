//! Interactive session. Every input line is one turn, run inside the
//! recovery boundary; state lives until `quit` or end of input.

use crate::cli::commands::{parse_status, parse_switch};
use crate::config::Config;
use crate::core::Session;
use crate::core::boundary::RecoveryBoundary;
use crate::core::deletion::DeletionState;
use crate::errors::{AppError, AppResult};
use crate::ui::cabinet::{render_cabinet, render_categories, render_detail, render_table};
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::notify::print_notice;
use crate::ui::{Notifier, TerminalNotifier};
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  list                      show the visible prescriptions
  cabinet                   draw the visible prescriptions on shelves
  category <name|All>       filter by category
  status <active|inactive|all>
                            filter by status
  reset                     clear both filters
  categories                list the selectable categories
  show <id>                 open the detail view
  close                     close the detail view
  auto-refill <on|off>      toggle auto-refill on the open prescription
  delete [<id>]             ask to delete a prescription (default: the open one)
  confirm | cancel          answer a pending delete
  alerts                    show alerts that are still open
  dismiss                   dismiss open alerts
  log                       show what changed in this session
  restart                   reload the cabinet from scratch
  help                      this text
  quit | exit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Cabinet,
    Category(String),
    Status(String),
    Reset,
    Categories,
    Show(String),
    Close,
    AutoRefill(String),
    Delete(Option<String>),
    Confirm,
    Cancel,
    Alerts,
    Dismiss,
    Log,
    Restart,
    Help,
    Quit,
}

impl ShellCommand {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let arg = |what: &str| -> AppResult<String> {
            if rest.is_empty() {
                Err(AppError::InvalidCommand(format!("{word} needs {what}")))
            } else {
                Ok(rest.to_string())
            }
        };

        let cmd = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "cabinet" => Self::Cabinet,
            "category" => Self::Category(arg("a category")?),
            "status" => Self::Status(arg("a status")?),
            "reset" => Self::Reset,
            "categories" => Self::Categories,
            "show" | "open" => Self::Show(arg("an id")?),
            "close" => Self::Close,
            "auto-refill" | "autorefill" => Self::AutoRefill(arg("on or off")?),
            "delete" | "del" => Self::Delete((!rest.is_empty()).then(|| rest.to_string())),
            "confirm" | "y" | "yes" => Self::Confirm,
            "cancel" | "n" | "no" => Self::Cancel,
            "alerts" => Self::Alerts,
            "dismiss" => Self::Dismiss,
            "log" => Self::Log,
            "restart" | "reload" => Self::Restart,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(AppError::InvalidCommand(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    run_shell(cfg, stdin.lock())
}

pub fn run_shell(cfg: &Config, input: impl BufRead) -> AppResult<()> {
    let mut boundary = RecoveryBoundary::new();

    header("medcabinet");
    let mut session = Session::new(cfg.clone(), TerminalNotifier::new())?;
    print!("{}", render_table(&session.visible()?, cfg));
    info("Type `help` for the list of commands.");
    prompt(&session);

    for line in input.lines() {
        let line = line?;
        let cmd = match ShellCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => {
                prompt(&session);
                continue;
            }
            Err(e) => {
                error(&e);
                prompt(&session);
                continue;
            }
        };
        debug!(?cmd, "shell turn");

        match cmd {
            ShellCommand::Quit => break,
            ShellCommand::Restart => {
                session = Session::new(cfg.clone(), TerminalNotifier::new())?;
                boundary.restart();
                debug!("session rebuilt");
                success("Cabinet reloaded.");
                print!("{}", render_table(&session.visible()?, cfg));
            }
            _ if boundary.is_crashed() => {
                warning("The cabinet needs a restart. Type `restart` or `quit`.");
            }
            cmd => {
                boundary.run(|| execute(&mut session, cfg, cmd));
            }
        }
        prompt(&session);
    }

    println!();
    info("Bye.");
    Ok(())
}

fn execute(
    session: &mut Session<TerminalNotifier>,
    cfg: &Config,
    cmd: ShellCommand,
) -> AppResult<()> {
    match cmd {
        ShellCommand::List => print!("{}", render_table(&session.visible()?, cfg)),
        ShellCommand::Cabinet => print!("{}", render_cabinet(&session.visible()?, cfg)),
        ShellCommand::Category(name) => {
            session.filter_category(&name)?;
            print!("{}", render_table(&session.visible()?, cfg));
        }
        ShellCommand::Status(s) => {
            session.filter_status(parse_status(&s)?)?;
            print!("{}", render_table(&session.visible()?, cfg));
        }
        ShellCommand::Reset => {
            session.reset_filters()?;
            info("Filters reset.");
            print!("{}", render_table(&session.visible()?, cfg));
        }
        ShellCommand::Categories => {
            let filters = session.filters();
            print!(
                "{}",
                render_categories(filters.categories(), &filters.category().to_string())
            );
        }
        ShellCommand::Show(id) => {
            let p = session.show(&id)?;
            print!("{}", render_detail(&p, cfg));
        }
        ShellCommand::Close => session.close(),
        ShellCommand::AutoRefill(state) => {
            session.set_auto_refill(parse_switch(&state)?)?;
            if let Some(p) = session.selected()? {
                print!("{}", render_detail(&p, cfg));
            }
        }
        ShellCommand::Delete(id) => {
            let id = session.request_delete(id.as_deref())?;
            let what = match session.store().find(&id)? {
                Some(p) => p.name,
                None => format!("prescription #{id}"),
            };
            warning(format!(
                "Are you sure? This will permanently delete {what}. This action cannot be undone."
            ));
            info("Type `confirm` to delete or `cancel` to keep it.");
        }
        ShellCommand::Confirm => {
            // outcome already reported through the notifier
            session.confirm_delete()?;
        }
        ShellCommand::Cancel => {
            session.cancel_delete()?;
            info("Deletion cancelled.");
        }
        ShellCommand::Alerts => {
            let open = session.notifier().sticky();
            if open.is_empty() {
                info("No open alerts.");
            }
            for notice in open {
                print_notice(notice);
            }
        }
        ShellCommand::Dismiss => {
            let n = session.dismiss_alerts();
            info(format!("{n} alert(s) dismissed."));
        }
        ShellCommand::Log => print!("{}", session.log().render()),
        ShellCommand::Help => print!("{HELP}"),
        ShellCommand::Quit | ShellCommand::Restart => {}
    }
    Ok(())
}

fn prompt(session: &Session<TerminalNotifier>) {
    let filters = session.filters();
    let mut p = format!(
        "\n[{} | {}]",
        filters.category(),
        filters.status().label()
    );
    if let Some(id) = session.detail().selected_id() {
        p.push_str(&format!(" #{id}"));
    }
    if let DeletionState::PendingConfirmation { id } = session.deletion().state() {
        p.push_str(&format!(" delete #{id}?"));
    }
    print!("{p} > ");
    let _ = io::stdout().flush();
}
