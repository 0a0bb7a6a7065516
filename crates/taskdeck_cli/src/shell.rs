//! Command parsing and dispatch for the task shell.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use taskdeck_core::{Task, TaskId, TaskService, TaskView};
use uuid::Uuid;

const MIN_ID_PREFIX_CHARS: usize = 4;
const SHORT_ID_CHARS: usize = 8;

/// One shell line, parsed without a leading program name.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", no_binary_name = true, disable_version_flag = true)]
#[command(about = "Personal task list shell", long_about = None)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Create a task
    Add {
        /// Task text (words are joined with single spaces)
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Flip completion
    #[command(alias = "done")]
    Toggle {
        /// Full id or unique prefix of at least 4 characters
        id: String,
    },
    /// Replace task text
    Edit {
        /// Full id or unique prefix of at least 4 characters
        id: String,
        /// New text (words are joined with single spaces)
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Move a task to the archive
    Archive { id: String },
    /// Bring a task back from the archive
    Restore { id: String },
    /// Remove a task permanently
    #[command(alias = "rm")]
    Delete { id: String },
    /// Remove completed tasks (archived ones stay)
    Clear,
    /// Show one view, or all of them
    #[command(alias = "ls")]
    List {
        #[arg(value_enum, default_value_t = ListScope::All)]
        scope: ListScope,
    },
    /// Show per-view counters
    Stats,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListScope {
    Active,
    #[value(alias = "done")]
    Completed,
    #[value(alias = "archive")]
    Archived,
    All,
}

impl ListScope {
    fn view(self) -> Option<TaskView> {
        match self {
            Self::Active => Some(TaskView::Active),
            Self::Completed => Some(TaskView::Completed),
            Self::Archived => Some(TaskView::Archived),
            Self::All => None,
        }
    }
}

fn parse_line(line: &str) -> Result<Command, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

/// Reads commands until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(service: &TaskService, input: R, mut out: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(service, command, &mut out)?,
            // Help requests and usage errors both come back as `clap::Error`.
            Err(err) => write!(out, "{}", err.render())?,
        }
    }
    out.flush()
}

fn execute<W: Write>(service: &TaskService, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Add { text } => match service.add_task(&text.join(" ")) {
            Ok(id) => writeln!(out, "added {}", short_id(id)),
            Err(err) => writeln!(out, "error: {err}"),
        },
        Command::Toggle { id } => with_task(service, &id, out, |id| service.toggle_task(id)),
        Command::Edit { id, text } => {
            let Some(id) = resolve_id(service, &id) else {
                return writeln!(out, "no such task");
            };
            match service.edit_task(id, &text.join(" ")) {
                Ok(true) => writeln!(out, "ok"),
                Ok(false) => writeln!(out, "unchanged"),
                Err(err) => writeln!(out, "error: {err}"),
            }
        }
        Command::Archive { id } => with_task(service, &id, out, |id| service.archive_task(id)),
        Command::Restore { id } => with_task(service, &id, out, |id| service.restore_task(id)),
        Command::Delete { id } => with_task(service, &id, out, |id| service.delete_task(id)),
        Command::Clear => writeln!(out, "cleared {}", service.clear_completed()),
        Command::List { scope } => match scope.view() {
            Some(view) => print_view(out, view, &service.list(view)),
            None => {
                for view in TaskView::ALL {
                    print_view(out, view, &service.list(view))?;
                }
                Ok(())
            }
        },
        Command::Stats => {
            let stats = service.stats();
            writeln!(
                out,
                "total={} active={} completed={} archived={}",
                stats.total, stats.active, stats.completed, stats.archived
            )
        }
        Command::Quit => Ok(()),
    }
}

fn with_task<W: Write>(
    service: &TaskService,
    raw: &str,
    out: &mut W,
    apply: impl FnOnce(TaskId) -> bool,
) -> io::Result<()> {
    match resolve_id(service, raw) {
        Some(id) if apply(id) => writeln!(out, "ok"),
        _ => writeln!(out, "no such task"),
    }
}

/// Accepts a full UUID or a unique prefix of at least four characters.
///
/// Returns `None` unless the id names a task currently in the list.
fn resolve_id(service: &TaskService, raw: &str) -> Option<TaskId> {
    if let Ok(id) = Uuid::parse_str(raw) {
        return service.get_task(id).map(|task| task.id);
    }
    let prefix = raw.to_ascii_lowercase();
    if prefix.chars().count() < MIN_ID_PREFIX_CHARS {
        return None;
    }
    let mut matches = service
        .all_tasks()
        .into_iter()
        .map(|task| task.id)
        .filter(|id| id.to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Some(id),
        _ => None,
    }
}

fn print_view<W: Write>(out: &mut W, view: TaskView, tasks: &[Task]) -> io::Result<()> {
    writeln!(out, "{view} ({})", tasks.len())?;
    for task in tasks {
        let mark = if task.completed { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {}  {}", short_id(task.id), task.text)?;
    }
    Ok(())
}

fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(SHORT_ID_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_line, resolve_id, run, short_id, Command, ListScope};
    use clap::error::ErrorKind;
    use taskdeck_core::TaskService;

    fn run_script(service: &TaskService, script: &str) -> String {
        let mut out = Vec::new();
        run(service, script.as_bytes(), &mut out).expect("shell should not fail on memory io");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    #[test]
    fn parse_recognizes_commands_and_arguments() {
        assert_eq!(
            parse_line("add  Buy milk ").unwrap(),
            Command::Add {
                text: vec!["Buy".to_string(), "milk".to_string()]
            }
        );
        assert_eq!(
            parse_line("edit abcd new -text").unwrap(),
            Command::Edit {
                id: "abcd".to_string(),
                text: vec!["new".to_string(), "-text".to_string()]
            }
        );
        assert_eq!(
            parse_line("list done").unwrap(),
            Command::List {
                scope: ListScope::Completed
            }
        );
        assert_eq!(
            parse_line("ls").unwrap(),
            Command::List {
                scope: ListScope::All
            }
        );
        assert_eq!(
            parse_line("rm abcd").unwrap(),
            Command::Delete {
                id: "abcd".to_string()
            }
        );
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_reports_usage_errors_and_help() {
        assert_eq!(
            parse_line("toggle").unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_line("list someday").unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse_line("fly").unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert_eq!(
            parse_line("help").unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn script_drives_full_lifecycle() {
        let service = TaskService::default();
        let output = run_script(&service, "add Buy milk\nadd   \nadd Walk dog\n");
        assert!(output.contains("error: task text must not be blank"));

        let milk = service.active_tasks()[0].id;
        let dog = service.active_tasks()[1].id;
        let script = format!(
            "toggle {}\narchive {}\nstats\nclear\nstats\nquit\nadd never\n",
            short_id(milk),
            dog
        );
        let output = run_script(&service, &script);

        assert!(output.contains("total=2 active=0 completed=1 archived=1"));
        assert!(output.contains("cleared 1"));
        assert!(output.contains("total=1 active=0 completed=0 archived=1"));
        assert_eq!(service.all_tasks().len(), 1);
    }

    #[test]
    fn unknown_or_short_ids_report_no_such_task() {
        let service = TaskService::default();
        service.add_task("only").unwrap();
        let output = run_script(&service, "toggle abc\ndelete ffffffff\nedit zzzz text\n");
        assert_eq!(output.matches("no such task").count(), 3);
        assert!(!service.active_tasks().is_empty());
    }

    #[test]
    fn unknown_full_uuid_reports_no_such_task_for_edit_and_toggle() {
        let service = TaskService::default();
        service.add_task("only").unwrap();
        let before = service.all_tasks();
        let missing = "00000000-0000-4000-8000-000000000000";

        let output = run_script(
            &service,
            &format!("edit {missing} text\ntoggle {missing}\n"),
        );
        assert_eq!(output.matches("no such task").count(), 2);
        assert!(!output.contains("unchanged"));
        assert_eq!(service.all_tasks(), before);
    }

    #[test]
    fn resolve_id_accepts_full_uuid_and_prefix() {
        let service = TaskService::default();
        let id = service.add_task("target").unwrap();
        assert_eq!(resolve_id(&service, &id.to_string()), Some(id));
        assert_eq!(resolve_id(&service, &short_id(id)), Some(id));
        assert_eq!(
            resolve_id(&service, &short_id(id).to_ascii_uppercase()),
            Some(id)
        );

        service.delete_task(id);
        assert_eq!(resolve_id(&service, &id.to_string()), None);
    }

    #[test]
    fn list_prints_each_view() {
        let service = TaskService::default();
        let id = service.add_task("render me").unwrap();
        service.toggle_task(id);
        let output = run_script(&service, "list\n");
        assert!(output.contains("active (0)"));
        assert!(output.contains("completed (1)"));
        assert!(output.contains(&format!("[x] {}  render me", short_id(id))));
        assert!(output.contains("archived (0)"));
    }

    #[test]
    fn usage_errors_are_printed_and_the_shell_keeps_going() {
        let service = TaskService::default();
        let output = run_script(&service, "fly\nadd after\n");
        assert!(output.contains("error:"));
        assert!(output.contains("added "));
        assert_eq!(service.all_tasks().len(), 1);
    }
}
