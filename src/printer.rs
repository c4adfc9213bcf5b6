use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use crate::module::{Module, ModuleMap};
use crate::task::{ExecutionStatus, Task};

/// Width of the banner printed around every command.
pub const COMMAND_WIDTH: usize = 128;

const RESET: &str = "\x1b[0m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_CYAN: &str = "\x1b[36m";
const FG_BRIGHT_BLACK: &str = "\x1b[90m";

pub fn info(message: impl AsRef<str>) {
    write_line(io::stdout(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

fn write_line(mut target: impl Write, message: &str) {
    let _ = writeln!(target, "{}", message);
}

pub fn command_header(command: &str) {
    for line in header_lines(command) {
        info(line);
    }
}

pub fn command_footer() {
    info("");
}

pub fn command_completed(command: &str) {
    info(paint(
        FG_GREEN,
        &format!("Command {} completed successfully", command),
    ));
}

pub fn command_failed(command: &str, code: i32) {
    error(paint(
        FG_RED,
        &format!("Command {} failed with code {}", command, code),
    ));
}

fn header_lines(command: &str) -> [String; 3] {
    let rule = "-".repeat(COMMAND_WIDTH);
    let message = format!("Executing command {}", command);
    let side = (COMMAND_WIDTH.saturating_sub(message.chars().count()) / 2).saturating_sub(1);
    let dashes = "-".repeat(side);
    [rule.clone(), format!("{dashes} {message} {dashes}"), rule]
}

/// One line per command: status, elapsed seconds and the command itself.
pub fn print_summary(tasks: &[Task]) {
    info("-".repeat(COMMAND_WIDTH));
    for line in summary_lines(tasks) {
        info(line);
    }
}

fn summary_lines(tasks: &[Task]) -> Vec<String> {
    let use_color = colors_enabled();
    tasks
        .iter()
        .flat_map(|task| task.commands.iter())
        .map(|command| {
            let elapsed = command
                .elapsed
                .map(|elapsed| format!("{:.2}s", elapsed.as_secs_f64()))
                .unwrap_or_else(|| "-".to_string());
            let status = command.status.to_string();
            let status = if use_color {
                format!("{}{}{}", status_color(command.status), status, RESET)
            } else {
                status
            };
            format!("{} in {} - {}", status, elapsed, command.command)
        })
        .collect()
}

fn status_color(status: ExecutionStatus) -> &'static str {
    match status {
        ExecutionStatus::Completed => FG_GREEN,
        ExecutionStatus::Failed => FG_RED,
        ExecutionStatus::Running => FG_YELLOW,
        ExecutionStatus::Prepared => FG_BRIGHT_BLACK,
    }
}

/// Modules in build order with their detected source sets.
pub fn print_modules(modules: &ModuleMap) {
    for line in module_lines(&modules.in_build_order(), colors_enabled()) {
        info(line);
    }
}

fn module_lines(modules: &[&Module], use_color: bool) -> Vec<String> {
    let name_width = modules
        .iter()
        .map(|module| module.short_name().chars().count())
        .max()
        .unwrap_or(0);

    modules
        .iter()
        .map(|module| {
            let order = module
                .order
                .map(|order| order.to_string())
                .unwrap_or_else(|| "-".to_string());
            let sets = module
                .source_sets
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            let name = format!("{:<width$}", module.short_name(), width = name_width);
            let location = module.location.display();
            if use_color {
                format!("{order:>4}  {FG_CYAN}{name}{RESET}  {sets:<22}  {FG_BRIGHT_BLACK}{location}{RESET}")
            } else {
                format!("{order:>4}  {name}  {sets:<22}  {location}")
            }
        })
        .collect()
}

fn paint(color: &str, text: &str) -> String {
    if colors_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| io::stdout().is_terminal())
}
