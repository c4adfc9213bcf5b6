use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

/// Writes the completion script for `shell` to stdout.
pub fn print(shell: Shell) {
    let mut stdout = io::stdout();
    write(shell, &mut stdout);
    let _ = stdout.flush();
}

pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_task_flags() {
        let mut buffer = Vec::new();
        write(Shell::Bash, &mut buffer);
        let script = String::from_utf8(buffer).expect("utf8 script");
        assert!(script.contains("modbuild"));
        assert!(script.contains("--test-unit"));
        assert!(script.contains("--suite"));
    }
}
