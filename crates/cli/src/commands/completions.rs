//! Shell completion generation
//!
//! Prints a completion script for the requested shell to stdout.

use clap::CommandFactory;
use clap_complete::{Generator, Shell};

use super::Cli;
use crate::exit_code::ExitCode;

/// Arguments for the completions command
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generate shell completions and print to stdout
pub fn execute(args: CompletionsArgs) -> ExitCode {
    let mut cmd = Cli::command();
    print_completions(args.shell, &mut cmd);
    ExitCode::Success
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    clap_complete::generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, "simple-s3", &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_completions_include_bucket_subcommands() {
        let output = generate(Shell::Bash);
        assert!(output.contains("list-objects"));
        assert!(output.contains("delete-object"));
        assert!(output.contains("--region"));
        assert!(output.contains("--endpoint-url"));
    }

    #[test]
    fn test_completions_per_shell() {
        for (shell, marker) in [
            (Shell::Bash, "complete"),
            (Shell::Zsh, "compdef"),
            (Shell::Fish, "complete"),
            (Shell::PowerShell, "Register-ArgumentCompleter"),
        ] {
            let output = generate(shell);
            assert!(output.contains("simple-s3"), "{shell}");
            assert!(output.contains(marker), "{shell}");
        }
    }
}
