//! Shell completions command.

use std::io::Write as _;

use clap::CommandFactory as _;
use clap_complete::{Generator, Shell};

use crate::cli::Cli;

/// Writes completions for `shell` to stdout.
pub fn generate_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

fn write_completions<G: Generator>(generator: G, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    clap_complete::generate(generator, &mut cmd, bin_name, out);
    out.flush().ok();
}
