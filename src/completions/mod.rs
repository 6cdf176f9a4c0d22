//! Shell completion support for custfind
//!
//! Completions are static: subcommands, flags, output formats and the
//! configuration keys accepted by `config get`.

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}
