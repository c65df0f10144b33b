use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

pub(crate) fn build_cli() -> Command {
    Command::new("overlap")
        .version("0.1")
        .about("Find which of several overlapping events is active")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("active")
                .about("Show the event active at the reference time"),
        )
        .subcommand(
            Command::new("next")
                .about("Show when the active event changes next"),
        )
        .subcommand(
            Command::new("timeline")
                .about("Show all upcoming changes of the active event")
                .args(crate::timeline_view::Settings::cli()),
        )
        .subcommand(
            // Use    eval "$(overlap completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
