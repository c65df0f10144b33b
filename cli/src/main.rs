mod args;
mod global_settings;
mod loader;
mod tables;
mod timeline_view;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::loader::{Resolver, load_events};
use crate::timeline_view::{active_view, next_view, timeline_view};
use anyhow::{Context, Result};
use console::Term;

fn load(settings: &GlobalSettings) -> Result<Resolver> {
    let path = settings
        .events_file
        .as_ref()
        .context("--events FILE is required")?;
    let mut resolver = load_events(path, settings)?;

    // Every query is made at or after the reference time
    resolver.expire_before(&settings.reftime);
    Ok(resolver)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let mut cli = build_cli();
    let args = cli.clone().get_matches();
    let settings = GlobalSettings::new(&args)?;

    match args.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) = sub
                .get_one::<clap_complete_command::Shell>("shell")
                .cloned()
            {
                shell.generate(&mut cli, &mut std::io::stdout());
            }
        }
        Some(("active", _)) => {
            let resolver = load(&settings)?;
            println!("{}", active_view(&resolver, &settings.reftime));
        }
        Some(("next", _)) => {
            let resolver = load(&settings)?;
            println!("{}", next_view(&resolver, &settings.reftime));
        }
        Some(("timeline", sub)) => {
            let resolver = load(&settings)?;
            let output = timeline_view(
                &resolver,
                &settings.reftime,
                crate::timeline_view::Settings::new(sub, &settings.table),
                Term::stdout().size().1 as usize,
            );
            print!("{}", output);
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command {cmd}"),
        None => {}
    }

    Ok(())
}
