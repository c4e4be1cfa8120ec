use anyhow::{Context, Result};
use colored::Colorize;
use std::io::IsTerminal;

use versepager::cli::{self, Cli, EnvOverrides};
use versepager::config::{load_config, load_config_from};
use versepager::{render, MemoryCorpus, RenderStatus};

fn main() {
    if let Err(e) = run(cli::parse_args()) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    cli::init_logging(args.verbosity);

    let file_config = match args.config {
        Some(ref path) => load_config_from(path)?,
        None => load_config(),
    };

    let config = cli::build_render_config(
        &args,
        &file_config,
        &EnvOverrides::from_env(),
        std::io::stdout().is_terminal(),
    )?;
    log::debug!("Render config: {:?}", config);

    let corpus = MemoryCorpus::from_path(&args.corpus)
        .with_context(|| format!("Failed to load corpus {}", args.corpus.display()))?;
    let query = cli::build_selection(&corpus, args.book.as_deref(), args.search.as_deref());

    if render(&corpus, &query, &config)? == RenderStatus::Empty {
        eprintln!("{}", "No verses matched.".yellow());
    }
    Ok(())
}
