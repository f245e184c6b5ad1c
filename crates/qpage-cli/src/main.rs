use clap::Parser;
use cli::{Args, Commands};
use error::CliResult;
use logging::setup_logging;
use qpage_config::config::{config_path, generate_default_config, Config};
use render::{print_rendered, render, RenderRequest};
use tracing::{debug, info};
use utils::set_color;

mod cli;
mod error;
mod logging;
mod render;
mod utils;

fn load_config(args: &Args) -> CliResult<Config> {
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::new()?,
    };
    debug!("active configuration: {config:?}");
    Ok(config)
}

fn handle_config(args: &Args, default: bool, generate: bool) -> CliResult<()> {
    if generate {
        let path = args
            .config
            .as_ref()
            .map(Into::into)
            .unwrap_or_else(config_path);
        generate_default_config(path)?;
        return Ok(());
    }

    let config = if default {
        Config::default_config()
    } else {
        load_config(args)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        info!("{}", config.to_annotated_document()?);
    }
    Ok(())
}

fn handle_cli() -> CliResult<()> {
    let args = Args::parse();

    setup_logging(&args);
    set_color(!args.no_color);

    match args.command {
        Commands::Render {
            ref collection,
            ref variable,
            ref query,
            ref sort,
            page,
            limit,
            per_page,
            ref return_value,
        } => {
            let config = load_config(&args)?;
            let request = RenderRequest {
                collection: collection.clone(),
                variable: variable.clone(),
                query: query.clone(),
                sort: sort.clone(),
                page,
                limit,
                per_page,
                return_value: return_value.clone(),
            };
            let rendered = render(&config, &request)?;
            print_rendered(&rendered, args.json)?;
        }
        Commands::Config {
            default,
            generate,
        } => handle_config(&args, default, generate)?,
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
