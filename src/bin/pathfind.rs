use anyhow::Result;
use clap::Parser;
use json_pathfind::config::SearchConfig;
use json_pathfind::document::{load_document, parse_target};
use json_pathfind::finder::PathFinder;
use json_pathfind::path::Path;

#[derive(Parser)]
#[command(author, version, about = "Find every path in a JSON document where a value occurs", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    PATHFIND_DOCUMENT   Document to search when --file is not given [default: playlist.json]
    PATHFIND_SEPARATOR  Separator between path segments [default: .]
    RUST_LOG            Log filter (e.g. json_pathfind=debug)

Both PATHFIND_* variables may also be set in a .env file.

EXAMPLES:
    pathfind UCUl32_nMbQndCK39ra63E9Q              # Search playlist.json for a string
    pathfind -f data.json needle                   # Substring matches included
    pathfind -f data.json --literal 42             # Search for the number 42
    pathfind -f data.json --json needle            # Print paths as JSON arrays
    pathfind -f data.json -s / needle              # Join segments with '/'")]
struct Args {
    /// Value to search for (a string unless --literal is given)
    target: String,

    /// JSON document to search
    #[arg(short, long)]
    file: Option<String>,

    /// Separator between path segments
    #[arg(short, long)]
    separator: Option<String>,

    /// Parse TARGET as a JSON literal (number, bool, null, array, object)
    #[arg(long)]
    literal: bool,

    /// Print matches as a JSON array of paths
    #[arg(long, conflicts_with = "count")]
    json: bool,

    /// Print only the number of matches
    #[arg(long)]
    count: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("json_pathfind=debug,pathfind=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = SearchConfig::resolve(args.file, args.separator);
    tracing::debug!(document = %config.document, separator = %config.separator, "resolved config");

    let data = load_document(&config.document)?;
    let target = parse_target(&args.target, args.literal)?;
    let finder = PathFinder::new(&target);

    if args.count {
        println!("{}", finder.count_in(&data));
        return Ok(());
    }

    let paths: Vec<Path> = finder.find_in(&data);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &paths {
            println!("{}", path.join(&config.separator));
        }
    }

    Ok(())
}
