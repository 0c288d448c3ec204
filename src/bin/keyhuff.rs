use clap::Parser;
use keyhuff::report::{render, ReportConfig};
use keyhuff::{Codebook, Symbol};
use log::{debug, info};

/// Build a Huffman code for a keyword table and compare it with a fixed-width code.
#[derive(Parser, Debug)]
#[command(name = "keyhuff", version, about)]
struct Cli {
    /// Keywords with their occurrence counts, as `name=weight`.
    #[arg(required = true, value_parser = parse_symbol)]
    symbols: Vec<Symbol>,

    /// Maximum number of codewords to list.
    #[arg(long, default_value_t = ReportConfig::default().max_display)]
    max_display: usize,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_symbol(arg: &str) -> Result<Symbol, String> {
    let (name, weight) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected name=weight, got {arg:?}"))?;
    let weight: u64 = weight
        .parse()
        .map_err(|e| format!("invalid weight in {arg:?}: {e}"))?;
    if weight == 0 {
        return Err(format!("weight must be positive in {arg:?}"));
    }
    Ok(Symbol::new(name, weight))
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    info!("building code for {} symbols", cli.symbols.len());
    let book = match Codebook::new(&cli.symbols) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    debug!(
        "tree: weight={} leaves={} internal={} depth={}",
        book.tree().weight(),
        book.tree().leaf_count(),
        book.tree().internal_count(),
        book.tree().depth()
    );

    let config = ReportConfig {
        max_display: cli.max_display,
    };
    print!("{}", render(&book, &config));
}
