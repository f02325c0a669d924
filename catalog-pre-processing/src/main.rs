/// Card dataset enrichment tool: assigns card colours and taglines, optionally
/// rebuilds display benefits from the raw list, and fills blank benefit
/// summaries before the dataset is served to the engine.
mod enricher;
mod metadata;
mod reclassify;
mod summary;

use clap::Parser;
use enricher::CatalogEnricher;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Enrich the card dataset JSON", long_about = None)]
struct Args {
    /// Dataset JSON: an array of cards or an object with a `cards` array.
    input: PathBuf,
    /// Where to write the enriched dataset. Defaults to rewriting the input.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print per-card benefit counts and exit without writing.
    #[arg(long)]
    check: bool,
    /// Rebuild every card's `display_benefits` from its raw `benefits` first.
    #[arg(long)]
    reclassify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut enricher = CatalogEnricher::from_path(&args.input)?;

    if args.check {
        println!("Checking {}", args.input.display());
        let report = enricher.check();
        println!("{} cards, {} with nothing to display", report.cards, report.empty_cards.len());
        for name in &report.empty_cards {
            println!("  - {}", name);
        }
        return Ok(());
    }

    if args.reclassify {
        let report = enricher.reclassify();
        println!(
            "Reclassified {} cards: {} display benefits kept, {} dropped",
            report.cards, report.kept, report.dropped
        );
    }

    let report = enricher.enrich();
    let output = args.output.unwrap_or(args.input);
    enricher.write(&output)?;

    println!(
        "Done: {} cards enriched, {} summaries filled -> {}",
        report.cards,
        report.summaries_filled,
        output.display()
    );
    if !report.empty_cards.is_empty() {
        println!("Cards with nothing to display:");
        for name in &report.empty_cards {
            println!("  - {}", name);
        }
    }
    Ok(())
}
