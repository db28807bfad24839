use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use hearing_brief::dataset;
use hearing_brief::model::CountryRecord;
use hearing_brief::render_brief;
use hearing_brief::stats::{DerivedStats, TrendBand};

/// Renders two-page hearing-health country briefs from the command line.
///
/// An optional logo is picked up from the library crate's `assets/logo.png`
/// or the directory named by the `HEARING_BRIEF_ASSETS_DIR` environment
/// variable.
#[derive(Parser)]
#[command(author, version, about = "Country brief generator for listenupmom.org")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the brief for one country.
    #[command(name = "render")]
    Render {
        /// Country name, exactly as listed by `list`.
        country: String,
        /// Directory the PDF is written into.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Render briefs for every country in the table.
    #[command(name = "render-all", aliases = ["render_all", "all"])]
    RenderAll {
        /// Directory the PDFs are written into.
        #[arg(long, default_value = "briefs")]
        out: PathBuf,
    },

    /// List the countries in the table with their headline statistics.
    #[command(name = "list")]
    List {
        /// Only show countries in this WHO region.
        #[arg(long)]
        region: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { country, out } => render_one(&country, &out),
        Commands::RenderAll { out } => render_all(&out),
        Commands::List { region } => list(region.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn lookup(name: &str) -> Result<&'static CountryRecord, Box<dyn Error>> {
    dataset::find(name).ok_or_else(|| {
        format!("unknown country {name:?}; run `hearing-brief list` for the table").into()
    })
}

fn render_one(name: &str, out: &Path) -> Result<(), Box<dyn Error>> {
    let country = lookup(name)?;
    let brief = render_brief(country)?;
    let path = brief.save_to(out)?;
    println!("{}", path.display());
    Ok(())
}

fn render_all(out: &Path) -> Result<(), Box<dyn Error>> {
    for country in dataset::countries() {
        let brief = render_brief(country)?;
        brief.save_to(out)?;
    }
    println!(
        "wrote {} briefs to {}",
        dataset::countries().len(),
        out.display()
    );
    Ok(())
}

fn list(region: Option<&str>) -> Result<(), Box<dyn Error>> {
    let table = dataset::countries();
    let mut shown = 0usize;
    for country in table {
        if let Some(region) = region {
            if !country.region.name().eq_ignore_ascii_case(region) {
                continue;
            }
        }
        let stats = DerivedStats::for_country(country, table);
        let trend = TrendBand::from_eapc(country.trend);
        println!(
            "{:<32} {:<22} rank {:>3}/{}  {}",
            country.name,
            country.region.name(),
            stats.rank,
            stats.total,
            trend.label()
        );
        shown += 1;
    }
    if shown == 0 {
        return Err(format!("no countries match region {:?}", region.unwrap_or("")).into());
    }
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
