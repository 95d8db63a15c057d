use clap::{Parser, Subcommand};
use selene_chart::{ChartConfig, PhaseBand, PhasePalette, Rgba, sample_bands};
use selene_phase::{
    CYCLE_LENGTH_DAYS, Hemisphere, Phase, PhaseResult, boundary_table, try_calculate, utc_now,
    visibility,
};
use selene_time::UtcTime;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selene", about = "Moon phase calculator")]
struct Cli {
    /// Log band bookkeeping to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon phase at a UTC moment
    Phase {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Observer hemisphere: northern or southern
        #[arg(long, default_value = "northern")]
        hemisphere: String,
    },
    /// Moon phase right now
    Now {
        /// Observer hemisphere: northern or southern
        #[arg(long, default_value = "northern")]
        hemisphere: String,
    },
    /// Print the phase boundary table
    Table,
    /// Visibility percentage for a days-into-cycle offset
    Visibility {
        /// Days into the cycle (0 to 29.53)
        days: f64,
    },
    /// Group evenly sampled moments into phase bands
    Bands {
        /// First sample, UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        start: String,
        /// Last sample bound, UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        end: String,
        /// Hours between samples
        #[arg(long, default_value = "24")]
        step_hours: f64,
        /// Observer hemisphere: northern or southern
        #[arg(long, default_value = "northern")]
        hemisphere: String,
        /// Alpha applied to every phase colour (1-255)
        #[arg(long, default_value = "100", value_parser = clap::value_parser!(u8).range(1..))]
        alpha: u8,
        /// Override a phase colour, e.g. --color "Full Moon=#1432a8" (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "selene=debug" } else { "selene=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_utc(s: &str) -> UtcTime {
    s.parse().unwrap_or_else(|e| exit_with(e))
}

fn parse_hemisphere(s: &str) -> Hemisphere {
    s.parse().unwrap_or_else(|e: String| exit_with(e))
}

/// Parse `NAME=COLOR` overrides onto the palette.
fn apply_color_overrides(palette: &mut PhasePalette, overrides: &[String]) {
    for entry in overrides {
        let Some((name, color)) = entry.split_once('=') else {
            exit_with(format!("expected NAME=COLOR, got {entry}"));
        };
        let phase: Phase = name.parse().unwrap_or_else(|e| exit_with(e));
        let color: Rgba = color.parse().unwrap_or_else(|e| exit_with(e));
        palette.set(phase, color);
    }
}

fn trend(phase: Phase) -> &'static str {
    if phase.is_waxing() {
        "waxing"
    } else if phase.is_waning() {
        "waning"
    } else {
        "turning"
    }
}

fn print_result(r: &PhaseResult) {
    println!("{} {} ({} hemisphere)", r.symbol, r.name(), r.hemisphere);
    println!("  Moment:          {}", r.moment);
    println!("  Trend:           {}", trend(r.phase));
    println!("  Days into cycle: {:.2} / {CYCLE_LENGTH_DAYS}", r.days_into_cycle);
    println!("  Visibility:      {:.1}%", r.visibility());
}

fn print_band(band: &PhaseBand) {
    println!(
        "{:<16} {} {:<16} {} .. {}  ({} samples, {})",
        band.id,
        band.symbol,
        band.phase.name(),
        band.start,
        band.end,
        band.samples,
        band.color
    );
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Phase { date, hemisphere } => {
            let utc = parse_utc(&date);
            let hemisphere = parse_hemisphere(&hemisphere);
            match try_calculate(&utc, hemisphere) {
                Ok(r) => print_result(&r),
                Err(e) => exit_with(e),
            }
        }

        Commands::Now { hemisphere } => {
            let hemisphere = parse_hemisphere(&hemisphere);
            match utc_now(hemisphere) {
                Ok(r) => print_result(&r),
                Err(e) => exit_with(e),
            }
        }

        Commands::Table => {
            for (i, seg) in boundary_table().segments().iter().enumerate() {
                println!(
                    "{i}  {:<16} {:>7.4} .. {:>7.4} days  {} / {}",
                    seg.name(),
                    seg.start,
                    seg.end,
                    Hemisphere::Northern.symbol(i),
                    Hemisphere::Southern.symbol(i)
                );
            }
        }

        Commands::Visibility { days } => {
            if !(0.0..=CYCLE_LENGTH_DAYS).contains(&days) {
                exit_with(format!("days must be within 0..={CYCLE_LENGTH_DAYS}"));
            }
            println!("{:.2}%", visibility(days));
        }

        Commands::Bands {
            start,
            end,
            step_hours,
            hemisphere,
            alpha,
            colors,
        } => {
            let start = parse_utc(&start);
            let end = parse_utc(&end);
            let hemisphere = parse_hemisphere(&hemisphere);
            let mut palette = PhasePalette::default().with_alpha(alpha);
            apply_color_overrides(&mut palette, &colors);
            let config = ChartConfig::new(hemisphere, palette);
            debug!(%start, %end, step_hours, %hemisphere, "sampling phase bands");

            match sample_bands(config, &start, &end, step_hours) {
                Ok(bands) => {
                    for band in &bands {
                        print_band(band);
                    }
                    println!("{} bands", bands.len());
                }
                Err(e) => exit_with(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands_alpha(args: &[&str]) -> Result<u8, clap::Error> {
        let base = ["selene", "bands", "--start", "2024-01-01", "--end", "2024-02-01"];
        let cli = Cli::try_parse_from(base.iter().chain(args).copied())?;
        match cli.command {
            Commands::Bands { alpha, .. } => Ok(alpha),
            _ => unreachable!(),
        }
    }

    #[test]
    fn alpha_defaults_to_100() {
        assert_eq!(bands_alpha(&[]).unwrap(), 100);
    }

    #[test]
    fn alpha_accepts_1_to_255() {
        assert_eq!(bands_alpha(&["--alpha", "1"]).unwrap(), 1);
        assert_eq!(bands_alpha(&["--alpha", "255"]).unwrap(), 255);
    }

    #[test]
    fn alpha_rejects_zero() {
        assert!(bands_alpha(&["--alpha", "0"]).is_err());
        assert!(bands_alpha(&["--alpha", "256"]).is_err());
    }

    #[test]
    fn trend_follows_phase() {
        assert_eq!(trend(Phase::WaxingCrescent), "waxing");
        assert_eq!(trend(Phase::WaxingGibbous), "waxing");
        assert_eq!(trend(Phase::WaningGibbous), "waning");
        assert_eq!(trend(Phase::ThirdQuarter), "waning");
        assert_eq!(trend(Phase::NewMoon), "turning");
        assert_eq!(trend(Phase::FullMoon), "turning");
    }
}
