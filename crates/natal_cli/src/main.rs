use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use natal_engine::{BirthInput, EngineConfig, NatalEngine, NumerologyRequest};
use chrono::NaiveDateTime;
use natal_time::{CivilDateTime, JulianMoment, TimeError, UtcOffset, parse_date, parse_time};
use natal_vedic::{AyanamshaSystem, ayanamsha_deg, deg_to_dms, nakshatra_from_longitude};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart and numerology CLI")]
struct Cli {
    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart as JSON
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (HH:MM[:SS])
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// UTC offset or zone abbreviation (+05:30, UTC, IST)
        #[arg(long, default_value = "UTC", allow_hyphen_values = true)]
        tz: String,
        #[arg(long)]
        name: Option<String>,
        /// Placidus, Equal or Porphyry
        #[arg(long)]
        house_system: Option<String>,
        /// Lahiri, Krishnamurti or Raman
        #[arg(long)]
        ayanamsha: Option<String>,
        /// Also report transits at this UTC time (YYYY-MM-DD[THH:MM[:SS]])
        #[arg(long)]
        transit_at: Option<String>,
    },
    /// Numerology profile as JSON
    Numerology {
        /// Full birth name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// pythagorean (default), chaldean or kabbalistic
        #[arg(long)]
        system: Option<String>,
        /// Date for personal year/month/day (default today)
        #[arg(long)]
        target: Option<String>,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Ayanamsha at a UTC date
    Ayanamsha {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Lahiri (default), Krishnamurti or Raman
        #[arg(long, default_value = "lahiri")]
        system: String,
    },
    /// Julian Day and Greenwich sidereal time of a local time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM[:SS])
        #[arg(long, default_value = "12:00")]
        time: String,
        /// UTC offset or zone abbreviation
        #[arg(long, default_value = "UTC", allow_hyphen_values = true)]
        tz: String,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to encode output: {e}")),
    }
}

/// `YYYY-MM-DD[THH:MM[:SS]][Z]` as a UTC instant; the date alone means midnight.
fn parse_utc(s: &str) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    let time = s
        .split_once('T')
        .map_or("00:00", |(_, t)| t.trim_end_matches('Z'));
    Ok(parse_date(s)?.and_time(parse_time(time)?))
}

fn load_config(path: Option<&Path>) -> EngineConfig {
    let Some(path) = path else {
        return EngineConfig::default();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())));
    EngineConfig::from_json_str(&text).unwrap_or_else(|e| fail(e))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            tz,
            name,
            house_system,
            ayanamsha,
            transit_at,
        } => {
            let engine = NatalEngine::with_bundled_provider(load_config(cli.config.as_deref()))
                .unwrap_or_else(|e| fail(e));
            let input = BirthInput {
                full_name: name,
                birth_date_iso: date,
                birth_time_iso: time,
                latitude: lat,
                longitude: lon,
                timezone_id: tz,
                ayanamsha,
                house_system,
            };
            let chart = engine.chart(&input).await.unwrap_or_else(|e| fail(e));
            for u in &chart.unavailable {
                tracing::warn!(body = %u.body, reason = ?u.reason, "position unavailable");
            }
            for w in &chart.warnings {
                tracing::warn!(warning = ?w, "birth data advisory");
            }
            match transit_at {
                None => print_json(&*chart),
                Some(at) => {
                    let at = parse_utc(&at).unwrap_or_else(|e| fail(e));
                    let transits = engine.transits(&chart, at).await;
                    print_json(&serde_json::json!({ "chart": &*chart, "transits": transits }));
                }
            }
        }

        Commands::Numerology {
            name,
            date,
            system,
            target,
        } => {
            let engine = NatalEngine::with_bundled_provider(load_config(cli.config.as_deref()))
                .unwrap_or_else(|e| fail(e));
            let request = NumerologyRequest {
                full_name: name,
                birth_date_iso: date,
                system,
                target_date_iso: target,
            };
            let profile = engine.numerology(&request).await.unwrap_or_else(|e| fail(e));
            print_json(&*profile);
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            let dms = deg_to_dms(info.degrees_in_nakshatra);
            println!(
                "{} (index {}) - Pada {} - lord {} ({} deg {} min {:.1} sec in nakshatra)",
                info.nakshatra.name(),
                info.index,
                info.pada,
                info.lord.name(),
                dms.degrees,
                dms.minutes,
                dms.seconds
            );
        }

        Commands::Ayanamsha { date, system } => {
            let system: AyanamshaSystem = system.parse().unwrap_or_else(|e| fail(e));
            let civil = CivilDateTime::parse(&date, "00:00").unwrap_or_else(|e| fail(e));
            let moment =
                JulianMoment::from_civil(&civil, UtcOffset::UTC).unwrap_or_else(|e| fail(e));
            let aya = ayanamsha_deg(system, moment.julian_day);
            let dms = deg_to_dms(aya);
            println!(
                "{system}: {aya:.6} deg ({} deg {} min {:.2} sec)",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Jd { date, time, tz } => {
            let offset = UtcOffset::parse(&tz).unwrap_or_else(|e| fail(e));
            let civil = CivilDateTime::parse(&date, &time).unwrap_or_else(|e| fail(e));
            let moment = JulianMoment::from_civil(&civil, offset).unwrap_or_else(|e| fail(e));
            println!("UTC:  {}", moment.utc);
            println!("JD:   {:.6}", moment.julian_day);
            println!("GMST: {:.6} deg", moment.gmst_deg);
        }
    }
}
