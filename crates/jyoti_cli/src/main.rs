use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jyoti_config::{JyotiConfig, load_config};
use jyoti_core::{
    AyanamshaSystem, Body, CalcFlags, Dispatcher, Engine, EngineConfig, HouseSystem,
    ayanamsha_deg, is_retrograde,
};
use jyoti_time::{Instant, jd_to_calendar};
use jyoti_vedic_base::{
    ChartRequest, SignPlacement, compute_chart, nakshatra_placement, sign_placement,
};
use log::debug;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "jyoti", about = "Sidereal positions, houses and charts")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ephemeris kernel file or directory (overrides the config file)
    #[arg(long, global = true)]
    ephemeris: Option<PathBuf>,
    /// Ayanamsha name or id (overrides the config file)
    #[arg(long, global = true)]
    ayanamsha: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day (UT) of a UTC date
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        date: String,
    },
    /// Geocentric longitude and speed of one body
    Longitude {
        /// Body name (sun, moon, mars, rahu, ...)
        body: String,
        /// UTC datetime or Julian Day
        #[arg(long)]
        date: String,
        /// Report the tropical longitude
        #[arg(long)]
        tropical: bool,
    },
    /// Sidereal ascendant, MC and house cusps
    Houses {
        /// UTC datetime or Julian Day
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// House system: W (whole sign) or E (equal)
        #[arg(long)]
        system: Option<char>,
    },
    /// Full chart: every body with sign, nakshatra, house and conditions
    Chart {
        /// UTC datetime or Julian Day
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ayanamsha value for a date
    Ayanamsha {
        /// UTC datetime or Julian Day
        #[arg(long)]
        date: String,
        /// List every supported system
        #[arg(long)]
        all: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Accepts a Julian Day number or a UTC datetime string.
fn require_jd(date: &str) -> f64 {
    if let Ok(jd) = date.trim().parse::<f64>() {
        return jd;
    }
    match date.parse::<Instant>() {
        Ok(i) => i.jd_ut(),
        Err(e) => {
            eprintln!("Invalid date '{date}': {e}");
            std::process::exit(1);
        }
    }
}

fn require_body(name: &str) -> Body {
    match name.parse::<Body>() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid body '{name}': {e}");
            let names: Vec<&str> = Body::all().iter().map(|b| b.name()).collect();
            eprintln!("Valid: {}", names.join(", "));
            std::process::exit(1);
        }
    }
}

fn require_file_config(path: Option<&PathBuf>) -> JyotiConfig {
    let Some(path) = path else {
        return JyotiConfig::default();
    };
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn require_engine_config(cli: &Cli, file: &JyotiConfig) -> EngineConfig {
    let mut config = match file.engine_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(name) = &cli.ayanamsha {
        config.ayanamsha = require_ayanamsha(name);
    }
    if let Some(path) = &cli.ephemeris {
        config.ephemeris_path = Some(path.clone());
    }
    config
}

fn require_ayanamsha(name: &str) -> AyanamshaSystem {
    match name.parse::<AyanamshaSystem>() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            let names: Vec<&str> = AyanamshaSystem::all().iter().map(|s| s.name()).collect();
            eprintln!("Valid: {}", names.join(", "));
            std::process::exit(1);
        }
    }
}

fn require_observer(file: &JyotiConfig, lat: Option<f64>, lon: Option<f64>) -> (f64, f64) {
    let fallback = match file.observer() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid observer: {e}");
            std::process::exit(1);
        }
    };
    match (lat, lon, fallback) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (lat, lon, Some(o)) => (lat.unwrap_or(o.latitude), lon.unwrap_or(o.longitude)),
        _ => {
            eprintln!("Observer required: pass --lat and --lon or set [observer] in the config");
            std::process::exit(1);
        }
    }
}

fn require_house_system(file: &JyotiConfig, code: Option<char>) -> HouseSystem {
    let result = match code {
        Some(c) => HouseSystem::from_code(c).map_err(|e| e.to_string()),
        None => file.house_system().map_err(|e| e.to_string()),
    };
    match result {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn build_engine(config: EngineConfig) -> Engine {
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };
    let dispatcher = Dispatcher::new();
    match runtime.block_on(Engine::from_dispatcher(&dispatcher, config)) {
        Ok(engine) => {
            debug!("using {} backend", engine.backend_kind().name());
            engine
        }
        Err(e) => {
            eprintln!("Failed to build engine: {e}");
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn dms(p: &SignPlacement) -> String {
    format!(
        "{} {:02}°{:02}'{:02}\"",
        p.rashi.name(),
        p.degree,
        p.minute,
        p.second
    )
}

#[derive(Serialize)]
struct JdOutput {
    jd_ut: f64,
    year: i32,
    month: u32,
    day: f64,
}

#[derive(Serialize)]
struct LongitudeOutput {
    body: Body,
    jd_ut: f64,
    sidereal: bool,
    longitude_deg: f64,
    speed_deg_per_day: f64,
    is_retrograde: bool,
}

#[derive(Serialize)]
struct AyanamshaOutput {
    system: AyanamshaSystem,
    id: i32,
    jd_ut: f64,
    ayanamsha_deg: f64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let file = require_file_config(cli.config.as_ref());

    match &cli.command {
        Commands::Jd { date } => {
            let jd = require_jd(date);
            let (year, month, day) = jd_to_calendar(jd);
            if cli.json {
                print_json(&JdOutput {
                    jd_ut: jd,
                    year,
                    month,
                    day,
                });
            } else {
                println!("{jd:.6}");
            }
        }

        Commands::Longitude {
            body,
            date,
            tropical,
        } => {
            let body = require_body(body);
            let jd = require_jd(date);
            let engine = build_engine(require_engine_config(&cli, &file));
            let flags = CalcFlags {
                sidereal: !tropical,
                speed: true,
            };
            let r = engine
                .body_longitude(jd, body, flags)
                .unwrap_or_else(|e| fail(e));
            let retro = is_retrograde(r.speed_deg_per_day);
            if cli.json {
                print_json(&LongitudeOutput {
                    body,
                    jd_ut: jd,
                    sidereal: !tropical,
                    longitude_deg: r.longitude_deg,
                    speed_deg_per_day: r.speed_deg_per_day,
                    is_retrograde: retro,
                });
            } else {
                println!(
                    "{}: {:.6} deg ({}), speed {:+.6} deg/day{}",
                    body.name(),
                    r.longitude_deg,
                    dms(&sign_placement(r.longitude_deg)),
                    r.speed_deg_per_day,
                    if retro { " R" } else { "" }
                );
            }
        }

        Commands::Houses {
            date,
            lat,
            lon,
            system,
        } => {
            let jd = require_jd(date);
            let (lat, lon) = require_observer(&file, *lat, *lon);
            let system = require_house_system(&file, *system);
            let engine = build_engine(require_engine_config(&cli, &file));
            let h = engine
                .ascendant_and_houses(jd, lat, lon, system)
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&h);
            } else {
                println!(
                    "Ascendant: {:.6} deg ({})",
                    h.ascendant_deg,
                    dms(&sign_placement(h.ascendant_deg))
                );
                println!("MC:        {:.6} deg", h.mc_deg);
                for (i, c) in h.cusps.iter().enumerate() {
                    println!("House {:>2}:  {:.6} deg", i + 1, c);
                }
            }
        }

        Commands::Chart { date, lat, lon } => {
            let jd = require_jd(date);
            let (lat, lon) = require_observer(&file, *lat, *lon);
            let system = require_house_system(&file, None);
            let engine = build_engine(require_engine_config(&cli, &file));
            let request = ChartRequest::new(jd, lat, lon).with_house_system(system);
            let chart = compute_chart(&engine, &request).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&chart);
            } else {
                println!(
                    "JD {:.6}  {} {:.4} deg",
                    chart.jd_ut,
                    chart.ayanamsha.name(),
                    chart.ayanamsha_deg
                );
                println!("Lagna: {}", dms(&chart.ascendant));
                for p in &chart.positions {
                    let mut notes = Vec::new();
                    if p.is_retrograde {
                        notes.push("retrograde");
                    }
                    if p.conditions.combust {
                        notes.push("combust");
                    }
                    if p.conditions.exalted {
                        notes.push("exalted");
                    }
                    if p.conditions.debilitated {
                        notes.push("debilitated");
                    }
                    println!(
                        "{:<8} {:>10.4}  {:<22} {:<18} pada {}  house {:>2}  {}",
                        p.name,
                        p.longitude_deg,
                        dms(&p.sign),
                        p.nakshatra.nakshatra.name(),
                        p.nakshatra.pada,
                        p.house,
                        notes.join(", ")
                    );
                }
            }
        }

        Commands::Rashi { lon } => {
            let p = sign_placement(*lon);
            if cli.json {
                print_json(&p);
            } else {
                println!(
                    "{} ({}) - {} deg {} min {} sec",
                    p.rashi.name(),
                    p.rashi.western_name(),
                    p.degree,
                    p.minute,
                    p.second
                );
            }
        }

        Commands::Nakshatra { lon } => {
            let n = nakshatra_placement(*lon);
            if cli.json {
                print_json(&n);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                    n.nakshatra.name(),
                    n.nakshatra_index,
                    n.pada,
                    n.degrees_in_nakshatra
                );
            }
        }

        Commands::Ayanamsha { date, all } => {
            let jd = require_jd(date);
            let systems: Vec<AyanamshaSystem> = if *all {
                AyanamshaSystem::all().to_vec()
            } else {
                vec![require_engine_config(&cli, &file).ayanamsha]
            };
            let rows: Vec<AyanamshaOutput> = systems
                .into_iter()
                .map(|system| AyanamshaOutput {
                    system,
                    id: system.id(),
                    jd_ut: jd,
                    ayanamsha_deg: ayanamsha_deg(system, jd),
                })
                .collect();
            if cli.json {
                print_json(&rows);
            } else {
                for r in &rows {
                    println!("{:<16} {:>3}  {:.6} deg", r.system.name(), r.id, r.ayanamsha_deg);
                }
            }
        }
    }
}
