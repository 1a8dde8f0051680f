use clap::{Parser, Subcommand};
use hora_base::{
    CLASSICAL_PLANETS, Planet, Position, Reception, accidental_state, aspects, equal_houses,
    essential_dignities, firdaria_timeline, fixed_star_hits, lots, profection,
    sign_from_longitude, solar_phase,
};
use hora_rs::{ChartInput, compute_reading};
use hora_time::CivilDate;

#[derive(Parser)]
#[command(name = "hora", about = "Classical astrology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Longitudes of the 7 classical bodies, shared by several subcommands.
#[derive(clap::Args)]
struct BodyLons {
    /// Sun ecliptic longitude in degrees
    #[arg(long)]
    sun: f64,
    /// Moon ecliptic longitude in degrees
    #[arg(long)]
    moon: f64,
    /// Mercury ecliptic longitude in degrees
    #[arg(long)]
    mercury: f64,
    /// Venus ecliptic longitude in degrees
    #[arg(long)]
    venus: f64,
    /// Mars ecliptic longitude in degrees
    #[arg(long)]
    mars: f64,
    /// Jupiter ecliptic longitude in degrees
    #[arg(long)]
    jupiter: f64,
    /// Saturn ecliptic longitude in degrees
    #[arg(long)]
    saturn: f64,
}

impl BodyLons {
    fn positions(&self) -> [Position; 7] {
        let lons = [
            self.sun,
            self.moon,
            self.mercury,
            self.venus,
            self.mars,
            self.jupiter,
            self.saturn,
        ];
        std::array::from_fn(|i| Position::new(CLASSICAL_PLANETS[i], lons[i], 1.0))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sign placement of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Equal-house cusps from the ascendant
    Houses {
        /// Ascendant ecliptic longitude in degrees
        asc: f64,
    },
    /// Essential dignities of a planet at a longitude
    Dignities {
        /// Planet name (sun, moon, mercury, venus, mars, jupiter, saturn)
        planet: String,
        /// Ecliptic longitude in degrees
        lon: f64,
        /// Score for a night birth instead of a day birth
        #[arg(long)]
        night: bool,
    },
    /// Solar phase of a planet relative to the Sun
    Solar {
        /// Planet name
        planet: String,
        /// Planet ecliptic longitude in degrees
        lon: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(long)]
        sun: f64,
    },
    /// Full accidental state (angularity, solar phase, motion)
    Accidental {
        /// Planet name
        planet: String,
        /// Planet ecliptic longitude in degrees
        lon: f64,
        /// Ascendant ecliptic longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Daily motion in degrees (negative for retrograde)
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },
    /// Major aspects among the 7 classical bodies
    Aspects {
        #[command(flatten)]
        lons: BodyLons,
    },
    /// Lots of Fortune and Spirit
    Lots {
        /// Ascendant ecliptic longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Sun ecliptic longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Moon ecliptic longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Night birth (swaps the sect formulas)
        #[arg(long)]
        night: bool,
    },
    /// Fixed-star conjunctions
    Stars {
        #[command(flatten)]
        lons: BodyLons,
    },
    /// Annual profection for a birth date
    Profection {
        /// Birth date (YYYY/MM/DD or YYYY-MM-DD)
        birth: CivilDate,
        /// Natal ascendant sign index (0 = Aries .. 11 = Pisces)
        #[arg(long)]
        asc_sign: u8,
        /// Reference date, defaults to today
        #[arg(long)]
        on: Option<CivilDate>,
    },
    /// Firdaria timeline and the active period
    Firdaria {
        /// Birth date (YYYY/MM/DD or YYYY-MM-DD)
        birth: CivilDate,
        /// Night birth (uses the Moon-first sequence)
        #[arg(long)]
        night: bool,
        /// Reference date, defaults to today
        #[arg(long)]
        on: Option<CivilDate>,
    },
    /// Full chart reading
    Chart {
        #[command(flatten)]
        lons: BodyLons,
        /// Ascendant ecliptic longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Birth date (YYYY/MM/DD or YYYY-MM-DD)
        #[arg(long)]
        birth: CivilDate,
        /// Reference date for time lords, defaults to today
        #[arg(long)]
        on: Option<CivilDate>,
    },
}

fn parse_planet(name: &str) -> Planet {
    match name.to_ascii_lowercase().as_str() {
        "sun" => Planet::Sun,
        "moon" => Planet::Moon,
        "mercury" => Planet::Mercury,
        "venus" => Planet::Venus,
        "mars" => Planet::Mars,
        "jupiter" => Planet::Jupiter,
        "saturn" => Planet::Saturn,
        other => {
            eprintln!("unknown planet: {other}");
            std::process::exit(2);
        }
    }
}

fn jd_to_date(jd: f64) -> CivilDate {
    CivilDate::from_jd(jd)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { lon } => {
            let info = sign_from_longitude(lon);
            println!(
                "{} {}°{}'{:.0}\"",
                info.sign.name(),
                info.dms.degrees,
                info.dms.minutes,
                info.dms.seconds
            );
        }
        Commands::Houses { asc } => {
            for house in equal_houses(asc) {
                println!(
                    "house {:2}  cusp {:7.2}  {}  ruler {}",
                    house.number,
                    house.cusp,
                    house.sign.name(),
                    house.ruler.name()
                );
            }
        }
        Commands::Dignities { planet, lon, night } => {
            let planet = parse_planet(&planet);
            let r = essential_dignities(planet, lon, !night);
            for d in &r.dignities {
                println!("{} ({:+})", d.name(), d.weight());
            }
            println!("score {}", r.score);
            if r.peregrine {
                println!("peregrine");
            }
        }
        Commands::Solar { planet, lon, sun } => {
            let planet = parse_planet(&planet);
            match solar_phase(planet, lon, sun) {
                Some(phase) => println!("{}", phase.name()),
                None => println!("free of the Sun"),
            }
        }
        Commands::Accidental {
            planet,
            lon,
            asc,
            sun,
            speed,
        } => {
            let planet = parse_planet(&planet);
            let houses = equal_houses(asc);
            let state = accidental_state(planet, lon, &houses, sun, speed);
            print!("{}", state.angularity.name());
            if let Some(phase) = state.solar_phase {
                print!("  {}", phase.name());
            }
            if state.retrograde {
                print!("  retrograde");
            }
            println!();
        }
        Commands::Aspects { lons } => {
            for a in aspects(&lons.positions()) {
                let reception = match a.reception {
                    Reception::None => String::new(),
                    Reception::OneWay(guest) => format!("  ({} received)", guest.name()),
                    Reception::Mutual => "  (mutual reception)".to_string(),
                };
                println!(
                    "{} {} {}  orb {:.2}°{}",
                    a.first.name(),
                    a.kind.name(),
                    a.second.name(),
                    a.orb,
                    reception
                );
            }
        }
        Commands::Lots {
            asc,
            sun,
            moon,
            night,
        } => {
            let houses = equal_houses(asc);
            for lot in lots(asc, sun, moon, !night, &houses) {
                println!(
                    "{}: {:.2}° ({} {:.2}°, house {})",
                    lot.kind.name(),
                    lot.longitude,
                    lot.sign.name(),
                    lot.degree_in_sign,
                    lot.house
                );
            }
        }
        Commands::Stars { lons } => {
            let hits = fixed_star_hits(&lons.positions());
            if hits.is_empty() {
                println!("no fixed-star conjunctions");
            }
            for hit in hits {
                println!("{} conjunct {}  orb {:.2}°", hit.planet.name(), hit.star, hit.orb);
            }
        }
        Commands::Profection {
            birth,
            asc_sign,
            on,
        } => {
            let on = on.unwrap_or_else(CivilDate::today);
            let p = profection(birth, hora_base::Sign::from_index(asc_sign), on);
            println!(
                "age {}  profected to {} (house {})  lord of the year: {}",
                p.age,
                p.sign.name(),
                p.house,
                p.lord.name()
            );
        }
        Commands::Firdaria { birth, night, on } => {
            let on = on.unwrap_or_else(CivilDate::today);
            let tl = firdaria_timeline(birth.to_jd(), !night);
            for major in &tl.majors {
                println!(
                    "{:9}  {} .. {}",
                    major.lord.name(),
                    jd_to_date(major.start_jd),
                    jd_to_date(major.end_jd)
                );
                for minor in &major.minors {
                    println!(
                        "    {:9}  {} .. {}",
                        minor.minor.name(),
                        jd_to_date(minor.start_jd),
                        jd_to_date(minor.end_jd)
                    );
                }
            }
            match tl.active(on.to_jd()) {
                Some(m) => println!(
                    "active on {}: {} / {}",
                    on,
                    m.major.name(),
                    m.minor.name()
                ),
                None => println!("active on {}: beyond the computed horizon", on),
            }
        }
        Commands::Chart {
            lons,
            asc,
            birth,
            on,
        } => {
            let input = ChartInput {
                positions: lons.positions(),
                ascendant: asc,
                birth_date: birth,
                current_date: on,
            };
            let reading = match compute_reading(&input) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };

            println!("sect: {}", if reading.is_day { "day" } else { "night" });
            for p in &reading.planets {
                let retro = if p.accidental.retrograde { " R" } else { "" };
                let phase = p
                    .accidental
                    .solar_phase
                    .map(|s| format!("  {}", s.name()))
                    .unwrap_or_default();
                println!(
                    "{:8} {} {:2}°{:02}'  house {:2}  {}  score {:+}{}{}",
                    p.position.planet.name(),
                    p.sign.name(),
                    p.dms.degrees,
                    p.dms.minutes,
                    p.house,
                    p.accidental.angularity.name(),
                    p.dignities.score,
                    phase,
                    retro
                );
            }
            for a in &reading.aspects {
                println!(
                    "{} {} {}  orb {:.2}°",
                    a.first.name(),
                    a.kind.name(),
                    a.second.name(),
                    a.orb
                );
            }
            for lot in &reading.lots {
                println!(
                    "{}: {} {:.2}° (house {})",
                    lot.kind.name(),
                    lot.sign.name(),
                    lot.degree_in_sign,
                    lot.house
                );
            }
            for hit in &reading.fixed_stars {
                println!("{} conjunct {}  orb {:.2}°", hit.planet.name(), hit.star, hit.orb);
            }
            println!(
                "profection: age {} → {} (house {}), lord {}",
                reading.profection.age,
                reading.profection.sign.name(),
                reading.profection.house,
                reading.profection.lord.name()
            );
            match &reading.firdaria_active {
                Some(m) => println!(
                    "firdaria: {} / {} until {}",
                    m.major.name(),
                    m.minor.name(),
                    jd_to_date(m.end_jd)
                ),
                None => println!("firdaria: beyond the computed horizon"),
            }
        }
    }
}
