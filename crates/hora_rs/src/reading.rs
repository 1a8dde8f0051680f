//! Chart input validation and full reading assembly.

use hora_base::{
    AccidentalState, Aspect, CLASSICAL_PLANETS, DignityResult, Dms, FirdariaMinor,
    FirdariaTimeline, FixedStarHit, HoraError, House, Lot, Planet, Position, Profection,
    accidental_state, aspects, equal_houses, essential_dignities, firdaria_timeline,
    fixed_star_hits, house_of, is_day_birth, lords::profection, lots, sign_from_longitude,
};
use hora_base::Sign;
use hora_time::CivilDate;

/// Everything the core needs for one chart, already fetched by the
/// external collaborators (ephemeris, geocoding).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    /// One position per classical planet; order does not matter but each
    /// of the 7 bodies must appear exactly once.
    pub positions: [Position; 7],
    /// Ascendant ecliptic longitude in [0, 360).
    pub ascendant: f64,
    pub birth_date: CivilDate,
    /// Reference date for the time-lord engines; `None` means today.
    pub current_date: Option<CivilDate>,
}

/// One planet's fully annotated placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetReading {
    pub position: Position,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// DMS breakdown of `degree_in_sign`.
    pub dms: Dms,
    pub house: u8,
    pub dignities: DignityResult,
    pub accidental: AccidentalState,
}

/// The complete reading: plain data records, no formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub houses: [House; 12],
    pub is_day: bool,
    /// In `CLASSICAL_PLANETS` order (Sun first).
    pub planets: Vec<PlanetReading>,
    pub aspects: Vec<Aspect>,
    /// Fortune then Spirit.
    pub lots: [Lot; 2],
    pub fixed_stars: Vec<FixedStarHit>,
    pub profection: Profection,
    pub firdaria: FirdariaTimeline,
    /// Active Firdaria minor at the reference date; `None` beyond the
    /// 75-year horizon.
    pub firdaria_active: Option<FirdariaMinor>,
}

fn check_longitude(lon: f64) -> Result<(), HoraError> {
    if !lon.is_finite() || !(0.0..360.0).contains(&lon) {
        return Err(HoraError::InvalidLongitude(lon));
    }
    Ok(())
}

fn validate(input: &ChartInput) -> Result<(), HoraError> {
    check_longitude(input.ascendant)?;
    for pos in &input.positions {
        check_longitude(pos.longitude)?;
        if pos.planet.is_node() {
            return Err(HoraError::InvalidInput("nodes are not chart bodies"));
        }
    }
    for planet in CLASSICAL_PLANETS {
        let count = input
            .positions
            .iter()
            .filter(|p| p.planet == planet)
            .count();
        if count != 1 {
            return Err(HoraError::InvalidInput(
                "each classical planet must appear exactly once",
            ));
        }
    }
    Ok(())
}

fn position_of(input: &ChartInput, planet: Planet) -> &Position {
    // Guarded by validate(): every classical planet is present.
    input
        .positions
        .iter()
        .find(|p| p.planet == planet)
        .expect("validated input contains all classical planets")
}

/// Validate the input and assemble the full chart reading.
pub fn compute_reading(input: &ChartInput) -> Result<Reading, HoraError> {
    validate(input)?;

    let houses = equal_houses(input.ascendant);
    let sun_lon = position_of(input, Planet::Sun).longitude;
    let moon_lon = position_of(input, Planet::Moon).longitude;
    let is_day = is_day_birth(sun_lon, &houses);

    let planets = CLASSICAL_PLANETS
        .iter()
        .map(|&planet| {
            let pos = *position_of(input, planet);
            let info = sign_from_longitude(pos.longitude);
            PlanetReading {
                position: pos,
                sign: info.sign,
                degree_in_sign: info.degree_in_sign,
                dms: info.dms,
                house: house_of(pos.longitude, &houses),
                dignities: essential_dignities(planet, pos.longitude, is_day),
                accidental: accidental_state(planet, pos.longitude, &houses, sun_lon, pos.speed),
            }
        })
        .collect();

    let aspects = aspects(&input.positions);
    let lots = lots(input.ascendant, sun_lon, moon_lon, is_day, &houses);
    let fixed_stars = fixed_star_hits(&input.positions);

    let current = input.current_date.unwrap_or_else(CivilDate::today);
    let asc_sign = sign_from_longitude(input.ascendant).sign;
    let profection = profection(input.birth_date, asc_sign, current);

    let firdaria = firdaria_timeline(input.birth_date.to_jd(), is_day);
    let firdaria_active = firdaria.active(current.to_jd()).copied();

    Ok(Reading {
        houses,
        is_day,
        planets,
        aspects,
        lots,
        fixed_stars,
        profection,
        firdaria,
        firdaria_active,
    })
}
