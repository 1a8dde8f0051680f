//! Integration tests assembling a full reading from crafted positions.

use hora_rs::*;

/// Aries rising, day birth (Sun in the 7th), crafted so several engines
/// have known exact answers.
fn chart() -> ChartInput {
    ChartInput {
        positions: [
            Position::new(Planet::Sun, 200.0, 0.95),
            Position::new(Planet::Moon, 40.0, 13.2),
            Position::new(Planet::Mercury, 190.0, 1.3),
            Position::new(Planet::Venus, 204.5, 1.2),
            Position::new(Planet::Mars, 10.0, 0.5),
            Position::new(Planet::Jupiter, 130.0, 0.1),
            Position::new(Planet::Saturn, 310.0, -0.05),
        ],
        ascendant: 0.0,
        birth_date: "1994/03/21".parse().unwrap(),
        current_date: Some("2024-06-01".parse().unwrap()),
    }
}

#[test]
fn sect_is_day() {
    let r = compute_reading(&chart()).unwrap();
    // Sun at 200 with Aries rising sits in house 7.
    assert!(r.is_day);
    assert_eq!(r.planets[0].house, 7);
}

#[test]
fn houses_start_at_ascendant() {
    let r = compute_reading(&chart()).unwrap();
    assert!((r.houses[0].cusp - 0.0).abs() < 1e-12);
    assert_eq!(r.houses[0].sign, Sign::Aries);
    assert_eq!(r.houses[0].ruler, Planet::Mars);
    assert_eq!(r.houses[11].number, 12);
}

#[test]
fn planet_annotations() {
    let r = compute_reading(&chart()).unwrap();

    // Mars at 10 Aries: domicile, angular in the 1st.
    let mars = &r.planets[4];
    assert_eq!(mars.sign, Sign::Aries);
    assert_eq!(mars.house, 1);
    assert!(mars.dignities.dignities.contains(&Dignity::Domicile));
    assert_eq!(mars.accidental.angularity, Angularity::Angular);

    // Sun at 20 Libra: in fall, score -4.
    let sun = &r.planets[0];
    assert_eq!(sun.sign, Sign::Libra);
    assert!(sun.dignities.dignities.contains(&Dignity::Fall));
    assert_eq!(sun.dignities.score, -4);

    // Moon at 10 Taurus: exaltation + face.
    let moon = &r.planets[1];
    assert_eq!(moon.dignities.score, 5);

    // Venus at 24.5 Libra: domicile, combust (4.5 deg from the Sun).
    let venus = &r.planets[3];
    assert_eq!(venus.sign, Sign::Libra);
    assert!(venus.dignities.dignities.contains(&Dignity::Domicile));
    assert_eq!(venus.accidental.solar_phase, Some(SolarPhase::Combust));

    // Saturn is the only retrograde body.
    let saturn = &r.planets[6];
    assert!(saturn.accidental.retrograde);
    assert!(r.planets[..6].iter().all(|p| !p.accidental.retrograde));
}

#[test]
fn expected_aspects_present() {
    let r = compute_reading(&chart()).unwrap();

    // Mars sextile Saturn, exact.
    let mars_saturn = r
        .aspects
        .iter()
        .find(|a| a.first == Planet::Mars && a.second == Planet::Saturn)
        .unwrap();
    assert_eq!(mars_saturn.kind, AspectKind::Sextile);
    assert!((mars_saturn.orb - 0.0).abs() < 1e-12);

    // Moon square Jupiter, exact.
    assert!(r.aspects.iter().any(|a| a.first == Planet::Moon
        && a.second == Planet::Jupiter
        && a.kind == AspectKind::Square));

    // Sun conjunct Venus with the Sun received (Sun in Venus-ruled Libra).
    let sun_venus = r
        .aspects
        .iter()
        .find(|a| a.first == Planet::Sun && a.second == Planet::Venus)
        .unwrap();
    assert_eq!(sun_venus.kind, AspectKind::Conjunction);
    assert_eq!(sun_venus.reception, Reception::OneWay(Planet::Sun));
}

#[test]
fn lots_day_formulas() {
    let r = compute_reading(&chart()).unwrap();
    // Fortune = asc + moon - sun = 0 + 40 - 200 → 200.
    assert_eq!(r.lots[0].kind, LotKind::Fortune);
    assert!((r.lots[0].longitude - 200.0).abs() < 1e-12);
    assert_eq!(r.lots[0].house, 7);
    // Spirit = asc + sun - moon = 160, in Virgo.
    assert_eq!(r.lots[1].kind, LotKind::Spirit);
    assert!((r.lots[1].longitude - 160.0).abs() < 1e-12);
    assert_eq!(r.lots[1].sign, Sign::Virgo);
}

#[test]
fn fixed_star_hit_on_spica() {
    let r = compute_reading(&chart()).unwrap();
    assert_eq!(r.fixed_stars.len(), 1);
    assert_eq!(r.fixed_stars[0].planet, Planet::Venus);
    assert_eq!(r.fixed_stars[0].star, "Spica");
    assert!((r.fixed_stars[0].orb - 0.5).abs() < 1e-9);
}

#[test]
fn profection_age_30() {
    let r = compute_reading(&chart()).unwrap();
    assert_eq!(r.profection.age, 30);
    assert_eq!(r.profection.sign, Sign::Libra);
    assert_eq!(r.profection.house, 7);
    assert_eq!(r.profection.lord, Planet::Venus);
}

#[test]
fn firdaria_active_in_mercury_major() {
    let r = compute_reading(&chart()).unwrap();
    // 30.2 years after a day birth: Mercury major (18..31y), Venus minor.
    let active = r.firdaria_active.unwrap();
    assert_eq!(active.major, Planet::Mercury);
    assert_eq!(active.minor, Planet::Venus);
    assert!(r.firdaria.is_day);
    assert_eq!(r.firdaria.majors.len(), 9);
}

#[test]
fn reading_is_pure_data() {
    // Identical inputs give identical outputs, field for field.
    let a = compute_reading(&chart()).unwrap();
    let b = compute_reading(&chart()).unwrap();
    assert_eq!(a, b);
}
