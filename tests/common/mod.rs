//! Shared fixture catalog for the integration tests.
//!
//! The tables hold the leading terms of the published solution files
//! (truncated to the dominant amplitudes), enough for sub-percent positions
//! near J2000 without shipping megabytes of coefficients.

use chrono::NaiveDate;
use orrery::series::{Catalog, PowerTable, SeriesTable, Term, VariableTable};
use orrery::theory::{VSOPBody, VSOPVersion};
use orrery::timescale::VSOPTime;

fn power(terms: Vec<Term>) -> PowerTable {
    PowerTable::new(terms)
}

fn variable(powers: Vec<PowerTable>) -> VariableTable {
    let mut array: [PowerTable; 6] = Default::default();
    for (i, table) in powers.into_iter().enumerate() {
        array[i] = table;
    }
    VariableTable::new(array)
}

fn empty() -> VariableTable {
    VariableTable::default()
}

/// The J2000 epoch, 2000-01-01 12:00:00 interpreted as UTC.
pub fn time_j2000_utc() -> VSOPTime {
    VSOPTime::from_utc(
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

/// Leading terms of the elliptic solution for Mercury.
fn elliptic_mercury() -> SeriesTable {
    SeriesTable::new(
        VSOPVersion::VSOP87,
        VSOPBody::MERCURY,
        [
            // a
            variable(vec![power(vec![Term::new(0.38709830982, 0.0, 0.0)])]),
            // λ: constant plus the linear drift carried by the degree-1 table
            variable(vec![
                power(vec![Term::new(4.40260884240, 0.0, 0.0)]),
                power(vec![Term::new(26087.90314157420, 0.0, 0.0)]),
            ]),
            // k
            variable(vec![power(vec![Term::new(0.04466059760, 0.0, 0.0)])]),
            // h
            variable(vec![power(vec![Term::new(0.20072331368, 0.0, 0.0)])]),
            // q
            variable(vec![power(vec![Term::new(0.04061563384, 0.0, 0.0)])]),
            // p
            variable(vec![power(vec![Term::new(0.04563550461, 0.0, 0.0)])]),
        ],
    )
}

/// Leading terms of the spherical of-date solution for Mercury.
fn spherical_mercury() -> SeriesTable {
    SeriesTable::new(
        VSOPVersion::VSOP87D,
        VSOPBody::MERCURY,
        [
            variable(vec![
                power(vec![
                    Term::new(4.40250710144, 0.0, 0.0),
                    Term::new(0.40989414977, 1.48302034195, 26087.90314157420),
                    Term::new(0.05046294200, 4.47785489551, 52175.80628314840),
                    Term::new(0.00855346844, 1.16520322459, 78263.70942472259),
                    Term::new(0.00165590362, 4.11969163423, 104351.61256629678),
                    Term::new(0.00034561897, 0.77930768443, 130439.51570787099),
                    Term::new(0.00007583476, 3.71348404924, 156527.41884944477),
                ]),
                power(vec![
                    Term::new(26087.90313685529, 0.0, 0.0),
                    Term::new(0.01131199811, 6.21874197797, 26087.90314157420),
                    Term::new(0.00292242298, 3.04449355541, 52175.80628314840),
                ]),
            ]),
            variable(vec![
                power(vec![
                    Term::new(0.11737528961, 1.98357498767, 26087.90314157420),
                    Term::new(0.02388076996, 5.03738959686, 52175.80628314840),
                    Term::new(0.01222839532, 3.14159265359, 0.0),
                    Term::new(0.00543251810, 1.79644363964, 78263.70942472259),
                    Term::new(0.00129778770, 4.83232503958, 104351.61256629678),
                    Term::new(0.00031866927, 1.58088495658, 130439.51570787099),
                ]),
                power(vec![Term::new(0.00274646065, 3.95008450011, 26087.90314157420)]),
            ]),
            variable(vec![
                power(vec![
                    Term::new(0.39528271651, 0.0, 0.0),
                    Term::new(0.07834131818, 6.19233722598, 26087.90314157420),
                    Term::new(0.00795525558, 2.95989690104, 52175.80628314840),
                    Term::new(0.00121281764, 6.01064153797, 78263.70942472259),
                    Term::new(0.00021921969, 2.77820093972, 104351.61256629678),
                    Term::new(0.00004354065, 5.82894543774, 130439.51570787099),
                ]),
                power(vec![
                    Term::new(0.00217347740, 4.65617158665, 26087.90314157420),
                    Term::new(0.00044141826, 1.42385544001, 52175.80628314840),
                ]),
            ]),
            empty(),
            empty(),
            empty(),
        ],
    )
}

/// Leading terms of the spherical of-date solution for the Earth.
fn spherical_earth() -> SeriesTable {
    SeriesTable::new(
        VSOPVersion::VSOP87D,
        VSOPBody::EARTH,
        [
            variable(vec![
                power(vec![
                    Term::new(1.75347045673, 0.0, 0.0),
                    Term::new(0.03341656453, 4.66925680415, 6283.07584999140),
                    Term::new(0.00034894275, 4.62610242189, 12566.15169998280),
                ]),
                power(vec![
                    Term::new(6283.31966747491, 0.0, 0.0),
                    Term::new(0.00206058863, 2.67823455584, 6283.07584999140),
                ]),
            ]),
            variable(vec![power(vec![Term::new(
                0.00000279620,
                3.19870156017,
                84334.66158130829,
            )])]),
            variable(vec![
                power(vec![
                    Term::new(1.00013988784, 0.0, 0.0),
                    Term::new(0.01670699632, 3.09846350258, 6283.07584999140),
                    Term::new(0.00013956023, 3.05524609456, 12566.15169998280),
                    Term::new(0.00003083720, 5.19846674381, 77713.77146812050),
                ]),
                power(vec![Term::new(0.00103018607, 1.10748968172, 6283.07584999140)]),
            ]),
            empty(),
            empty(),
            empty(),
        ],
    )
}

/// Leading terms of the rectangular J2000 solution for Mercury.
///
/// Degree-0 terms only; the degree-1 tables matter at the 1e-8 au level
/// within a few weeks of J2000 and are left out. The truncation leaves
/// roughly 1e-3 au in position and two parts in a thousand of the speed.
fn rectangular_mercury() -> SeriesTable {
    SeriesTable::new(
        VSOPVersion::VSOP87A,
        VSOPBody::MERCURY,
        [
            variable(vec![power(vec![
                Term::new(0.37546291728, 4.39651506942, 26087.90314157420),
                Term::new(0.03825746672, 1.16485604339, 52175.80628314840),
                Term::new(0.02625615963, 3.14159265359, 0.0),
                Term::new(0.00584261333, 4.21599394757, 78263.70942472259),
                Term::new(0.00105716695, 0.98846517420, 104351.61256629678),
            ])]),
            variable(vec![power(vec![
                Term::new(0.37953642888, 2.83780617820, 26087.90314157420),
                Term::new(0.11626131831, 3.14159265359, 0.0),
                Term::new(0.03854668215, 5.88780608966, 52175.80628314840),
                Term::new(0.00587711268, 2.65498896201, 78263.70942472259),
                Term::new(0.00106235493, 4.22994932613, 104351.61256629678),
            ])]),
            variable(vec![power(vec![
                Term::new(0.04607665326, 1.99295081967, 26087.90314157420),
                Term::new(0.00708734365, 3.40280772892, 52175.80628314840),
            ])]),
            empty(),
            empty(),
            empty(),
        ],
    )
}

/// One leading barycentric term for the Sun, for frame-rule tests.
fn barycentric_sun() -> SeriesTable {
    SeriesTable::new(
        VSOPVersion::VSOP87E,
        VSOPBody::SUN,
        [
            variable(vec![power(vec![Term::new(
                0.00495672739,
                3.74086294714,
                529.69096509460,
            )])]),
            empty(),
            empty(),
            empty(),
            empty(),
            empty(),
        ],
    )
}

/// Fixture catalog covering every test in the suite.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_iter([
        elliptic_mercury(),
        rectangular_mercury(),
        spherical_mercury(),
        spherical_earth(),
        barycentric_sun(),
    ])
}
