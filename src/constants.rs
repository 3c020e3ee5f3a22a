//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **epoch definitions**, and **common type
//! definitions** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Angular constants and the series expansion time unit (Julian millennia)
//! - Epochs used by the Julian Date conversions (J2000, the 1899-12-30 day-count origin)
//! - Time-scale offsets of the UTC → TAI → TT → TDB chain
//! - Heliocentric gravitational parameters of the planets (the `vsop87.f` data block,
//!   preserved verbatim; units au³/day²)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Angular and temporal constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric reductions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian millennium, the unit of the series expansion variable τ
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TDB)
pub const JD_J2000: f64 = 2_451_545.0;

/// Julian Date of 1899-12-30T00:00:00, the zero point of the civil-time day count
pub const JD_DAY_COUNT_EPOCH: f64 = 2_415_018.5;

/// TAI − UTC offset of the time-scale chain, in whole seconds
pub const TAI_MINUS_UTC_SECONDS: i64 = 37;

/// TT − TAI offset of the time-scale chain, in milliseconds (32.184 s exactly)
pub const TT_MINUS_TAI_MILLISECONDS: i64 = 32_184;

// -------------------------------------------------------------------------------------------------
// Gravitational parameters (au³/day²)
// -------------------------------------------------------------------------------------------------

/// Heliocentric gravitational constant of the Sun
pub const GM_SUN: f64 = 2.9591220836841438269e-04;

/// Gravitational parameter of Mercury
pub const GM_MERCURY: f64 = 4.9125474514508118699e-11;

/// Gravitational parameter of Venus
pub const GM_VENUS: f64 = 7.2434524861627027000e-10;

/// Gravitational parameter of the Earth–Moon system
pub const GM_EARTH_MOON: f64 = 8.9970116036316091182e-10;

/// Gravitational parameter of Mars
pub const GM_MARS: f64 = 9.5495351057792580598e-11;

/// Gravitational parameter of Jupiter
pub const GM_JUPITER: f64 = 2.8253458420837780000e-07;

/// Gravitational parameter of Saturn
pub const GM_SATURN: f64 = 8.4597151856806587398e-08;

/// Gravitational parameter of Uranus
pub const GM_URANUS: f64 = 1.2920249167819693900e-08;

/// Gravitational parameter of Neptune
pub const GM_NEPTUNE: f64 = 1.5243589007842762800e-08;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Velocity in astronomical units per day
pub type AuPerDay = f64;
/// Angular rate in radians per day
pub type RadianPerDay = f64;
/// Julian Date (days)
pub type JulianDate = f64;
