pub mod constants;
pub mod conversion;
pub mod evaluator;
pub mod kepler;
pub mod orrery;
pub mod orrery_errors;
pub mod ref_system;
pub mod series;
pub mod theory;
pub mod timescale;
pub mod vsop_result;
