use thiserror::Error;

use crate::theory::{ReferenceFrame, VSOPBody, VSOPVersion};

/// Errors produced by the evaluation engine.
///
/// The series evaluation and coordinate math are total over validated inputs:
/// the only failure points are a (version, body) pair outside the theory
/// coverage and an undefined inertial-frame transition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrreryError {
    #[error("body {body:?} is not covered by theory version {version:?}")]
    UnsupportedCombination {
        version: VSOPVersion,
        body: VSOPBody,
    },

    #[error("frame transition {from:?} -> {to:?} is not defined for this result")]
    UnsupportedFrameTransition {
        from: ReferenceFrame,
        to: ReferenceFrame,
    },
}
