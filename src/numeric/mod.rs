// ============================================================================
// Numeric Module
// Generic binary fixed-point and normalized fixed-point value types
// ============================================================================
//
// This module provides:
// - Fixed<B, FRAC>: binary fixed-point number with FRAC fractional bits
// - Norm<B>: normalized number covering [-1, 1] or [0, 1], saturating
// - FixedPointFamily: conversion between any two instantiations
// - NumericError: error type for the checked operations
// - Fixed8..UFixed64 and Norm8..UNorm64 aliases
//
// Design principles:
// - No heap allocation, every value is a transparent wrapper over its base
// - Multiply and divide are computed in the double-width wide type
// - Fixed wraps like the base integer, Norm clamps
// - Division by a zero base panics; checked_* returns Result instead

mod errors;
mod family;
mod fixed;
mod norm;

pub use errors::{NumericError, NumericResult};
pub use family::{same_instantiation, Family, FixedPointFamily};
pub use fixed::{Fixed, Fixed16, Fixed32, Fixed64, Fixed8, UFixed16, UFixed32, UFixed64, UFixed8};
pub use norm::{Norm, Norm16, Norm32, Norm64, Norm8, UNorm16, UNorm32, UNorm64, UNorm8};
