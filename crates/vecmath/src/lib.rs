// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! vecmath: small `f32` vector value types and scalar helpers.
//!
//! [`Vec2`] and [`Vec3`] are `Copy` values. Every arithmetic operation returns
//! a new vector; the only in-place mutators are the explicit `set*`,
//! `normalize` and compound-assignment methods.
//!
//! Equality between vectors is approximate (per-component tolerance of
//! [`math::VECTOR_EPSILON`]), so the vector types intentionally do not
//! implement `Eq` or `Hash`.
// `bytemuck` derives emit `unsafe impl Pod`; everything else stays safe.
#![cfg_attr(not(feature = "bytemuck"), forbid(unsafe_code))]
#![cfg_attr(feature = "bytemuck", allow(unsafe_code))]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions
)]

/// Scalar helpers and the `Vec2`/`Vec3` value types.
pub mod math;

mod error;

pub use error::MathError;
pub use math::{Vec2, Vec3};
