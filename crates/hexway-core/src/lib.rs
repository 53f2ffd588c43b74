//! **hexway-core** — Hex-grid route planning for strategy maps (core types).
//!
//! This crate provides the foundational types used across the *hexway*
//! workspace: offset hex coordinates, edge directions, grid distance, and
//! player identity.

pub mod hex;
pub mod player;

pub use hex::{Coord, Direction, distance};
pub use player::PlayerId;
