//! # pm-core
//!
//! Core types, navigation view-model, and error types for Postmortem.
//!
//! This crate provides the foundational types shared across all Postmortem crates:
//! - The [`CaseStudy`](entities::CaseStudy) entity and its card projection
//! - Screen, origin, and navigation-target enums
//! - The [`Navigator`](navigation::Navigator) state machine driving which screen renders
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod navigation;
pub mod responses;
