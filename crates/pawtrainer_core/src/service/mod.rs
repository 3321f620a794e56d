//! Dispatch boundary over the reducer and persistence adapter.
//!
//! # Responsibility
//! - Own the live `AppState` and persist it after every transition.
//! - Offer the read projections and composite intents front ends need.

pub mod trainer_session;
