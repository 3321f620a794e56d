//! Training countdown timers.
//!
//! # Responsibility
//! - Model one countdown as a pure state machine (`Countdown`).
//! - Drive countdowns once per second on independent runtime tasks.
//!
//! # Invariants
//! - Timers share no state with each other or with the tracker document.
//! - At most one decrement task is live per timer; restarting cancels the
//!   previous task first.

pub mod countdown;
pub mod training_timer;
