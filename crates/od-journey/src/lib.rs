//! `od-journey` — success probability of one path under a mission.
//!
//! # Per-path walk
//!
//! ```text
//! budget = max(countdown − baseline(path), 0)        -- slack days, one pool
//! for each step (planet_j, time_j), from current_planet:
//!   ① Fuel     — enough tank: burn time_j.
//!                otherwise:   spend a refuel day at current_planet
//!                             (encounter check there), refill, burn time_j.
//!   ② Wait     — while planet_j is sighted on arrival day and slack remains,
//!                arrive one day later.
//!   ③ Discount — still sighted: subtract 9^k / 10^(k+1), k += 1.
//! late (elapsed > countdown) → 0
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`simulator`]   | `JourneySimulator`, `encounter_penalty`              |
//! | [`state`]       | `SimulationState`, `JourneyOutcome`                  |
//! | [`observer`]    | `JourneyObserver`, `NoopObserver`, `EventLog`        |

pub mod observer;
pub mod simulator;
pub mod state;


pub use observer::{EventLog, JourneyEvent, JourneyObserver, NoopObserver};
pub use simulator::{encounter_penalty, JourneySimulator};
pub use state::{JourneyOutcome, SimulationState};
