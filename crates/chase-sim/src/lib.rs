//! `chase-sim` — trial loop and batch orchestration for the chase simulator.
//!
//! # One trial
//!
//! ```text
//! for step in 0..scenario.step_cap():
//!   ① pursuer advances toward the evader's pre-step position
//!   ② evader advances toward the safe zone (same dt)
//!   ③ terminal checks, in precedence order:
//!        Caught  — dist(pursuer, evader) <= capture_radius
//!        Safe    — dist(evader, safe zone) <= capture_radius / 2
//! step cap reached → Timeout
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs trials on Rayon's thread pool.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use chase_core::BatchConfig;
//! use chase_sim::{run_batch, NoopObserver};
//!
//! let result = run_batch(&config, &mut NoopObserver)?;
//! println!("{:?}", result.summary());
//! ```

pub mod batch;
pub mod error;
pub mod observer;
pub mod trial;


pub use batch::{run_batch, BatchResult, BatchSummary};
pub use error::{SimError, SimResult};
pub use observer::{BatchObserver, NoopObserver};
pub use trial::{Trial, TrialStatus};
