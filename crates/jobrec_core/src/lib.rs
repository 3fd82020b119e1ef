//! Jobrec core: pure store state machine and view-model helpers.
mod effect;
mod job;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use job::Job;
pub use msg::{FetchFailure, FetchedJobs, Msg};
pub use state::{StoreState, NO_JOBS_FOUND, SKILLS_HINT};
pub use update::update;
pub use view_model::StoreViewModel;
