mod manager;
mod persistence;

pub use manager::{CostStateManager, RestoreReport};
pub use persistence::{load_session, save_session, SessionSnapshot};
