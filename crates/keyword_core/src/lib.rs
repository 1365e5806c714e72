//! Keyword core: pure dashboard state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{DocumentSource, Effect};
pub use msg::{FetchedPage, Msg};
pub use state::{AppState, RequestId, Status, BAR_TOP_N_RANGE, CLOUD_TOP_N_RANGE};
pub use update::update;
pub use view_model::{AppViewModel, StatusView};
