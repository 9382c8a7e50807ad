//! Record storage and the post-run repair hook

mod repair;
mod store;

pub use repair::{GapFileRepair, StoreRepair};
pub use store::RecordStore;
