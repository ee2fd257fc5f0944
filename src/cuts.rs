mod cut;
mod stoer_wagner;

pub use cut::Cut;
pub use stoer_wagner::global_min_cut;
pub use stoer_wagner::MinCutError;
