mod executor;
pub use executor::{ExecutorKind, LabelSupport};
