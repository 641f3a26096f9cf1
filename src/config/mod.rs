pub mod options;
pub use options::{DescentOptions, Kernel};
