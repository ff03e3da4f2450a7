//! Generic form machinery: closed enumerations, the answer store with its
//! visibility sweep, and repeated sub-record operations.

pub mod options;
pub mod repeater;
pub mod store;

pub use options::{FormEnum, SelectOption, enum_to_options};
pub use store::{FormStore, VisibilityRule};
