pub mod diagnostic;
pub mod error;
pub mod types;

pub use diagnostic::*;
pub use error::ScenarioError;
pub use types::*;
