// Turning parse failures into something a person can act on

mod diagnostic;
mod format;
mod messages;

// Re-export all public symbols
pub use diagnostic::*;
pub use format::*;
pub use messages::*;
