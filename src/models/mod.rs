mod website;
mod version;
mod chat;

pub use website::*;
pub use version::*;
pub use chat::*;
