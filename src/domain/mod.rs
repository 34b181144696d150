pub mod admin;
pub mod announcement;
pub mod contact;
pub mod event;
pub mod registration;

pub use admin::*;
pub use announcement::*;
pub use contact::*;
pub use event::*;
pub use registration::*;
