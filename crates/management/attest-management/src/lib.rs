//! attest-management
//! Administration layers that decide who may grant document creation rights
//! on a verification engine. `ManagementSingle` has one owner bound to one
//! engine; `ManagementMulti` lets its owner delegate each engine to a
//! separate controller.

pub mod administration;
pub mod error;
pub mod multi;
pub mod ownable;
pub mod single;

pub use administration::{Administration, CreatorAdministration};
pub use error::ManagementError;
pub use multi::ManagementMulti;
pub use ownable::Ownable;
pub use single::ManagementSingle;
