// ! attest-verification: the document verification engine
// !
// ! Holds document and creator allowance state for one engine instance and
// ! enforces creation, signing, revocation and deadline rules.

pub mod engine;
pub mod store;

pub use engine::{DocumentVerification, MIN_REQUESTED_SIGNERS};
pub use store::{CreatorStore, DocumentStore};
