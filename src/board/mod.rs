//! Board entities: tiles on the grid, hotels and their share ledgers.
//!
//! - `Board`: singletons and active hotels, with placement invariants
//! - `Hotel`: tile set plus certificate ledger, share cap enforced
//! - `Certificate`: shares of one hotel held by one owner
//! - `connected_group`: flood fill used for founding

pub mod certificate;
pub mod connectivity;
pub mod hotel;
pub mod state;

pub use certificate::Certificate;
pub use connectivity::{connected_group, is_connected};
pub use hotel::Hotel;
pub use state::{Board, Occupant};
