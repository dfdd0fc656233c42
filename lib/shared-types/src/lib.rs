//! Id newtypes shared between the domain core, the data layer and the REST
//! server. Every entity id wraps a [`uuid::Uuid`] and is stored in the
//! database as its canonical string form.

mod macros;

mod organisation;
mod people;
mod scheduling;

pub use organisation::*;
pub use people::*;
pub use scheduling::*;
