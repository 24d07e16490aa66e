//! Identity shape shared by every record contract.
//!
//! # Responsibility
//! - Define what counts as a usable record identifier.
//! - Provide the `Identified` accessor trait the other contracts build on.
//!
//! # Invariants
//! - An identifier is stable for the lifetime of its record and never reused.
//! - Every identifier has a textual form (`Display`) usable in logs and errors.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// Default concrete record identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Opaque reference to the acting principal recorded in audit fields.
///
/// The contracts do not interpret the value; consuming codebases decide
/// whether it holds a user id, a service name, or something else.
pub type ActorRef = String;

/// Shorthand for the identifier type of an identified shape.
pub type IdOf<E> = <E as Identified>::Id;

/// Bound alias for types usable as record identifiers.
///
/// Anything satisfying the bounds is an identifier; the blanket impl means
/// consuming codebases never implement this trait by hand.
pub trait EntityId: Clone + Eq + Hash + Debug + Display + Send + Sync {}

impl<T> EntityId for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync {}

/// Accessor contract for shapes carrying a stable identifier.
pub trait Identified {
    /// Identifier type of this shape.
    type Id: EntityId;

    /// Returns the stable identifier.
    fn id(&self) -> &Self::Id;

    /// Textual projection of the identifier, for serialization and logs.
    fn id_text(&self) -> String {
        self.id().to_string()
    }
}
