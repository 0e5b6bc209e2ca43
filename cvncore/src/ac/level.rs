use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

/// Ordinal access tier attached to a grant.
///
/// A grant at some level satisfies any requested level at or below it.
/// The wire form is the ordinal; ordinals outside the known range
/// convert to `Blocked`.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
    FromPrimitive, IntoPrimitive, Deserialize, Serialize,
)]
#[repr(i32)]
#[serde(from = "i32", into = "i32")]
pub enum Level {
    // catch-all for whenever infallable conversion is needed
    #[default]
    Blocked = 0,
    View = 1,
    Comment = 2,
    Access = 3,
    Edit = 4,
}

mod impls;
