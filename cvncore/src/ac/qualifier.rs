use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};

/// Fine-grained same-job qualifier attached to a granted permission.
///
/// Qualifiers only ever extend access between an actor and a resource
/// creator holding the same job; they carry no meaning across jobs.
#[non_exhaustive]
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    Any,
    LowerRank,
    SameRank,
    Own,
}

/// The set of qualifiers resolved for a single permission field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Qualifiers(pub EnumSet<Qualifier>);

mod impls;
