pub mod error;

mod builder;
mod enforcer;
pub mod watch;

pub use builder::Builder;
pub use enforcer::{
    AttributeMap,
    PolicyEnforcer,
};
