use cvncore::ac::{
    policy::ResourcePolicy,
    traits::{
        AttributeResolver,
        Enforcer,
    },
};
use std::sync::Arc;
use crate::{
    enforcer::PolicyEnforcer,
    error::Error,
};

/// Builds an access enforcer for a fetched resource.
///
/// Methods can be chained in order to set the configuration values.
/// The enforcer is constructed by calling [`build`](Builder::build).
///
/// New instances of the builder can be obtained via `Builder::default`
/// or `Builder::new`; a single builder carrying the session's attribute
/// resolver is typically reused across every resource a view fetched.
#[derive(Clone, Default)]
pub struct Builder {
    pub(crate) resource_policy: Option<ResourcePolicy>,
    pub(crate) resolver: Option<Arc<dyn AttributeResolver + Send + Sync>>,
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn resource_policy(mut self, val: ResourcePolicy) -> Self {
        self.resource_policy = Some(val);
        self
    }

    pub fn attribute_resolver(
        mut self,
        val: Arc<dyn AttributeResolver + Send + Sync>,
    ) -> Self {
        self.resolver = Some(val);
        self
    }

    pub fn build(&self) -> Result<Box<dyn Enforcer>, Error> {
        let policy = self.resource_policy
            .clone()
            .ok_or(Error::PolicyRequired)?;
        Ok(self.build_with_policy(policy))
    }

    pub fn build_with_policy(&self, policy: ResourcePolicy) -> Box<dyn Enforcer> {
        log::trace!("building a PolicyEnforcer for {:?}", policy.resource);
        let enforcer = PolicyEnforcer::from(policy);
        match &self.resolver {
            Some(resolver) => Box::new(
                enforcer.attribute_resolver(resolver.clone())
            ),
            None => Box::new(enforcer),
        }
    }
}

mod debug {
    use std::fmt::{Debug, Formatter, Result};
    use super::Builder;

    impl Debug for Builder {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.debug_struct("Builder")
                .field("resource_policy", &self.resource_policy)
                .field("resolver", &self.resolver.as_ref().map(|_| "dyn AttributeResolver"))
                .finish()
        }
    }
}
