use enumset::EnumSet;
use std::{
    fmt,
    str::FromStr,
};
use crate::{
    ac::{
        actor::Actor,
        owner::Owner,
    },
    error::ValueError,
};
use super::{Qualifier, Qualifiers};

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Qualifier> for &'static str {
    fn from(qualifier: Qualifier) -> &'static str {
        match qualifier {
            Qualifier::Any => "any",
            Qualifier::LowerRank => "lower_rank",
            Qualifier::SameRank => "same_rank",
            Qualifier::Own => "own",
        }
    }
}

impl FromStr for Qualifier {
    type Err = ValueError;

    // upstream call sites disagree on token casing, so comparison is
    // done on the lowercased form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "any" => Ok(Qualifier::Any),
            "lower_rank" => Ok(Qualifier::LowerRank),
            "same_rank" => Ok(Qualifier::SameRank),
            "own" => Ok(Qualifier::Own),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl FromIterator<Qualifier> for Qualifiers {
    fn from_iter<I: IntoIterator<Item=Qualifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect::<EnumSet<_>>())
    }
}

impl From<Qualifier> for Qualifiers {
    fn from(qualifier: Qualifier) -> Self {
        Self(EnumSet::only(qualifier))
    }
}

impl Qualifiers {
    /// Collect a set from raw tokens, skipping the ones outside the
    /// known vocabulary.  An unknown token can only narrow access, so
    /// it is dropped rather than treated as an error.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item=&'a str>) -> Self {
        Self(tokens.into_iter()
            .filter_map(|token| Qualifier::from_str(token)
                .map_err(|_| log::debug!("skipping unknown qualifier token {token:?}"))
                .ok()
            )
            .collect::<EnumSet<_>>()
        )
    }

    /// Whether this set extends the actor's access to a resource
    /// created by the owner.
    ///
    /// Only applicable between an actor and owner of the same job; the
    /// empty set defers to the creator check.  Rules apply in a fixed
    /// priority, first full match wins.
    pub fn permits(&self, owner: &Owner, actor: &Actor) -> bool {
        if owner.job != actor.job {
            return false;
        }
        if self.0.is_empty() {
            return owner.is(actor);
        }
        if self.0.contains(Qualifier::Any) {
            return true;
        }
        if self.0.contains(Qualifier::LowerRank) && owner.job_grade < actor.job_grade {
            return true;
        }
        if self.0.contains(Qualifier::SameRank) && owner.job_grade <= actor.job_grade {
            return true;
        }
        self.0.contains(Qualifier::Own) && owner.is(actor)
    }
}
