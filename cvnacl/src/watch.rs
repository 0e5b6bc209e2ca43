use cvncore::ac::actor::Actor;
use parking_lot::{Mutex, RwLock};
use std::{
    collections::HashMap,
    sync::Arc,
};

type Callback = Box<dyn Fn(&Actor) + Send + Sync>;

/// Key returned by [`ActorCell::subscribe`] for later removal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

#[derive(Default)]
struct Subscribers {
    serial: u64,
    callbacks: HashMap<u64, Callback>,
}

/// Holds the actor snapshot shared by every evaluation a view makes.
///
/// The enforcers themselves stay pure functions of their inputs; this
/// cell is the invalidation boundary.  When the underlying session
/// identity changes (character switch, permission update push) the
/// snapshot is replaced through [`replace`](ActorCell::replace) and
/// every subscriber is notified so dependent evaluations can be redone
/// against the new snapshot.
pub struct ActorCell {
    actor: RwLock<Arc<Actor>>,
    subscribers: Mutex<Subscribers>,
}

impl ActorCell {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor: RwLock::new(Arc::new(actor)),
            subscribers: Mutex::new(Subscribers::default()),
        }
    }

    /// The current snapshot; holds no lock beyond the clone.
    pub fn snapshot(&self) -> Arc<Actor> {
        self.actor.read().clone()
    }

    /// Replace the snapshot and notify every subscriber with the new
    /// actor.
    pub fn replace(&self, actor: Actor) {
        let actor = Arc::new(actor);
        *self.actor.write() = actor.clone();
        // lock held through notification; callbacks must not reenter
        // the cell
        let subscribers = self.subscribers.lock();
        log::trace!(
            "actor snapshot replaced, notifying {} subscriber(s)",
            subscribers.callbacks.len(),
        );
        for callback in subscribers.callbacks.values() {
            callback(&actor);
        }
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&Actor) + Send + Sync + 'static,
    ) -> Subscription {
        let mut subscribers = self.subscribers.lock();
        subscribers.serial += 1;
        let key = subscribers.serial;
        subscribers.callbacks.insert(key, Box::new(callback));
        Subscription(key)
    }

    /// Drop the callback; returns whether it was still registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.subscribers
            .lock()
            .callbacks
            .remove(&subscription.0)
            .is_some()
    }
}
