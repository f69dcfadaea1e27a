use tokio::sync::watch;

/// A named reactive slot in a component's state.
///
/// Every write through [`TrackedField::set`] or [`TrackedField::update`]
/// notifies all current subscribers. A subscription is the returned
/// [`watch::Receiver`]; dropping the receiver unsubscribes.
///
/// Reads never block: [`TrackedField::get`] clones the current value.
pub struct TrackedField<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> TrackedField<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers, whether or not the new
    /// value differs from the old one.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Subscribes to changes. The receiver observes the value as of the
    /// subscription and wakes on every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for TrackedField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
