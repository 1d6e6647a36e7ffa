//! Pattern: Observer
//!
//! A generic [`Observer`] wraps an update callback for a subject type `S` and
//! a state tag. Subjects keep only weak references in an [`ObserverList`],
//! so whoever owns the observer (usually an [`ObserverHandle`]) decides how
//! long it lives; a dropped observer simply stops being notified.
//!
//! Run with: cargo run --bin generic_observer

pub mod timestep;

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

pub struct Observer<S, Tag> {
    on_update: Box<dyn Fn(&S, Tag)>,
}

impl<S, Tag> Observer<S, Tag> {
    pub fn new(on_update: impl Fn(&S, Tag) + 'static) -> Self {
        Observer {
            on_update: Box::new(on_update),
        }
    }

    /// Called by the subject after `change` happened.
    pub fn update(&self, subject: &S, change: Tag) {
        (self.on_update)(subject, change);
    }
}

/// A subject that can register observers and tell them about state changes.
pub trait Observable: Sized {
    type StateChange: Copy;

    /// `false` if the observer was already attached.
    fn attach(&mut self, observer: &Rc<Observer<Self, Self::StateChange>>) -> bool;

    /// `false` if the observer was not attached.
    fn detach(&mut self, observer: &Rc<Observer<Self, Self::StateChange>>) -> bool;

    fn notify(&self, change: Self::StateChange);
}

/// Subject-side registry of observers, held weakly and notified in attach order.
pub struct ObserverList<S, Tag> {
    observers: Vec<Weak<Observer<S, Tag>>>,
}

impl<S, Tag: Copy> ObserverList<S, Tag> {
    pub fn new() -> Self {
        ObserverList {
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: &Rc<Observer<S, Tag>>) -> bool {
        self.prune();
        let candidate = Rc::downgrade(observer);
        if self.observers.iter().any(|o| o.ptr_eq(&candidate)) {
            return false;
        }
        self.observers.push(candidate);
        tracing::debug!(observers = self.observers.len(), "observer attached");
        true
    }

    pub fn detach(&mut self, observer: &Rc<Observer<S, Tag>>) -> bool {
        self.prune();
        let candidate = Rc::downgrade(observer);
        match self.observers.iter().position(|o| o.ptr_eq(&candidate)) {
            Some(pos) => {
                self.observers.remove(pos);
                tracing::debug!(observers = self.observers.len(), "observer detached");
                true
            }
            None => false,
        }
    }

    pub fn notify(&self, subject: &S, change: Tag) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            observer.update(subject, change);
        }
    }

    /// Number of observers still alive.
    pub fn len(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.observers.retain(|o| o.strong_count() > 0);
    }
}

impl<S, Tag: Copy> Default for ObserverList<S, Tag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, Tag> fmt::Debug for ObserverList<S, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("registered", &self.observers.len())
            .finish()
    }
}

/// Owns an observer for as long as it should receive updates.
pub struct ObserverHandle<S: Observable> {
    observer: Rc<Observer<S, S::StateChange>>,
}

impl<S: Observable> ObserverHandle<S> {
    pub fn observer(&self) -> &Rc<Observer<S, S::StateChange>> {
        &self.observer
    }
}

impl<S: Observable + 'static> ObserverHandle<S> {
    /// Forget the subject type; the handle now only keeps the observer alive.
    pub fn into_unique(self) -> UniqueObserverHandle {
        Box::new(self.observer)
    }
}

/// Type-erased lifetime handle, for holding observers of different subjects together.
pub type UniqueObserverHandle = Box<dyn Any>;

pub fn make_observer_handle<S, F>(on_update: F) -> ObserverHandle<S>
where
    S: Observable,
    F: Fn(&S, S::StateChange) + 'static,
{
    ObserverHandle {
        observer: Rc::new(Observer::new(on_update)),
    }
}

// ============================================================================
// Example subject
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooChange {
    DoA,
    DoB,
}

#[derive(Debug, Default)]
pub struct Foo {
    observers: ObserverList<Foo, FooChange>,
}

impl Foo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doing_a(&self) {
        println!("Foo::doing_a is called");
        self.notify(FooChange::DoA);
    }

    pub fn doing_b(&self) {
        println!("Foo::doing_b is called");
        self.notify(FooChange::DoB);
    }
}

impl Observable for Foo {
    type StateChange = FooChange;

    fn attach(&mut self, observer: &Rc<Observer<Self, FooChange>>) -> bool {
        self.observers.attach(observer)
    }

    fn detach(&mut self, observer: &Rc<Observer<Self, FooChange>>) -> bool {
        self.observers.detach(observer)
    }

    fn notify(&self, change: FooChange) {
        self.observers.notify(self, change);
    }
}
