//! Ownership of live chart instances, keyed by chart target id.
//!
//! A target holds at most one instance. Installing a chart on a target that
//! already has one destroys the old instance before the new one is created.

use std::collections::BTreeMap;

use charming::Chart;

use crate::charts::ChartKind;

/// A charting library that turns chart options into live instances.
pub trait ChartBackend {
    /// The live object the library hands back for a rendered chart.
    type Instance;

    /// Draws `chart` into the surface with id `target`.
    fn create(&mut self, target: &str, kind: ChartKind, chart: Chart) -> Self::Instance;

    /// Tears down `instance` and releases its drawing surface.
    fn destroy(&mut self, instance: Self::Instance);
}

/// The live chart instance for each chart target.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    instances: BTreeMap<String, B::Instance>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    /// An empty registry that creates instances with `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instances: BTreeMap::new(),
        }
    }

    /// Creates an instance of `chart` on `target`, destroying any instance
    /// already bound to it first.
    pub fn install(&mut self, target: &str, kind: ChartKind, chart: Chart) -> &B::Instance {
        if let Some(previous) = self.instances.remove(target) {
            tracing::debug!("destroying previous chart on #{target}");
            self.backend.destroy(previous);
        }

        tracing::debug!("creating {kind:?} chart on #{target}");
        let instance = self.backend.create(target, kind, chart);

        self.instances.entry(target.to_owned()).or_insert(instance)
    }

    /// The instance bound to `target`, if any.
    pub fn get(&self, target: &str) -> Option<&B::Instance> {
        self.instances.get(target)
    }

    /// Whether an instance is bound to `target`.
    pub fn contains(&self, target: &str) -> bool {
        self.instances.contains_key(target)
    }

    /// Destroys the instance bound to `target`.
    ///
    /// Returns `false` if there was nothing to destroy.
    pub fn destroy(&mut self, target: &str) -> bool {
        match self.instances.remove(target) {
            Some(instance) => {
                tracing::debug!("destroying chart on #{target}");
                self.backend.destroy(instance);
                true
            }
            None => false,
        }
    }

    /// Destroys every live instance, as happens when the page unloads.
    pub fn destroy_all(&mut self) {
        for (target, instance) in std::mem::take(&mut self.instances) {
            tracing::debug!("destroying chart on #{target}");
            self.backend.destroy(instance);
        }
    }

    /// The number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether there are no live instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// The live instances ordered by target id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &B::Instance)> {
        self.instances
            .iter()
            .map(|(target, instance)| (target.as_str(), instance))
    }

    /// The backend that creates and destroys instances.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
pub(crate) mod test_backend {
    use charming::Chart;

    use crate::{charts::ChartKind, registry::ChartBackend};

    /// Something the recording backend was asked to do.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Event {
        Created { handle: usize, target: String, kind: ChartKind },
        Destroyed { handle: usize },
    }

    /// A backend that hands out numbered handles and records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBackend {
        pub(crate) events: Vec<Event>,
        next_handle: usize,
    }

    impl RecordingBackend {
        /// Handles that have been created and not destroyed.
        pub(crate) fn live_handles(&self) -> Vec<usize> {
            let mut live = Vec::new();

            for event in &self.events {
                match event {
                    Event::Created { handle, .. } => live.push(*handle),
                    Event::Destroyed { handle } => live.retain(|live| live != handle),
                }
            }

            live
        }
    }

    impl ChartBackend for RecordingBackend {
        type Instance = usize;

        fn create(&mut self, target: &str, kind: ChartKind, _chart: Chart) -> usize {
            let handle = self.next_handle;
            self.next_handle += 1;
            self.events.push(Event::Created {
                handle,
                target: target.to_owned(),
                kind,
            });
            handle
        }

        fn destroy(&mut self, instance: usize) {
            self.events.push(Event::Destroyed { handle: instance });
        }
    }
}
