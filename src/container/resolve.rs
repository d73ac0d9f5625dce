//! Resolution: binding dispatch, auto-wiring and singleton promotion.

use std::sync::Arc;
use std::time::Instant;

use super::{Container, ResolverContext};
use crate::activation::{Arguments, TypeDescriptor};
use crate::error::{DiError, DiResult};
use crate::key::ServiceId;
use crate::registration::{AnyArc, Binding, Entry};
use crate::traits::ResolverCore;

impl ResolverCore for Container {
    fn resolve_any(&self, id: &ServiceId) -> DiResult<AnyArc> {
        if !self.observers.has_observers() {
            return self.resolve_id(id);
        }

        let start = Instant::now();
        self.observers.resolving(id);
        let result = self.resolve_id(id);
        match &result {
            Ok(_) => self.observers.resolved(id, start.elapsed()),
            Err(e) => self.observers.failed(id, e),
        }
        result
    }
}

impl Container {
    fn resolve_id(&self, id: &ServiceId) -> DiResult<AnyArc> {
        let entry = self
            .registry
            .get(id)
            .ok_or(DiError::NotRegistered(id.type_name()))?;

        match &entry.binding {
            Binding::Instance(value) => Ok(value.clone()),
            // Checked before invoking so a mismatched singleton is never promoted.
            Binding::Factory { factory, .. } if factory.produces() != *id => {
                Err(DiError::TypeMismatch(id.type_name()))
            }
            binding if binding.lifetime().is_some_and(|l| l.is_singleton()) => {
                self.resolve_singleton(id, &entry)
            }
            binding => self.build(id, binding),
        }
    }

    /// Builds once per entry, then swaps the entry for an instance binding.
    ///
    /// Concurrent first resolutions of the same entry wait on its cell, so
    /// the factory or constructor runs exactly once. A failed build leaves
    /// the cell empty and the registry untouched.
    fn resolve_singleton(&self, id: &ServiceId, entry: &Arc<Entry>) -> DiResult<AnyArc> {
        let value = entry
            .cell
            .get_or_try_init(|| self.build(id, &entry.binding))?
            .clone();

        if self.registry.promote(id, entry, value.clone()) {
            tracing::debug!(service = id.type_name(), "promoted singleton to instance binding");
            self.observers.promoted(id);
        }
        Ok(value)
    }

    fn build(&self, id: &ServiceId, binding: &Binding) -> DiResult<AnyArc> {
        match binding {
            Binding::Instance(value) => Ok(value.clone()),
            Binding::Factory { factory, .. } => factory.invoke(&ResolverContext::new(self)),
            Binding::Type { descriptor, .. } => self.activate(id, descriptor),
        }
    }

    fn activate(&self, id: &ServiceId, descriptor: &TypeDescriptor) -> DiResult<AnyArc> {
        let capability = descriptor
            .capability(id)
            .ok_or(DiError::TypeMismatch(id.type_name()))?;
        let constructor = descriptor
            .select_constructor()
            .ok_or(DiError::NoConstructor(descriptor.type_name()))?;

        let mut values = Vec::with_capacity(constructor.arity());
        for param in constructor.params() {
            values.push(self.resolve_any(param)?);
        }
        tracing::trace!(
            service = id.type_name(),
            concrete = descriptor.type_name(),
            arity = constructor.arity(),
            "activating"
        );

        let concrete = constructor.invoke(Arguments::new(values))?;
        capability
            .cast(&concrete)
            .ok_or(DiError::TypeMismatch(id.type_name()))
    }
}
