//! Registry of specialized jet builders, keyed by vector-field identity.
//!
//! A specialized builder is a pre-analyzed replacement for the generic
//! Picard recursion of [`picard::jet_coeffs_vec`](crate::picard): for a
//! specific vector field it may exploit the field's structure to fill the
//! jet faster. The generic builder remains semantically authoritative: a
//! specialization must produce identical coefficients in the same ring,
//! so the registry is purely a performance lever.
//!
//! Identity is the field value's type: every closure has a distinct type,
//! so `TypeId` keys one builder per field. The registry is an explicit
//! argument to the vector entry points, never process-wide state.

use std::any::TypeId;
use std::collections::HashMap;

use crate::coeff::Coeff;
use crate::error::JetError;
use crate::jet::Jet;

/// A specialized whole-jet builder: `(x, dx, xaux, t, params)`.
///
/// Must fill every coefficient of `x` up to its order, starting from the
/// seeded coefficient 0, using `dx`/`xaux` as scratch. Returns `Err` to
/// decline (the driver falls back to the generic builder).
pub type SpecializedJet<U, P> = Box<
    dyn Fn(
            &mut [Jet<U>],
            &mut [Jet<U>],
            &mut [Jet<U>],
            &Jet<<U as Coeff>::Real>,
            &P,
        ) -> Result<(), JetError>
        + Send
        + Sync,
>;

/// Map from vector-field identity to its specialized jet builder.
pub struct JetRegistry<U: Coeff, P> {
    builders: HashMap<TypeId, SpecializedJet<U, P>>,
}

impl<U: Coeff, P> JetRegistry<U, P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        JetRegistry {
            builders: HashMap::new(),
        }
    }

    /// Register a specialized builder for the field `f`.
    ///
    /// Only the type of `f` matters; the reference pins the key to the
    /// value the caller will pass to the driver. Registering twice for
    /// the same field type replaces the earlier builder.
    pub fn register<F: 'static>(&mut self, _f: &F, builder: SpecializedJet<U, P>) {
        self.builders.insert(TypeId::of::<F>(), builder);
    }

    /// Look up the specialized builder for the field `f`, if any.
    pub fn lookup<F: 'static>(&self, _f: &F) -> Option<&SpecializedJet<U, P>> {
        self.builders.get(&TypeId::of::<F>())
    }

    /// Number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// True if no builder is registered.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<U: Coeff, P> Default for JetRegistry<U, P> {
    fn default() -> Self {
        Self::new()
    }
}
