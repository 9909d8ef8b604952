//! Element access adapters between the engine and the collection.
//!
//! The engine addresses elements with zero-based indices in `[0, length)`
//! and knows nothing else. Whatever the collection's native protocol looks
//! like, an [`ElementAccess`] implementation hides it here.

use crate::dispatch::{Dispatch, MemberId, GETTER_MEMBER, SETTER_MEMBER};
use crate::error::{AccessError, BindError};
use crate::value::Variant;

/// Indexed element access the way the sorting engine sees it.
///
/// Both operations are fallible and relatively expensive; the engine is
/// written to spend as few of them as it can. `get` must not mutate the
/// collection, `set` overwrites the element at `index`.
pub trait ElementAccess {
    fn get(&mut self, index: usize) -> Result<Variant, AccessError>;

    fn set(&mut self, index: usize, value: Variant) -> Result<(), AccessError>;
}

/// Drives a [`Dispatch`] collection through its resolved getter and setter
/// members.
///
/// [`bind`] resolves both member names once; afterwards every `get`/`set`
/// is a single invocation. The protocol counts from one, the engine from
/// zero, and the translation lives entirely in this adapter.
///
/// [`bind`]: DispatchAdapter::bind
pub struct DispatchAdapter<'c, C: Dispatch + ?Sized> {
    collection: &'c mut C,
    getter: MemberId,
    setter: MemberId,
}

impl<'c, C: Dispatch + ?Sized> DispatchAdapter<'c, C> {
    /// Resolves [`GETTER_MEMBER`] and [`SETTER_MEMBER`] against
    /// `collection`. Must succeed before any element can be touched.
    pub fn bind(collection: &'c mut C) -> Result<Self, BindError> {
        let getter = collection
            .member_id(GETTER_MEMBER)
            .ok_or(BindError::UnknownMember {
                name: GETTER_MEMBER,
            })?;
        let setter = collection
            .member_id(SETTER_MEMBER)
            .ok_or(BindError::UnknownMember {
                name: SETTER_MEMBER,
            })?;

        Ok(DispatchAdapter {
            collection,
            getter,
            setter,
        })
    }

    fn foreign_index(index: usize) -> Variant {
        // The protocol counts from one.
        Variant::I64(index as i64 + 1)
    }
}

impl<C: Dispatch + ?Sized> ElementAccess for DispatchAdapter<'_, C> {
    fn get(&mut self, index: usize) -> Result<Variant, AccessError> {
        self.collection
            .invoke(self.getter, &[Self::foreign_index(index)])
    }

    fn set(&mut self, index: usize, value: Variant) -> Result<(), AccessError> {
        self.collection
            .invoke(self.setter, &[Self::foreign_index(index), value])?;
        Ok(())
    }
}

/// Direct access to a native variant slice.
///
/// For values that already live in local memory there is nothing to bind
/// and nothing to translate; this is the degenerate adapter the engine uses
/// in that case.
pub struct SliceAccess<'a> {
    items: &'a mut [Variant],
}

impl<'a> SliceAccess<'a> {
    pub fn new(items: &'a mut [Variant]) -> Self {
        SliceAccess { items }
    }
}

impl ElementAccess for SliceAccess<'_> {
    fn get(&mut self, index: usize) -> Result<Variant, AccessError> {
        self.items
            .get(index)
            .cloned()
            .ok_or(AccessError::OutOfBounds {
                index: index as i64,
                len: self.items.len(),
            })
    }

    fn set(&mut self, index: usize, value: Variant) -> Result<(), AccessError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(AccessError::OutOfBounds {
                index: index as i64,
                len,
            }),
        }
    }
}
