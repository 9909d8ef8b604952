//! The late-bound member protocol foreign collections speak.
//!
//! A collection exposes named member operations. Callers resolve a name to a
//! [`MemberId`] once, then invoke it with positional [`Variant`] arguments.
//! Both steps can fail and every invocation is dynamically dispatched, which
//! is what makes element access expensive compared to a slice index.
//!
//! Index arguments in this protocol count from one, following the scripting
//! hosts the protocol is modeled on. The translation from the engine's
//! zero-based indices happens in [`crate::access::DispatchAdapter`], never
//! here.

use crate::error::AccessError;
use crate::value::Variant;

/// Name of the element getter member, `getter(index) -> element`.
pub const GETTER_MEMBER: &str = "Get";

/// Name of the element setter member, `setter(index, element)`.
pub const SETTER_MEMBER: &str = "__Item";

/// A resolved member operation. Only meaningful to the collection that
/// produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberId(pub u32);

/// A foreign, dynamically typed collection.
///
/// Implementations own their element storage and indexing convention; the
/// sorter only ever talks to them through [`member_id`] and [`invoke`].
/// A sortable collection must resolve [`GETTER_MEMBER`] and
/// [`SETTER_MEMBER`].
///
/// [`member_id`]: Dispatch::member_id
/// [`invoke`]: Dispatch::invoke
pub trait Dispatch {
    /// Resolves a member name. `None` if the collection has no such member.
    fn member_id(&self, name: &str) -> Option<MemberId>;

    /// Invokes a resolved member with positional arguments.
    fn invoke(&mut self, member: MemberId, args: &[Variant]) -> Result<Variant, AccessError>;
}

/// A variant vector speaking the dispatch protocol.
///
/// This is the reference collection: one-based indices, `Get` to read,
/// `__Item` to write, with arity, argument type, and bounds checking on
/// every call. Tests and benches sort through it, and it doubles as the
/// worked example of what a [`Dispatch`] implementation owes the sorter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VariantArray {
    items: Vec<Variant>,
}

impl VariantArray {
    const GET: MemberId = MemberId(1);
    const SET: MemberId = MemberId(2);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Variant>,
    {
        VariantArray {
            items: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, value: impl Into<Variant>) {
        self.items.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The elements in storage order, for inspection after a sort.
    pub fn values(&self) -> &[Variant] {
        &self.items
    }

    /// Translates the one-based index argument of `member` into a storage
    /// slot.
    fn slot(&self, member: &'static str, args: &[Variant]) -> Result<usize, AccessError> {
        let index_arg = &args[0];
        let index = index_arg
            .as_i64()
            .ok_or_else(|| AccessError::InvalidArgument {
                member,
                expected: "integer index",
                actual: index_arg.type_name(),
            })?;

        if index < 1 || index as usize > self.items.len() {
            return Err(AccessError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        Ok(index as usize - 1)
    }
}

impl Dispatch for VariantArray {
    fn member_id(&self, name: &str) -> Option<MemberId> {
        match name {
            GETTER_MEMBER => Some(Self::GET),
            SETTER_MEMBER => Some(Self::SET),
            _ => None,
        }
    }

    fn invoke(&mut self, member: MemberId, args: &[Variant]) -> Result<Variant, AccessError> {
        match member {
            Self::GET => {
                if args.len() != 1 {
                    return Err(AccessError::InvalidArity {
                        member: GETTER_MEMBER,
                        expected: 1,
                        actual: args.len(),
                    });
                }

                let slot = self.slot(GETTER_MEMBER, args)?;
                Ok(self.items[slot].clone())
            }
            Self::SET => {
                if args.len() != 2 {
                    return Err(AccessError::InvalidArity {
                        member: SETTER_MEMBER,
                        expected: 2,
                        actual: args.len(),
                    });
                }

                let slot = self.slot(SETTER_MEMBER, args)?;
                self.items[slot] = args[1].clone();
                Ok(Variant::Null)
            }
            _ => Err(AccessError::UnknownMember { member }),
        }
    }
}
