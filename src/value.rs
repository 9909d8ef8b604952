//! The dynamically typed element values the sorter moves around.
//!
//! A [`Variant`] is an independent copy of whatever the foreign collection
//! handed out. Mutating one has no effect on the collection until it is
//! written back through a setter invocation.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Discriminant of a [`Variant`], without the payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantKind {
    I32,
    I64,
    F64,
    Bool,
    Str,
    Null,
    Object,
}

/// A tagged dynamic value.
///
/// Equality is tag plus payload, except for [`Variant::Object`] where two
/// values are equal only if they reference the same object.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    I32(i32),
    I64(i64),
    F64(f64),
    Bool(bool),
    Str(String),
    Null,
    Object(ObjectRef),
}

impl Variant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::I32(_) => VariantKind::I32,
            Variant::I64(_) => VariantKind::I64,
            Variant::F64(_) => VariantKind::F64,
            Variant::Bool(_) => VariantKind::Bool,
            Variant::Str(_) => VariantKind::Str,
            Variant::Null => VariantKind::Null,
            Variant::Object(_) => VariantKind::Object,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::I32(_) => "i32",
            Variant::I64(_) => "i64",
            Variant::F64(_) => "f64",
            Variant::Bool(_) => "bool",
            Variant::Str(_) => "string",
            Variant::Null => "null",
            Variant::Object(_) => "object",
        }
    }

    /// The integer payload, widening `I32`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Variant::I32(val) => Some(val as i64),
            Variant::I64(val) => Some(val),
            _ => None,
        }
    }

    /// The numeric payload as a float. `I64` values beyond 2^53 lose
    /// precision here, integer comparisons should go through [`as_i64`]
    /// first.
    ///
    /// [`as_i64`]: Variant::as_i64
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Variant::I32(val) => Some(val as f64),
            Variant::I64(val) => Some(val as f64),
            Variant::F64(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Variant::Bool(val) => Some(val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::Str(val) => Some(val),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }
}

impl From<i32> for Variant {
    fn from(val: i32) -> Self {
        Variant::I32(val)
    }
}

impl From<i64> for Variant {
    fn from(val: i64) -> Self {
        Variant::I64(val)
    }
}

impl From<f64> for Variant {
    fn from(val: f64) -> Self {
        Variant::F64(val)
    }
}

impl From<bool> for Variant {
    fn from(val: bool) -> Self {
        Variant::Bool(val)
    }
}

impl From<&str> for Variant {
    fn from(val: &str) -> Self {
        Variant::Str(val.to_string())
    }
}

impl From<String> for Variant {
    fn from(val: String) -> Self {
        Variant::Str(val)
    }
}

impl From<ObjectRef> for Variant {
    fn from(val: ObjectRef) -> Self {
        Variant::Object(val)
    }
}

/// An opaque reference to some foreign object.
///
/// The sorter never looks inside, it only moves the reference around.
/// Cloning is cheap and equality is reference identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn Any>);

impl ObjectRef {
    pub fn new<T: 'static>(value: T) -> Self {
        ObjectRef(Rc::new(value))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({:p})", Rc::as_ptr(&self.0))
    }
}

/// Ascending order over integer and float variants.
///
/// Integers compare exactly, mixed integer/float pairs compare as floats via
/// `total_cmp`. Values without a numeric interpretation sort after all
/// numbers, grouped by kind and unordered within a group.
pub fn numeric_order(a: &Variant, b: &Variant) -> Ordering {
    match (a.as_i64(), b.as_i64()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.kind().cmp(&b.kind()),
        },
    }
}

/// Ascending lexicographic order over string variants.
///
/// Non-string values sort after all strings, grouped by kind and unordered
/// within a group.
pub fn lexical_order(a: &Variant, b: &Variant) -> Ordering {
    match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.kind().cmp(&b.kind()),
    }
}
