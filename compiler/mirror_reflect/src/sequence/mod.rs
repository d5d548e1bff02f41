//! Object sequences.
//!
//! Plural results (members, enumerators, bases) are [`ObjectSequence`]s:
//! ordered, fixed-size and indexable. Order is declaration order and is
//! part of the contract. [`Unpack`] converts a sequence into other
//! collection shapes, checking that the element count fits exactly.

use smallvec::SmallVec;

use crate::{Concept, Metaobject, ReflectError};

/// Ordered, immutable collection of metaobjects.
///
/// Most records have a handful of members, so the first four are stored
/// inline.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ObjectSequence {
    elements: SmallVec<[Metaobject; 4]>,
}

impl ObjectSequence {
    pub(crate) fn from_elements(elements: SmallVec<[Metaobject; 4]>) -> Self {
        ObjectSequence { elements }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`.
    pub fn element(&self, index: usize) -> Result<Metaobject, ReflectError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(ReflectError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Metaobject>> {
        self.elements.iter().copied()
    }

    pub fn as_slice(&self) -> &[Metaobject] {
        &self.elements
    }

    /// Convert into `T`, preserving order.
    pub fn unpack<T: Unpack>(&self) -> Result<T, ReflectError> {
        T::unpack(&self.elements)
    }

    /// Sequences satisfy `Object` and `ObjectSequence` and nothing else.
    pub fn satisfies(&self, concept: Concept) -> bool {
        matches!(concept, Concept::Object | Concept::ObjectSequence)
    }
}

impl<'a> IntoIterator for &'a ObjectSequence {
    type Item = Metaobject;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Metaobject>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Metaobject> for ObjectSequence {
    fn from_iter<I: IntoIterator<Item = Metaobject>>(iter: I) -> Self {
        ObjectSequence {
            elements: iter.into_iter().collect(),
        }
    }
}

/// A collection shape an [`ObjectSequence`] can be unpacked into.
///
/// Implemented for arrays, tuples of up to eight metaobjects, `Vec` and
/// `SmallVec`. Fixed-arity shapes fail with
/// [`ReflectError::ArityMismatch`] when the element count differs.
pub trait Unpack: Sized {
    fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError>;
}

fn expect_arity(elements: &[Metaobject], expected: usize) -> Result<(), ReflectError> {
    if elements.len() == expected {
        Ok(())
    } else {
        Err(ReflectError::ArityMismatch {
            expected,
            found: elements.len(),
        })
    }
}

impl<const N: usize> Unpack for [Metaobject; N] {
    fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError> {
        expect_arity(elements, N)?;
        <[Metaobject; N]>::try_from(elements).map_err(|_| ReflectError::ArityMismatch {
            expected: N,
            found: elements.len(),
        })
    }
}

impl Unpack for Vec<Metaobject> {
    fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError> {
        Ok(elements.to_vec())
    }
}

impl<const N: usize> Unpack for SmallVec<[Metaobject; N]> {
    fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError> {
        Ok(SmallVec::from_slice(elements))
    }
}

impl Unpack for () {
    fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError> {
        expect_arity(elements, 0)
    }
}

macro_rules! impl_unpack_tuple {
    (@elem $idx:tt) => { Metaobject };
    ($len:expr => $($idx:tt),+) => {
        impl Unpack for ($(impl_unpack_tuple!(@elem $idx),)+) {
            fn unpack(elements: &[Metaobject]) -> Result<Self, ReflectError> {
                expect_arity(elements, $len)?;
                Ok(($(elements[$idx],)+))
            }
        }
    };
}

impl_unpack_tuple!(1 => 0);
impl_unpack_tuple!(2 => 0, 1);
impl_unpack_tuple!(3 => 0, 1, 2);
impl_unpack_tuple!(4 => 0, 1, 2, 3);
impl_unpack_tuple!(5 => 0, 1, 2, 3, 4);
impl_unpack_tuple!(6 => 0, 1, 2, 3, 4, 5);
impl_unpack_tuple!(7 => 0, 1, 2, 3, 4, 5, 6);
impl_unpack_tuple!(8 => 0, 1, 2, 3, 4, 5, 6, 7);
