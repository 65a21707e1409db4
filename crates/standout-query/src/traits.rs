//! Runtime narrowing for heterogeneous sequences.
//!
//! This module provides the [`Variant`] trait used by
//! [`Sequence::of_type`](crate::Sequence::of_type) to keep only the elements
//! of a given shape.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

/// Trait for element types that may hold a value of type `U`.
///
/// Implemented for boxed and reference-counted `dyn Any`, where narrowing is
/// a runtime type check. Tagged enums implement it once per payload type.
///
/// # Tagged enum
///
/// ```
/// use standout_query::{Sequence, Variant};
///
/// #[derive(Clone)]
/// struct Circle(f64);
/// #[derive(Clone)]
/// struct Square(f64);
///
/// enum Shape {
///     Circle(Circle),
///     Square(Square),
/// }
///
/// impl Variant<Circle> for Shape {
///     fn as_variant(&self) -> Option<&Circle> {
///         match self {
///             Shape::Circle(c) => Some(c),
///             _ => None,
///         }
///     }
/// }
///
/// let shapes = Sequence::from(vec![
///     Shape::Circle(Circle(1.0)),
///     Shape::Square(Square(2.0)),
///     Shape::Circle(Circle(3.0)),
/// ]);
///
/// let circles: Sequence<Circle> = shapes.of_type();
/// assert_eq!(circles.len(), 2);
/// ```
///
/// # Dynamic values
///
/// ```
/// use std::any::Any;
/// use standout_query::Sequence;
///
/// let mixed: Sequence<Box<dyn Any>> =
///     Sequence::from(vec![Box::new(1i32) as Box<dyn Any>, Box::new("two"), Box::new(3i32)]);
///
/// let ints = mixed.of_type::<i32>();
/// assert_eq!(ints.into_vec(), vec![1, 3]);
/// ```
pub trait Variant<U> {
    /// Returns the payload when this value holds a `U`.
    fn as_variant(&self) -> Option<&U>;
}

impl<U: Any> Variant<U> for Box<dyn Any> {
    fn as_variant(&self) -> Option<&U> {
        (**self).downcast_ref::<U>()
    }
}

impl<U: Any> Variant<U> for Box<dyn Any + Send + Sync> {
    fn as_variant(&self) -> Option<&U> {
        (**self).downcast_ref::<U>()
    }
}

impl<U: Any> Variant<U> for Rc<dyn Any> {
    fn as_variant(&self) -> Option<&U> {
        (**self).downcast_ref::<U>()
    }
}

impl<U: Any> Variant<U> for Arc<dyn Any + Send + Sync> {
    fn as_variant(&self) -> Option<&U> {
        (**self).downcast_ref::<U>()
    }
}
