//! Sibling ordering shared by every level of the curriculum tree.

use std::cmp::Ordering;

use crate::entities::{Group, Lesson, Module, Slide};

/// Anything that sorts among its siblings by `(order_index, id)`.
pub trait SiblingOrder {
    type Id: Ord;

    fn order_index(&self) -> Option<i32>;
    fn sibling_id(&self) -> Self::Id;
}

/// `order_index` ascending (missing = 0), ties broken by id ascending.
pub fn compare_siblings<T: SiblingOrder>(a: &T, b: &T) -> Ordering {
    a.order_index()
        .unwrap_or(0)
        .cmp(&b.order_index().unwrap_or(0))
        .then_with(|| a.sibling_id().cmp(&b.sibling_id()))
}

/// Sort in place with [`compare_siblings`].
pub fn sort_siblings<T: SiblingOrder>(items: &mut [T]) {
    items.sort_by(compare_siblings);
}

macro_rules! impl_sibling_order {
    ($entity:ty, $id:ty) => {
        impl SiblingOrder for $entity {
            type Id = $id;

            fn order_index(&self) -> Option<i32> {
                self.order_index
            }

            fn sibling_id(&self) -> Self::Id {
                self.id
            }
        }
    };
}

impl_sibling_order!(Module, crate::ids::ModuleId);
impl_sibling_order!(Lesson, crate::ids::LessonId);
impl_sibling_order!(Group, crate::ids::GroupId);
impl_sibling_order!(Slide, crate::ids::SlideId);
