use crate::models::{Contest, Question, Quiz, Subject};

/// Records that carry a collection-unique integer id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Subject {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Contest {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Question {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Quiz {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Next id for a collection: 1 when empty, otherwise the current maximum plus one.
///
/// Only the live maximum counts, so deleting the highest id frees it for reuse.
/// Returns `None` once the maximum is `i64::MAX`.
pub fn next_id<T: Identified>(items: &[T]) -> Option<i64> {
    match items.iter().map(Identified::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
