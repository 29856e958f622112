use std::collections::VecDeque;

use crate::constraints::ConstraintId;
use crate::containers::KeyedVec;
use crate::quince_asserts::quince_assert_moderate;

/// A FIFO queue of constraints in which every constraint is present at most once.
///
/// Membership is tracked with a flag per constraint so that enqueueing is constant time.
#[derive(Debug, Clone)]
pub(crate) struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    is_enqueued: KeyedVec<ConstraintId, bool>,
}

impl ConstraintQueue {
    pub(crate) fn new(num_constraints: usize) -> ConstraintQueue {
        ConstraintQueue {
            queue: VecDeque::with_capacity(num_constraints),
            is_enqueued: KeyedVec::filled(num_constraints, false),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Adds the constraint to the back of the queue unless it is already queued.
    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) {
        if !self.is_enqueued[constraint] {
            self.is_enqueued[constraint] = true;
            self.queue.push_back(constraint);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        quince_assert_moderate!(self.is_enqueued[constraint]);
        self.is_enqueued[constraint] = false;

        Some(constraint)
    }
}
