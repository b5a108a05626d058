use std::collections::VecDeque;

use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring position one cell towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One occupied cell of the body and the direction it faced when it became
/// the head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub direction: Direction,
}

/// Snake body stored as a ring.
///
/// `ring` runs from the physical tail at the front to the head at the back,
/// so the element after the head, wrapping around, is the tail. Walking the
/// ring backwards from the head visits the body in screen order. Moving
/// recycles the tail into the new head and growing pushes a new tail, so no
/// existing segment is ever shifted or rewritten by either.
#[derive(Debug, Clone)]
pub struct Snake {
    ring: VecDeque<Segment>,
    direction: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` segments whose head is at `head`,
    /// with the body trailing behind it.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "snake must have at least one segment");

        let mut front_to_back = Vec::with_capacity(length);
        let mut position = head;
        for _ in 0..length {
            front_to_back.push(Segment {
                position,
                direction,
            });
            position = position.step(direction.opposite());
        }

        Self::from_segments(front_to_back, direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, direction: Direction) -> Self {
        assert!(
            !segments.is_empty(),
            "snake must have at least one segment"
        );

        Self {
            ring: segments.into_iter().rev().collect(),
            direction,
        }
    }

    /// Advances the snake one cell in its travel direction.
    ///
    /// The tail segment is recycled as the new head. Returns the position the
    /// tail vacated.
    pub fn move_forward(&mut self) -> Position {
        let next_head = self.next_head_position();
        let vacated = self.tail().position;

        self.ring.rotate_left(1);
        let head = self.head_index();
        self.ring[head] = Segment {
            position: next_head,
            direction: self.direction,
        };

        vacated
    }

    /// Adds one segment behind the tail, facing the same way as the tail.
    ///
    /// The new segment becomes the tail; no existing segment moves. Returns
    /// the added segment.
    pub fn grow(&mut self) -> Segment {
        let tail = self.tail();
        let segment = Segment {
            position: tail.position.step(tail.direction.opposite()),
            direction: tail.direction,
        };

        self.ring.push_front(segment);
        segment
    }

    /// Changes the travel direction unless `direction` reverses it.
    ///
    /// Returns whether the direction was applied.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.ring[self.head_index()].position
    }

    /// Returns the physical tail, the segment recycled by the next move.
    #[must_use]
    pub fn tail(&self) -> Segment {
        self.ring[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.ring.iter().any(|segment| segment.position == position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.segments().skip(1).any(|segment| segment.position == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the snake has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.ring.iter().rev()
    }

    fn head_index(&self) -> usize {
        self.ring.len() - 1
    }
}
