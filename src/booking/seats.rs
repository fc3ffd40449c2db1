//! Fixed seat map.
//!
//! The registry is built once at startup and never grows or shrinks. Booking
//! flips a seat's flag from free to booked exactly once.

use serde::Serialize;

use crate::booking::BookingError;

/// A single bookable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub is_booked: bool,
}

impl Seat {
    fn new(row: u32, col: u32, is_booked: bool) -> Self {
        Self {
            id: seat_id(row, col),
            row,
            col,
            is_booked,
        }
    }
}

/// Seat identifier for 1-based coordinates.
pub fn seat_id(row: u32, col: u32) -> String {
    format!("SEAT-{row}-{col}")
}

/// Rows and columns of the seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLayout {
    pub rows: u32,
    pub cols: u32,
}

impl SeatLayout {
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// All seats of the venue in row-major order.
#[derive(Debug, Clone)]
pub struct SeatRegistry {
    seats: Vec<Seat>,
}

impl SeatRegistry {
    /// Build a registry where every seat is free.
    pub fn new(layout: SeatLayout) -> Self {
        Self::from_fn(layout, |_, _| false)
    }

    /// Build a registry where each seat is pre-booked with probability `booked_ratio`.
    pub fn generate(layout: SeatLayout, booked_ratio: f64, rng: &mut fastrand::Rng) -> Self {
        Self::from_fn(layout, |_, _| rng.f64() < booked_ratio)
    }

    fn from_fn(layout: SeatLayout, mut booked: impl FnMut(u32, u32) -> bool) -> Self {
        let mut seats = Vec::with_capacity(layout.capacity());
        for row in 1..=layout.rows {
            for col in 1..=layout.cols {
                seats.push(Seat::new(row, col, booked(row, col)));
            }
        }
        Self { seats }
    }

    /// Snapshot of every seat.
    pub fn list(&self) -> Vec<Seat> {
        self.seats.clone()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_booked).count()
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|s| s.id == seat_id)
    }

    /// Mark a free seat as booked.
    pub fn book(&mut self, seat_id: &str) -> Result<Seat, BookingError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.id == seat_id)
            .ok_or_else(|| BookingError::SeatNotFound(seat_id.to_string()))?;

        if seat.is_booked {
            return Err(BookingError::AlreadyBooked(seat.id.clone()));
        }
        seat.is_booked = true;
        Ok(seat.clone())
    }
}
