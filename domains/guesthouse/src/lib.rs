//! Guesthouse domain: rooms and reservations

pub mod reservation;
pub mod rooms;

pub use reservation::{
    GuesthouseReservationClient, GuesthouseReservationQuery, GuesthouseReservationRecord,
    GuesthouseReservationSaveRequest, GuesthouseReservations, ReservationBooking,
};
pub use rooms::{
    GuesthouseRoomClient, GuesthouseRoomLifecycle, GuesthouseRoomQuery, GuesthouseRoomRecord,
    GuesthouseRoomSaveRequest, GuesthouseRoomTransition, GuesthouseRooms,
};
