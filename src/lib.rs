pub mod app;
pub mod booking;
pub mod schedule;
pub mod selection;
pub mod storage;

pub use app::{BookingApp, ViewType};
pub use booking::{Confirmation, EventType, QueryError};
pub use selection::{Selection, SelectionState};
