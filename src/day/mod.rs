//! Day aggregation: the store of what was eaten on the selected day,
//! the pure totals derivation, and the controller that keeps the store
//! in sync with the server.

pub mod totals;
pub mod view;

pub use view::{BurnedCaloriesPolicy, DayView, DayViewError, LoadTicket};
