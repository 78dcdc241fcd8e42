pub mod next_slot;
pub mod week;
