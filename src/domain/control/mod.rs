//! Record/play control domain module

mod session;

pub use session::{
    ControlSession, InvalidTransition, PlayerState, RecordAffordance, RecorderState, TakeOutcome,
};
