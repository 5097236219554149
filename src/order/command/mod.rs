mod build_phase;
mod main_phase;
mod retreat_phase;

pub use self::build_phase::BuildCommand;
pub use self::main_phase::{ConvoyedMove, MainCommand, MoveCommand, SupportedOrder};
pub use self::retreat_phase::RetreatCommand;
