//! Use cases composing the stores
//! 组合各个 store 的用例

mod complete_preferences;
mod launch_route;
mod reset_local_state;

pub use complete_preferences::CompletePreferenceFlow;
pub use launch_route::{LaunchRoute, ResolveLaunchRoute};
pub use reset_local_state::ResetLocalState;
