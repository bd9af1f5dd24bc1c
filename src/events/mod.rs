pub mod activation;
pub mod activity;

pub use activation::{wire_activation_click, ActivationWiring};
pub use activity::{wire_activity_listeners, ACTIVITY_EVENTS};
