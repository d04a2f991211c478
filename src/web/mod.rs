//! Helpers driven by the host environment: timers, animation frames,
//! resource loading and navigation.

mod countdown;
mod env;
mod loader;
mod navigation;
mod scroll;

pub use countdown::{CountDownOptions, Subscription, count_down};
pub use env::{
    get_full_path, get_hash_router_query_string, get_run_time_env_is_app,
    get_run_time_env_is_wx, user_source,
};
pub use loader::{insert_script, load_image};
pub use navigation::{GoH5Options, go_h5};
pub use scroll::{Easing, ScrollAnimation, ScrollOptions, scroll_duration, scroll_to_y};
