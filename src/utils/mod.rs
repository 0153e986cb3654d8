mod maths_utils;
mod time_utils;

pub use time_utils::{AppInstant, TimeUtils};

pub use maths_utils::{format_thousands, mean, round_dp};
