pub mod currency;
pub mod logging;
pub mod time;
