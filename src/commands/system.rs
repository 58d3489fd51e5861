//! `uptime` and `date`: stubs that never touch the tree

use chrono::Local;

pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

pub fn uptime() -> String {
    "up 0 days, 0:00:00".to_string()
}

pub fn date() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
