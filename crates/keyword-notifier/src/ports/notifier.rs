//! Notifier Port
//!
//! Presents a keyword alert to the user (toast, sound, ...). Calls are
//! fire-and-forget: implementations must not block the caller for long and
//! must not propagate their own failures.

use crate::domain::entities::KeywordAlert;

pub trait Notifier: Send + Sync {
    fn notify(&self, alert: &KeywordAlert);
}
