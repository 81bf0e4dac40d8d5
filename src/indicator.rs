// Start/stop loading signal. The guard hides the indicator on drop, so
// every exit path of a fetch releases it.

use std::io::Write;

pub struct LoadingGuard;

pub fn begin() -> LoadingGuard {
    let mut err = std::io::stderr();
    let _ = write!(err, "loading...");
    let _ = err.flush();
    LoadingGuard
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut err = std::io::stderr();
        let _ = write!(err, "\r          \r");
        let _ = err.flush();
    }
}
