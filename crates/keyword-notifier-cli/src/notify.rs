//! Notifiers: terminal toast, native desktop notification, or both

use clap::ValueEnum;
use colored::Colorize;
use keyword_notifier::{KeywordAlert, Notifier};
use notify_rust::Notification;
use std::io::Write;
use std::sync::Arc;
use tracing::warn;

const APP_NAME: &str = "kwnotify";
const SOUND_NAME: &str = "message-new-instant";
const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifierKind {
    /// Print a toast line to the terminal
    Terminal,
    /// Native desktop notification
    Desktop,
    /// Terminal and desktop
    Both,
}

/// Build the notifier for the selected kind
pub fn build(kind: NotifierKind, sound: bool) -> Arc<dyn Notifier> {
    match kind {
        NotifierKind::Terminal => Arc::new(TerminalNotifier { sound }),
        NotifierKind::Desktop => Arc::new(DesktopNotifier { sound }),
        NotifierKind::Both => Arc::new(FanoutNotifier(vec![
            Arc::new(TerminalNotifier { sound }),
            // One sound is enough
            Arc::new(DesktopNotifier { sound: false }),
        ])),
    }
}

/// Prints a coloured toast line; rings the terminal bell for sound
pub struct TerminalNotifier {
    sound: bool,
}

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &KeywordAlert) {
        let mut stdout = std::io::stdout().lock();
        let bell = if self.sound { "\x07" } else { "" };
        let result = writeln!(
            stdout,
            "{}{} {} {}",
            bell,
            alert.detected_at.format("%H:%M:%S").to_string().dimmed(),
            alert.title().yellow().bold(),
            alert.body(PREVIEW_CHARS).dimmed()
        )
        .and_then(|_| stdout.flush());

        if let Err(e) = result {
            warn!(error = %e, "Failed to write terminal notification");
        }
    }
}

/// Native desktop notification, shown from a background thread
pub struct DesktopNotifier {
    sound: bool,
}

impl Notifier for DesktopNotifier {
    fn notify(&self, alert: &KeywordAlert) {
        let title = alert.title();
        let body = alert.body(PREVIEW_CHARS);
        let sound = self.sound;

        // Don't block the feed on the notification server
        std::thread::spawn(move || {
            let mut notification = Notification::new();
            notification
                .appname(APP_NAME)
                .summary(&title)
                .body(&body)
                .timeout(5000);
            if sound {
                notification.sound_name(SOUND_NAME);
            }

            if let Err(e) = notification.show() {
                warn!(error = %e, "Failed to show desktop notification");
            }
        });
    }
}

/// Sends each alert to several notifiers
pub struct FanoutNotifier(Vec<Arc<dyn Notifier>>);

impl Notifier for FanoutNotifier {
    fn notify(&self, alert: &KeywordAlert) {
        for notifier in &self.0 {
            notifier.notify(alert);
        }
    }
}
