//! KeywordWatcher
//!
//! Start/stop lifecycle around the matcher. `start` subscribes a callback
//! context binding the settings service and a notifier to an event source;
//! `stop` removes it. Settings are read fresh for every message.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::SettingsService;
use crate::domain::{
    entities::{IncomingMessage, KeywordAlert},
    services::KeywordMatcher,
    value_objects::MatchResult,
};
use crate::ports::{EventSource, MessageHandler, Notifier, SubscriptionId};

/// Callback context registered with the event source
struct WatchContext {
    settings: Arc<SettingsService>,
    notifier: Arc<dyn Notifier>,
}

impl MessageHandler for WatchContext {
    fn on_message(&self, message: &IncomingMessage) {
        let settings = self.settings.snapshot();
        match KeywordMatcher::evaluate(&settings, message) {
            MatchResult::Matched { keyword } => {
                info!(
                    keyword = %keyword,
                    guild_id = ?message.guild_id,
                    channel_id = ?message.channel_id,
                    "Keyword detected"
                );
                self.notifier
                    .notify(&KeywordAlert::new(keyword, message.clone()));
            }
            MatchResult::NoMatch => {
                debug!(message_id = ?message.id, "No keyword match");
            }
        }
    }
}

/// A running subscription. Dropping it stops it.
pub struct KeywordWatcher {
    source: Arc<dyn EventSource>,
    subscription: Option<SubscriptionId>,
}

impl KeywordWatcher {
    /// Subscribe to `source` and notify on every matching message
    pub fn start(
        source: Arc<dyn EventSource>,
        settings: Arc<SettingsService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let context = Arc::new(WatchContext { settings, notifier });
        let subscription = source.subscribe(context);
        info!(subscription_id = %subscription, "Keyword watcher started");
        Self {
            source,
            subscription: Some(subscription),
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unsubscribe. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
            info!(subscription_id = %id, "Keyword watcher stopped");
        }
    }
}

impl Drop for KeywordWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySettingsStore;
    use crate::application::Dispatcher;
    use crate::domain::{entities::Settings, value_objects::SettingsField};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: Mutex<Vec<KeywordAlert>>,
    }

    impl RecordingNotifier {
        fn keywords(&self) -> Vec<String> {
            self.alerts
                .lock()
                .unwrap()
                .iter()
                .map(|a| a.keyword.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, alert: &KeywordAlert) {
            self.alerts.lock().unwrap().push(alert.clone());
        }
    }

    fn setup(settings: Settings) -> (Arc<Dispatcher>, Arc<SettingsService>, Arc<RecordingNotifier>) {
        let store = Arc::new(InMemorySettingsStore::with_settings(settings));
        let service = Arc::new(SettingsService::load(store).unwrap());
        (Arc::new(Dispatcher::new()), service, Arc::new(RecordingNotifier::default()))
    }

    #[test]
    fn test_notifies_on_match_only() {
        let (dispatcher, settings, notifier) = setup(Settings::default());
        let _watcher = KeywordWatcher::start(dispatcher.clone(), settings, notifier.clone());

        dispatcher.dispatch(&IncomingMessage::new("a dragon!").with_guild_id("1"));
        dispatcher.dispatch(&IncomingMessage::new("nothing to see"));
        dispatcher.dispatch(&IncomingMessage::new("no dd here"));

        assert_eq!(notifier.keywords(), vec!["Dragon"]);
        let alerts = notifier.alerts.lock().unwrap();
        assert_eq!(alerts[0].message.content.as_deref(), Some("a dragon!"));
    }

    #[test]
    fn test_stop_detaches_from_source() {
        let (dispatcher, settings, notifier) = setup(Settings::default());
        let mut watcher = KeywordWatcher::start(dispatcher.clone(), settings, notifier.clone());
        assert!(watcher.is_running());
        assert_eq!(dispatcher.subscriber_count(), 1);

        watcher.stop();
        watcher.stop();

        assert!(!watcher.is_running());
        assert_eq!(dispatcher.subscriber_count(), 0);
        dispatcher.dispatch(&IncomingMessage::new("dragon"));
        assert!(notifier.keywords().is_empty());
    }

    #[test]
    fn test_drop_stops_watcher() {
        let (dispatcher, settings, notifier) = setup(Settings::default());
        {
            let _watcher = KeywordWatcher::start(dispatcher.clone(), settings, notifier);
            assert_eq!(dispatcher.subscriber_count(), 1);
        }
        assert_eq!(dispatcher.subscriber_count(), 0);
    }

    #[test]
    fn test_reads_settings_changed_after_start() {
        let (dispatcher, settings, notifier) = setup(Settings::default());
        let _watcher = KeywordWatcher::start(dispatcher.clone(), settings.clone(), notifier.clone());

        dispatcher.dispatch(&IncomingMessage::new("urgent meeting"));
        assert!(notifier.keywords().is_empty());

        settings.set(SettingsField::Keywords, "urgent").unwrap();
        dispatcher.dispatch(&IncomingMessage::new("urgent meeting"));
        assert_eq!(notifier.keywords(), vec!["urgent"]);

        settings.set(SettingsField::Servers, "42").unwrap();
        dispatcher.dispatch(&IncomingMessage::new("urgent").with_guild_id("7"));
        assert_eq!(notifier.keywords(), vec!["urgent"]);
    }
}
