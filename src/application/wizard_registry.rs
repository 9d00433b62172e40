//! In-memory registry of running wizard sessions.
//!
//! Sessions are isolated: the registry only maps ids to controller handles
//! and never touches session state itself. Nothing survives a restart.
//! Sessions nobody has looked up for [`WizardSettings::idle_timeout`] are
//! shut down by the sweeper task.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::foundation::WizardId;

use super::wizard_controller::{WizardController, WizardHandle, WizardServices, WizardSettings};

const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

struct Entry {
    handle: WizardHandle,
    last_activity: Instant,
}

pub struct WizardRegistry {
    sessions: RwLock<HashMap<WizardId, Entry>>,
    services: WizardServices,
    settings: Arc<WizardSettings>,
}

impl WizardRegistry {
    pub fn new(services: WizardServices, settings: WizardSettings) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            services,
            settings: Arc::new(settings),
        }
    }

    /// Starts a new session and returns its handle.
    pub async fn create(&self) -> WizardHandle {
        let id = WizardId::new();
        let handle = WizardController::spawn(id, self.services.clone(), Arc::clone(&self.settings));
        let entry = Entry {
            handle: handle.clone(),
            last_activity: Instant::now(),
        };
        self.sessions.write().await.insert(id, entry);
        tracing::info!(wizard_id = %id, "wizard session started");
        handle
    }

    /// Looks a session up and marks it active.
    pub async fn get(&self, id: &WizardId) -> Option<WizardHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_activity = Instant::now();
        Some(entry.handle.clone())
    }

    /// Ends a session. Returns `false` if the id was unknown.
    pub async fn remove(&self, id: &WizardId) -> bool {
        let removed = self.sessions.write().await.remove(id);
        match removed {
            Some(entry) => {
                entry.handle.shutdown().await;
                tracing::info!(wizard_id = %id, "wizard session ended");
                true
            }
            None => false,
        }
    }

    /// Shuts down every session idle for at least the configured timeout.
    ///
    /// Returns how many sessions were evicted.
    pub async fn evict_idle(&self) -> usize {
        let idle_timeout = self.settings.idle_timeout;
        let now = Instant::now();
        let expired: Vec<WizardId> = self
            .sessions
            .read()
            .await
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.last_activity) >= idle_timeout)
            .map(|(id, _)| *id)
            .collect();

        let mut evicted = 0;
        for id in expired {
            if self.remove(&id).await {
                tracing::info!(wizard_id = %id, ?idle_timeout, "idle wizard session evicted");
                evicted += 1;
            }
        }
        if evicted > 0 {
            let remaining = self.len().await;
            tracing::debug!(evicted, remaining, "idle sweep finished");
        }
        evicted
    }

    /// Runs [`evict_idle`](Self::evict_idle) periodically until the registry is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let period = (self.settings.idle_timeout / 2).max(MIN_SWEEP_PERIOD);
        let registry: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    break;
                };
                registry.evict_idle().await;
            }
            tracing::debug!("idle sweeper stopped");
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::brandfetch::MockBrandLookup;
    use crate::adapters::documents::MockDocumentService;
    use crate::application::wizard_controller::{ControllerError, WizardIntent};

    fn registry() -> WizardRegistry {
        registry_with_idle_timeout(WizardSettings::default().idle_timeout)
    }

    fn registry_with_idle_timeout(idle_timeout: Duration) -> WizardRegistry {
        let services = WizardServices::new(
            Arc::new(MockBrandLookup::new()),
            Arc::new(MockDocumentService::new()),
        );
        let settings = WizardSettings {
            idle_timeout,
            ..WizardSettings::default()
        };
        WizardRegistry::new(services, settings)
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let registry = registry();
        let first = registry.create().await;
        let second = registry.create().await;

        first
            .apply(WizardIntent::SetName {
                value: "Ana".to_string(),
            })
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.view().name, "Ana");
        assert_eq!(second.view().name, "");
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn get_returns_registered_handle() {
        let registry = registry();
        let handle = registry.create().await;

        let found = registry.get(handle.id()).await.unwrap();
        assert_eq!(found.id(), handle.id());
        assert!(registry.get(&WizardId::new()).await.is_none());
    }

    #[tokio::test]
    async fn remove_stops_session() {
        let registry = registry();
        let handle = registry.create().await;

        assert!(registry.remove(handle.id()).await);
        assert!(!registry.remove(handle.id()).await);
        assert_eq!(registry.len().await, 0);

        let err = handle.apply(WizardIntent::Back).await.unwrap_err();
        assert_eq!(err, ControllerError::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_evicts_only_idle_sessions() {
        let registry = Arc::new(registry_with_idle_timeout(Duration::from_secs(60)));
        let sweeper = registry.spawn_sweeper();
        let idle = registry.create().await;
        let active = registry.create().await;

        time::sleep(Duration::from_secs(40)).await;
        assert!(registry.get(active.id()).await.is_some());
        time::sleep(Duration::from_secs(40)).await;

        assert!(registry.get(idle.id()).await.is_none());
        assert!(registry.get(active.id()).await.is_some());
        assert_eq!(registry.len().await, 1);
        let err = idle.apply(WizardIntent::Back).await.unwrap_err();
        assert_eq!(err, ControllerError::Closed);

        sweeper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn evict_idle_spares_recent_sessions() {
        let registry = registry_with_idle_timeout(Duration::from_secs(60));
        registry.create().await;

        time::advance(Duration::from_secs(59)).await;
        assert_eq!(registry.evict_idle().await, 0);
        time::advance(Duration::from_secs(1)).await;
        assert_eq!(registry.evict_idle().await, 1);
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn sweeper_stops_with_registry() {
        let registry = Arc::new(registry());
        let sweeper = registry.spawn_sweeper();
        drop(registry);

        time::sleep(WizardSettings::default().idle_timeout).await;
        assert!(sweeper.await.is_ok());
    }
}
