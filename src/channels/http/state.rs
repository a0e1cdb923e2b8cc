use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::agent::{Assistant, session::Session};

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug)]
pub struct SessionEntry {
    pub session: SharedSession,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            last_seen: Instant::now(),
        }
    }

    fn expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }
}

/// One session per browser visit, keyed by session id.
///
/// Sessions end when the page sends a DELETE on unload, or after `ttl`
/// without a lookup. Expired entries are swept whenever a session is created.
#[derive(Debug, Clone)]
pub struct HTTPState {
    pub assistant: Assistant,
    pub sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl HTTPState {
    pub fn new(assistant: Assistant, ttl: Duration) -> Self {
        Self {
            assistant,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create_session(&self) -> (String, Session) {
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = self.assistant.new_session();

        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.expired(self.ttl));
        if sessions.len() < before {
            log::debug!("dropped {} idle sessions", before - sessions.len());
        }
        sessions.insert(session_id.clone(), SessionEntry::new(session.clone()));

        (session_id, session)
    }

    /// Looks up a live session and marks it as seen.
    pub async fn session(&self, session_id: &str) -> Option<SharedSession> {
        let mut sessions = self.sessions.lock().await;

        if sessions.get(session_id)?.expired(self.ttl) {
            sessions.remove(session_id);
            return None;
        }

        let entry = sessions.get_mut(session_id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    pub async fn remove_session(&self, session_id: &str) -> bool {
        self.sessions.lock().await.remove(session_id).is_some()
    }
}
