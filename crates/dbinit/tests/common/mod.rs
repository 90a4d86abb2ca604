//! In-memory stand-in for a SQL Server, recording every call the executor
//! makes.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chronolog_db::DbError;
use chronolog_dbinit::executor::{Connector, Session};

/// Marker that makes a batch fail when it appears in the batch text.
pub const FAIL_MARKER: &str = "RAISE_FAILURE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connect(String),
    Execute(String, String),
    Close(String),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    refused: Vec<String>,
    failing_close: bool,
    drop_after: Option<usize>,
    liveness_checks: usize,
}

/// Shared handle to the fake server. Clones observe the same log.
#[derive(Clone, Default)]
pub struct FakeServer {
    state: Arc<Mutex<State>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse connections to `database`.
    pub fn refuse(self, database: &str) -> Self {
        self.state.lock().unwrap().refused.push(database.to_string());
        self
    }

    /// Make every close report an error.
    pub fn failing_close(self) -> Self {
        self.state.lock().unwrap().failing_close = true;
        self
    }

    /// Mark each session dead after it has executed `n` batches.
    pub fn drop_after(self, n: usize) -> Self {
        self.state.lock().unwrap().drop_after = Some(n);
        self
    }

    pub fn connector(&self) -> FakeConnector {
        FakeConnector {
            server: self.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    /// Batch texts in the order they reached the server.
    pub fn executed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Execute(_, sql) => Some(sql),
                _ => None,
            })
            .collect()
    }

    /// Number of liveness checks made across all sessions.
    pub fn liveness_checks(&self) -> usize {
        self.state.lock().unwrap().liveness_checks
    }

    pub fn connects(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Connect(db) => Some(db),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.state.lock().unwrap().events.push(event);
    }
}

pub struct FakeConnector {
    server: FakeServer,
}

#[async_trait]
impl Connector for FakeConnector {
    type Session = FakeSession;

    async fn connect(&self, database: &str) -> Result<FakeSession, DbError> {
        let refused = self
            .server
            .state
            .lock()
            .unwrap()
            .refused
            .iter()
            .any(|db| db == database);
        if refused {
            return Err(DbError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("Login failed for database '{database}'"),
            )));
        }

        self.server.record(Event::Connect(database.to_string()));
        Ok(FakeSession {
            server: self.server.clone(),
            database: database.to_string(),
            executed: 0,
        })
    }
}

pub struct FakeSession {
    server: FakeServer,
    database: String,
    executed: usize,
}

#[async_trait]
impl Session for FakeSession {
    async fn is_live(&mut self) -> bool {
        let mut state = self.server.state.lock().unwrap();
        state.liveness_checks += 1;
        match state.drop_after {
            Some(n) => self.executed < n,
            None => true,
        }
    }

    async fn execute_batch(&mut self, sql: &str) -> Result<(), DbError> {
        self.server
            .record(Event::Execute(self.database.clone(), sql.to_string()));
        if sql.contains(FAIL_MARKER) {
            return Err(DbError::Io(io::Error::other(format!(
                "Incorrect syntax near '{FAIL_MARKER}'."
            ))));
        }
        self.executed += 1;
        Ok(())
    }

    async fn close(self) -> Result<(), DbError> {
        self.server.record(Event::Close(self.database.clone()));
        if self.server.state.lock().unwrap().failing_close {
            return Err(DbError::Closed);
        }
        Ok(())
    }
}

/// Owned batch list from string literals.
pub fn batches(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
