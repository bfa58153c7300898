use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::staff::command::{ActionKind, CommandError, StaffCommand};
use crate::telemetry::{create_care_span, generate_correlation_id};

/// A command that has been executed
#[derive(Debug)]
pub struct HistoryEntry {
    pub command: StaffCommand,
    pub executed_at: DateTime<Utc>,
}

/// Command that could not run during `run_all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCommand {
    pub id: Uuid,
    pub action: ActionKind,
    pub reason: String,
}

/// Result of draining the pending queue
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub correlation_id: String,
    pub executed: Vec<Uuid>,
    pub skipped: Vec<SkippedCommand>,
}

impl RunReport {
    pub fn all_executed(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// FIFO queue of deferred staff commands plus a log of what ran.
///
/// Commands move from the queue into history, so a command is never in both.
/// The scheduler does not know what a command does.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    pending: VecDeque<StaffCommand>,
    history: Vec<HistoryEntry>,
    clear_history_on_clear: bool,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SchedulerConfig) -> Self {
        Self {
            clear_history_on_clear: config.clear_history_on_clear,
            ..Self::default()
        }
    }

    /// Queue a command at the tail
    pub fn add_command(&mut self, command: StaffCommand) {
        info!(
            command_id = %command.id(),
            action = %command.action(),
            pending = self.pending.len() + 1,
            "Task added to scheduler"
        );
        self.pending.push_back(command);
    }

    /// Execute every pending command head to tail, then leave the queue empty.
    ///
    /// Not atomic: a command that cannot run is reported and the rest still run.
    pub fn run_all(&mut self) -> RunReport {
        let correlation_id = generate_correlation_id();
        let span = create_care_span("run_all", Some(&correlation_id));
        let _enter = span.enter();

        info!(pending = self.pending.len(), "Executing scheduled tasks");

        let mut report = RunReport {
            correlation_id: correlation_id.clone(),
            executed: Vec::with_capacity(self.pending.len()),
            skipped: Vec::new(),
        };

        for command in std::mem::take(&mut self.pending) {
            match self.execute_and_record(command) {
                Ok(id) => report.executed.push(id),
                Err((command, e)) => {
                    warn!(command_id = %command.id(), error = %e, "Skipping scheduled task");
                    report.skipped.push(SkippedCommand {
                        id: command.id(),
                        action: command.action(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            executed = report.executed.len(),
            skipped = report.skipped.len(),
            "All scheduled tasks complete"
        );
        report
    }

    /// Execute a command immediately, bypassing the queue
    pub fn run_one(&mut self, command: StaffCommand) -> Result<(), CommandError> {
        info!(command_id = %command.id(), action = %command.action(), "Executing immediate task");
        self.execute_and_record(command)
            .map(|_| ())
            .map_err(|(_, e)| e)
    }

    /// Drop every pending command. History is kept unless configured otherwise.
    pub fn clear(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        if self.clear_history_on_clear {
            self.history.clear();
        }
        info!(
            dropped = dropped,
            history_cleared = self.clear_history_on_clear,
            "All scheduled tasks cleared"
        );
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &StaffCommand> {
        self.pending.iter()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    fn execute_and_record(
        &mut self,
        command: StaffCommand,
    ) -> Result<Uuid, (StaffCommand, CommandError)> {
        match command.execute() {
            Ok(()) => {
                let id = command.id();
                self.history.push(HistoryEntry {
                    command,
                    executed_at: Utc::now(),
                });
                Ok(id)
            }
            Err(e) => Err((command, e)),
        }
    }
}
