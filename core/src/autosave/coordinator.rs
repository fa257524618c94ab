// formwork/src/autosave/coordinator.rs

//! The `Autosave` coordinator: a tokio task owning the debounce timer and
//! the serialized calls into the persistence sink.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{event, Level};

use crate::autosave::sink::AutosaveSink;
use crate::core::value::FormValues;
use crate::error::FormError;

/// Debounce interval used by `Autosave::with_default_debounce`.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Where the coordinator currently is between changes and saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
  /// Nothing pending; the last save (if any) succeeded.
  Idle,
  /// A change arrived and the quiet-period timer is armed.
  Pending,
  /// A save call is in flight.
  Saving,
  /// The last save failed. Cleared by the next change.
  Failed,
}

impl SaveStatus {
  /// The textual projection shown next to the form controls.
  pub fn label(&self) -> &'static str {
    match self {
      SaveStatus::Pending | SaveStatus::Saving => "Saving...",
      SaveStatus::Idle => "Saved",
      SaveStatus::Failed => "Failed to save",
    }
  }

  /// True while a timer is armed or a save is in flight; used to gate the
  /// final submit control in flows that require a settled autosave.
  pub fn is_busy(&self) -> bool {
    matches!(self, SaveStatus::Pending | SaveStatus::Saving)
  }
}

/// Debounced, serialized background persistence of form values.
///
/// Each call to `notify` restarts the quiet-period timer; when the timer
/// fires, the sink is invoked with the values from the *last* change only.
/// The coordinator never starts a second save while one is in flight.
///
/// Dropping the coordinator cancels an armed timer (no dangling save); a
/// save already started runs to completion in the background.
pub struct Autosave {
  tx: mpsc::UnboundedSender<FormValues>,
  status: Arc<RwLock<SaveStatus>>,
  handle: JoinHandle<()>,
}

impl Autosave {
  /// Spawns the coordinator task on the current tokio runtime.
  pub fn spawn(debounce: Duration, sink: Arc<dyn AutosaveSink>) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    let status = Arc::new(RwLock::new(SaveStatus::Idle));
    let handle = tokio::spawn(run_coordinator(rx, debounce, sink, status.clone()));
    Self { tx, status, handle }
  }

  pub fn with_default_debounce(sink: Arc<dyn AutosaveSink>) -> Self {
    Self::spawn(DEFAULT_DEBOUNCE, sink)
  }

  /// Reports a change to the watched values. Restarts the debounce timer.
  pub fn notify(&self, values: FormValues) {
    if self.tx.send(values).is_ok() {
      *self.status.write() = SaveStatus::Pending;
    } else {
      // Coordinator already shut down; nothing to persist to.
      event!(Level::WARN, "Autosave notify after coordinator shutdown; change dropped.");
    }
  }

  pub fn status(&self) -> SaveStatus {
    *self.status.read()
  }

  /// The "Saving..." / "Saved" projection, recomputed on every call.
  pub fn label(&self) -> &'static str {
    self.status().label()
  }

  pub fn is_saving(&self) -> bool {
    self.status().is_busy()
  }

  /// Closes the change channel and hands back the task handle so callers
  /// can await a deterministic teardown. An armed timer is cancelled; an
  /// in-flight save completes first.
  pub fn shutdown(self) -> JoinHandle<()> {
    let Autosave { tx, handle, status: _ } = self;
    drop(tx);
    handle
  }
}

async fn run_coordinator(
  mut rx: mpsc::UnboundedReceiver<FormValues>,
  debounce: Duration,
  sink: Arc<dyn AutosaveSink>,
  status: Arc<RwLock<SaveStatus>>,
) {
  'session: while let Some(first) = rx.recv().await {
    let mut latest = first;
    *status.write() = SaveStatus::Pending;
    loop {
      tokio::select! {
        changed = rx.recv() => match changed {
          // Another change within the quiet period: restart the timer
          // with the newer values.
          Some(values) => latest = values,
          // Owner dropped before the timer fired: cancel, save nothing.
          None => break 'session,
        },
        _ = tokio::time::sleep(debounce) => {
          *status.write() = SaveStatus::Saving;
          let settled = match sink.save(latest).await {
            Ok(()) => {
              event!(Level::DEBUG, "Autosave completed.");
              SaveStatus::Idle
            }
            Err(source) => {
              let error = FormError::SaveFailure { source };
              event!(Level::WARN, error = %error, "Autosave failed; editing continues, no retry.");
              SaveStatus::Failed
            }
          };
          // Changes that queued up during the save start a fresh debounce
          // round (saves are strictly serialized), so the settled status
          // only applies when the queue is empty.
          *status.write() = if rx.is_empty() { settled } else { SaveStatus::Pending };
          break;
        }
      }
    }
  }
  event!(Level::DEBUG, "Autosave coordinator shut down.");
}
