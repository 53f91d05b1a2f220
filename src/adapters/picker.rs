use crate::domain::model::{Selection, StopName};
use crate::domain::ports::StopPicker;
use crate::utils::error::{AtbError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::{Handle, RuntimeFlavor};

/// Runs a blocking terminal interaction. On a multi-thread runtime the worker
/// hands its other tasks off first; elsewhere `f` simply runs in place.
pub fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

/// Fuzzy-filtered selection on the controlling terminal. Esc or `q` cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPicker;

impl StopPicker for TerminalPicker {
    fn choose_one(&self, field: &str, candidates: &[StopName]) -> Result<Selection> {
        let choice = run_blocking(|| {
            FuzzySelect::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Select '{}' stop", field))
                .items(candidates)
                .default(0)
                .interact_opt()
        })
        .map_err(|e| AtbError::InteractionError {
            message: e.to_string(),
        })?;

        Ok(match choice.and_then(|i| candidates.get(i)) {
            Some(stop) => Selection::Chosen(stop.clone()),
            None => Selection::Cancelled,
        })
    }
}

/// Deterministic picker that replays a fixed answer.
#[derive(Debug)]
pub struct ScriptedPicker {
    choice: Option<usize>,
    calls: AtomicUsize,
}

impl ScriptedPicker {
    /// Always picks the candidate at `index`.
    pub fn choosing(index: usize) -> Self {
        Self {
            choice: Some(index),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always cancels.
    pub fn cancelling() -> Self {
        Self {
            choice: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StopPicker for ScriptedPicker {
    fn choose_one(&self, _field: &str, candidates: &[StopName]) -> Result<Selection> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(match self.choice.and_then(|i| candidates.get(i)) {
            Some(stop) => Selection::Chosen(stop.clone()),
            None => Selection::Cancelled,
        })
    }
}
