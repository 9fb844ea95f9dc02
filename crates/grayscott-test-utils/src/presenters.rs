//! Presenter fixtures.

use std::sync::{Arc, Mutex, PoisonError};

use grayscott_arena::Snapshot;
use grayscott_core::{Channel, Generation, TickId};
use grayscott_engine::Presenter;

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn name(&self) -> &str {
        "null"
    }

    fn present(&mut self, _frame: &Snapshot<'_>) {}
}

/// What a [`RecordingPresenter`] saw in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRecord {
    pub tick_id: TickId,
    pub generation: Generation,
    /// Sum of `v` over the grid.
    pub v_total: f64,
}

/// Records every frame into a shared log, readable after the presenter
/// has moved onto a tick thread.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    frames: Arc<Mutex<Vec<FrameRecord>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the frame log.
    pub fn log(&self) -> Arc<Mutex<Vec<FrameRecord>>> {
        Arc::clone(&self.frames)
    }

    /// Copy of the frames recorded so far.
    pub fn frames(&self) -> Vec<FrameRecord> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Presenter for RecordingPresenter {
    fn name(&self) -> &str {
        "recording"
    }

    fn present(&mut self, frame: &Snapshot<'_>) {
        let v_total = frame
            .grid()
            .channel(Channel::V)
            .map(f64::from)
            .sum();
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(FrameRecord {
                tick_id: frame.tick_id(),
                generation: frame.generation(),
                v_total,
            });
    }
}
