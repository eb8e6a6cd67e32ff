//! Event queue between platform callbacks and the tick loop.
//!
//! Callbacks may fire on any thread and at any time; the tick drains the
//! queue before it reads camera state, so every event queued before a tick
//! is applied before that tick's update.

use std::sync::mpsc;

use super::event::InputEvent;

/// Create a connected sender/receiver pair.
#[must_use]
pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::channel();
    (InputSender { tx }, InputReceiver { rx })
}

/// Producer half. Cheap to clone; one per event source.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::Sender<InputEvent>,
}

impl InputSender {
    /// Queue an event (non-blocking). Returns `false` once the receiving
    /// scene has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    /// Queue a pointer press.
    pub fn pointer_down(&self, x: f32, y: f32) -> bool {
        self.send(InputEvent::PointerDown { x, y })
    }

    /// Queue a pointer move.
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.send(InputEvent::PointerMove { x, y })
    }

    /// Queue a pointer release.
    pub fn pointer_up(&self) -> bool {
        self.send(InputEvent::PointerUp)
    }
}

/// Consumer half, owned by the scene state.
#[derive(Debug)]
pub struct InputReceiver {
    rx: mpsc::Receiver<InputEvent>,
}

impl InputReceiver {
    /// Take everything queued so far, in arrival order.
    pub fn drain(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
