//! Input handling: event types, the event queue, key bindings, and the
//! processor that applies events to the camera.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Applies events to the orbit camera.
pub mod processor;
/// Cross-thread event queue drained once per tick.
pub mod queue;
/// winit window-event adapter.
#[cfg(feature = "viewer")]
pub mod winit_adapter;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use queue::{input_channel, InputReceiver, InputSender};
#[cfg(feature = "viewer")]
pub use winit_adapter::WinitInputAdapter;
