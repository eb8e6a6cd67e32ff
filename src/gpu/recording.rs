//! In-memory backend that records what a frame would send to the GPU.
//!
//! Used by the headless binary and by tests to inspect submitted frames
//! without a device.

use super::draw::{DrawCall, DrawTarget};
use super::uniforms::{UniformLocation, UniformSink, UniformValue};

/// Uniform names a body shader program declares.
pub const BODY_PROGRAM_UNIFORMS: &[&str] = &[
    "u_proj",
    "u_view",
    "u_model",
    "u_light_position",
    "u_time",
    "u_emissive",
    "u_image",
];

/// A recorded backend command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Uniform write, by name.
    Uniform {
        /// Uniform name.
        name: String,
        /// Written value.
        value: UniformValue,
    },
    /// Draw call.
    Draw(DrawCall),
}

/// Backend with a fixed set of active uniforms that logs every command.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    uniforms: Vec<String>,
    lookups: usize,
    commands: Vec<Command>,
}

impl RecordingBackend {
    /// Backend exposing `uniforms`; locations are their indices.
    #[must_use]
    pub fn new(uniforms: &[&str]) -> Self {
        Self {
            uniforms: uniforms.iter().map(|&name| name.to_owned()).collect(),
            ..Self::default()
        }
    }

    /// Backend exposing the body program's uniforms.
    #[must_use]
    pub fn body_program() -> Self {
        Self::new(BODY_PROGRAM_UNIFORMS)
    }

    /// How many times a location was requested.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    /// Every command in submission order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Uniform writes in submission order.
    pub fn uniform_writes(&self) -> impl Iterator<Item = (&str, UniformValue)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Uniform { name, value } => Some((name.as_str(), *value)),
            Command::Draw(_) => None,
        })
    }

    /// Draw calls in submission order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawCall> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Draw(call) => Some(call),
            Command::Uniform { .. } => None,
        })
    }

    /// Drop recorded commands, keeping the uniform set.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl UniformSink for RecordingBackend {
    fn uniform_location(&mut self, name: &str) -> Option<UniformLocation> {
        self.lookups += 1;
        self.uniforms
            .iter()
            .position(|u| u == name)
            .map(|i| UniformLocation(i as u32))
    }

    fn write_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        let name = self
            .uniforms
            .get(location.0 as usize)
            .cloned()
            .unwrap_or_default();
        self.commands.push(Command::Uniform { name, value });
    }
}

impl DrawTarget for RecordingBackend {
    fn draw(&mut self, call: DrawCall) {
        self.commands.push(Command::Draw(call));
    }
}
