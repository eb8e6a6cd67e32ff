//! Shader uniform plumbing.
//!
//! The renderer backend is reached through [`UniformSink`]; the
//! [`ShaderProgram`] wrapper resolves uniform names to backend locations once
//! and remembers the answer, including names the program does not expose.

use rustc_hash::FxHashMap;

use crate::math::{Mat4, Vec3};

/// Backend-assigned uniform slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// A value written to a uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `vec3`
    Vec3(Vec3),
    /// `mat4`, column-major.
    Mat4(Mat4),
    /// `bool`; reaches the backend as [`UniformValue::Int`] 0 or 1.
    Bool(bool),
    /// `int`, also used for sampler texture units.
    Int(i32),
}

impl UniformValue {
    /// The form the backend receives: booleans become integers.
    #[must_use]
    pub fn lowered(self) -> Self {
        match self {
            Self::Bool(b) => Self::Int(i32::from(b)),
            other => other,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        Self::Mat4(v)
    }
}

impl From<bool> for UniformValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

/// Backend that owns a linked shader program's uniform storage.
pub trait UniformSink {
    /// Resolve a uniform name, or `None` when the program has no such
    /// active uniform.
    fn uniform_location(&mut self, name: &str) -> Option<UniformLocation>;

    /// Write a value. Booleans have already been lowered to integers.
    fn write_uniform(&mut self, location: UniformLocation, value: UniformValue);
}

/// A shader program with a per-instance uniform location cache.
#[derive(Debug)]
pub struct ShaderProgram<S> {
    backend: S,
    locations: FxHashMap<String, Option<UniformLocation>>,
}

impl<S: UniformSink> ShaderProgram<S> {
    /// Wrap a backend program.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            locations: FxHashMap::default(),
        }
    }

    /// Cached location lookup. Missing uniforms are cached too, so the
    /// backend is asked at most once per name.
    pub fn location(&mut self, name: &str) -> Option<UniformLocation> {
        if let Some(&cached) = self.locations.get(name) {
            return cached;
        }
        let location = self.backend.uniform_location(name);
        if location.is_none() {
            log::debug!("shader program has no active uniform {name}");
        }
        let _ = self.locations.insert(name.to_owned(), location);
        location
    }

    /// Write `value` to the named uniform. Returns `false` when the program
    /// has no such uniform and nothing was written.
    pub fn set_uniform(&mut self, name: &str, value: impl Into<UniformValue>) -> bool {
        match self.location(name) {
            Some(location) => {
                self.backend.write_uniform(location, value.into().lowered());
                true
            }
            None => false,
        }
    }

    /// Number of names resolved so far (found or not).
    #[must_use]
    pub fn cached_names(&self) -> usize {
        self.locations.len()
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// The wrapped backend, mutably.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Unwrap the backend, dropping the cache.
    pub fn into_backend(self) -> S {
        self.backend
    }
}
