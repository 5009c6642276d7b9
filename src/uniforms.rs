//! Shader uniforms for the planet surface and cloud materials.
//!
//! The renderer owns the shaders; a [`MaterialUniforms`] only names the
//! values one material binds and packs them into a std140 block.
//!
//! # Example
//!
//! ```
//! use orrery::uniforms::{MaterialUniforms, UniformValue};
//! use glam::Vec3;
//!
//! let mut clouds = MaterialUniforms::new("clouds")
//!     .with("time", 0.0f32)
//!     .with("cloud_color", Vec3::ONE);
//! assert!(clouds.set("time", 2.5f32));
//! assert_eq!(clouds.get("time"), Some(UniformValue::F32(2.5)));
//! assert_eq!(clouds.to_std140().len(), 32);
//! ```

use glam::Vec3;

/// A value bound by a planet or cloud material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    F32(f32),
    Vec3(Vec3),
}

impl UniformValue {
    /// std140 base alignment.
    fn alignment(self) -> usize {
        match self {
            UniformValue::F32(_) => 4,
            UniformValue::Vec3(_) => 16,
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            UniformValue::F32(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v),
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::F32(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        UniformValue::Vec3(v)
    }
}

/// The uniform block of one material, in binding order.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialUniforms {
    label: &'static str,
    entries: Vec<(&'static str, UniformValue)>,
}

impl MaterialUniforms {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: Vec::new(),
        }
    }

    /// Append a field. A repeated name replaces the earlier value in place.
    pub fn with<V: Into<UniformValue>>(mut self, name: &'static str, value: V) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Update an existing field between frames.
    ///
    /// Returns `false` if the block has no field called `name`; the layout
    /// is fixed once built.
    pub fn set<V: Into<UniformValue>>(&mut self, name: &str, value: V) -> bool {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                entry.1 = value.into();
                true
            }
            None => {
                log::warn!("Material '{}' has no uniform '{}'", self.label, name);
                false
            }
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, UniformValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Pack the block in std140 layout, native byte order.
    ///
    /// Each field starts at its base alignment; the block is padded to a
    /// multiple of 16 bytes.
    pub fn to_std140(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for (_, value) in &self.entries {
            let aligned = buf.len().next_multiple_of(value.alignment());
            buf.resize(aligned, 0);
            buf.extend_from_slice(value.bytes());
        }
        let total = buf.len().next_multiple_of(16);
        buf.resize(total, 0);
        buf
    }
}
