//! Vertex layout descriptions handed to the GPU resource wrapper.
//!
//! A layout is an ordered list of attributes, each `(component_count,
//! element_type, normalized)`. Every component occupies 4 bytes, so the
//! stride is `4 × total components` and attribute offsets accumulate the
//! same way.

use crate::error::OrreryError;

/// Bytes occupied by one attribute component.
pub const COMPONENT_BYTES: u32 = 4;

/// Scalar type of an attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit float.
    Float,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UnsignedInt,
    /// 8-bit unsigned integer.
    UnsignedByte,
    /// 16-bit unsigned integer.
    UnsignedShort,
}

/// One vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Components per vertex (1..=4).
    pub components: u32,
    /// Component scalar type.
    pub element: ElementType,
    /// Whether integer data is normalized to `[0, 1]` when read.
    pub normalized: bool,
}

/// Ordered attribute list describing one interleaved vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute.
    #[must_use]
    pub fn push(
        mut self,
        components: u32,
        element: ElementType,
        normalized: bool,
    ) -> Self {
        self.attributes.push(VertexAttribute {
            components,
            element,
            normalized,
        });
        self
    }

    /// Append a float attribute.
    #[must_use]
    pub fn push_float(self, components: u32) -> Self {
        self.push(components, ElementType::Float, false)
    }

    /// Attributes in shader-location order.
    #[must_use]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Total components per vertex.
    #[must_use]
    pub fn components(&self) -> u32 {
        self.attributes.iter().map(|a| a.components).sum()
    }

    /// Bytes between consecutive vertices.
    #[must_use]
    pub fn stride(&self) -> u32 {
        COMPONENT_BYTES * self.components()
    }

    /// Byte offset of each attribute within a vertex.
    #[must_use]
    pub fn offsets(&self) -> Vec<u32> {
        let mut offset = 0;
        self.attributes
            .iter()
            .map(|a| {
                let current = offset;
                offset += COMPONENT_BYTES * a.components;
                current
            })
            .collect()
    }

    /// Map to wgpu vertex attributes with consecutive shader locations
    /// starting at `first_location`.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::VertexFormat`] for component/type combinations
    /// wgpu has no vertex format for (e.g. three 8-bit components).
    pub fn to_wgpu_attributes(
        &self,
        first_location: u32,
    ) -> Result<Vec<wgpu::VertexAttribute>, OrreryError> {
        self.attributes
            .iter()
            .zip(self.offsets())
            .zip(first_location..)
            .map(|((attr, offset), shader_location)| {
                Ok(wgpu::VertexAttribute {
                    format: wgpu_format(attr)?,
                    offset: u64::from(offset),
                    shader_location,
                })
            })
            .collect()
    }

    /// Stride as a wgpu buffer address.
    #[must_use]
    pub fn array_stride(&self) -> wgpu::BufferAddress {
        u64::from(self.stride())
    }
}

fn wgpu_format(attr: &VertexAttribute) -> Result<wgpu::VertexFormat, OrreryError> {
    use wgpu::VertexFormat as F;

    let format = match (attr.element, attr.components) {
        (ElementType::Float, 1) => F::Float32,
        (ElementType::Float, 2) => F::Float32x2,
        (ElementType::Float, 3) => F::Float32x3,
        (ElementType::Float, 4) => F::Float32x4,
        (ElementType::Int, 1) => F::Sint32,
        (ElementType::Int, 2) => F::Sint32x2,
        (ElementType::Int, 3) => F::Sint32x3,
        (ElementType::Int, 4) => F::Sint32x4,
        (ElementType::UnsignedInt, 1) => F::Uint32,
        (ElementType::UnsignedInt, 2) => F::Uint32x2,
        (ElementType::UnsignedInt, 3) => F::Uint32x3,
        (ElementType::UnsignedInt, 4) => F::Uint32x4,
        (ElementType::UnsignedByte, 2) if attr.normalized => F::Unorm8x2,
        (ElementType::UnsignedByte, 4) if attr.normalized => F::Unorm8x4,
        (ElementType::UnsignedByte, 2) => F::Uint8x2,
        (ElementType::UnsignedByte, 4) => F::Uint8x4,
        (ElementType::UnsignedShort, 2) if attr.normalized => F::Unorm16x2,
        (ElementType::UnsignedShort, 4) if attr.normalized => F::Unorm16x4,
        (ElementType::UnsignedShort, 2) => F::Uint16x2,
        (ElementType::UnsignedShort, 4) => F::Uint16x4,
        (element, components) => {
            return Err(OrreryError::VertexFormat(format!(
                "{components} x {element:?}"
            )));
        }
    };
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_counts_four_bytes_per_component() {
        let layout = VertexLayout::new().push_float(3).push_float(3).push_float(2);
        assert_eq!(layout.components(), 8);
        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.offsets(), vec![0, 12, 24]);
    }

    #[test]
    fn maps_to_wgpu_formats() {
        let layout = VertexLayout::new().push_float(3).push_float(1);
        let attrs = layout.to_wgpu_attributes(2).unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attrs[0].shader_location, 2);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[1].shader_location, 3);
        assert_eq!(layout.array_stride(), 16);
    }

    #[test]
    fn narrow_elements_map_where_wgpu_has_them() {
        let colors = VertexLayout::new().push(4, ElementType::UnsignedByte, true);
        let attrs = colors.to_wgpu_attributes(0).unwrap();
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Unorm8x4);

        let layout = VertexLayout::new().push(3, ElementType::UnsignedByte, false);
        assert!(matches!(
            layout.to_wgpu_attributes(0),
            Err(OrreryError::VertexFormat(_))
        ));
    }
}
