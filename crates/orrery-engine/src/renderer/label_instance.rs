use bytemuck::{Pod, Zeroable};

/// Screen-space anchor for a text label drawn by the host.
/// 4 floats = 16 bytes per label.
///
/// `index` selects which string the host renders (label text never
/// crosses the wasm boundary). `visible` is 0.0 or 1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    pub index: f32,
    pub x: f32,
    pub y: f32,
    pub visible: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 4;
}

/// Buffer of label anchors.
pub struct LabelBuffer {
    labels: Vec<LabelInstance>,
}

impl LabelBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            labels: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn push(&mut self, label: LabelInstance) {
        self.labels.push(label);
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.labels.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_instance_is_16_bytes() {
        assert_eq!(std::mem::size_of::<LabelInstance>(), 16);
    }
}
