/// Opaque RGB color written straight into vertex data.
///
/// Channels are nominally in `[0, 1]` but are never clamped here: shaded
/// geometry may carry values slightly outside that range and the output
/// merger saturates them on write.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::gray(0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::gray(1.0)
    }

    /// Subtracts `amount` from every channel. No clamping.
    #[inline]
    pub fn darkened(self, amount: f32) -> Self {
        Self::new(self.r - amount, self.g - amount, self.b - amount)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
