use ratatui::style::Color;
use std::fmt;

/// A 24-bit color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Scale the channels by `factor` (0.0 = black, 1.0 = unchanged).
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self(
            (f32::from(self.0) * f) as u8,
            (f32::from(self.1) * f) as u8,
            (f32::from(self.2) * f) as u8,
        )
    }

    /// Perceived brightness in 0..=255, used to pick readable text over a swatch.
    #[must_use]
    pub fn luma(self) -> u8 {
        let l = 0.299 * f32::from(self.0) + 0.587 * f32::from(self.1) + 0.114 * f32::from(self.2);
        l.round().clamp(0.0, 255.0) as u8
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Two-stop background gradient of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    #[must_use]
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }

    /// Color at position `t` along the gradient (0.0 = `from`, 1.0 = `to`).
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgb {
        self.from.lerp(self.to, t)
    }

    /// Sample `steps` evenly spaced colors, endpoints included.
    pub fn steps(&self, steps: usize) -> Vec<Rgb> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.from],
            n => (0..n)
                .map(|i| self.sample(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        assert_eq!(Rgb::hex(0xff6363), Rgb(255, 99, 99));
        assert_eq!(Rgb::hex(0x000000), Rgb(0, 0, 0));
        assert_eq!(Rgb::hex(0xa58efb).to_string(), "#a58efb");
    }

    #[test]
    fn test_gradient_endpoints() {
        let g = Gradient::new(Rgb(0, 0, 0), Rgb(200, 100, 50));
        assert_eq!(g.sample(0.0), g.from);
        assert_eq!(g.sample(1.0), g.to);
        assert_eq!(g.sample(0.5), Rgb(100, 50, 25));
        // Out of range positions clamp to the stops
        assert_eq!(g.sample(-3.0), g.from);
        assert_eq!(g.sample(7.0), g.to);
    }

    #[test]
    fn test_gradient_steps() {
        let g = Gradient::new(Rgb(0, 0, 0), Rgb(90, 90, 90));
        assert!(g.steps(0).is_empty());
        assert_eq!(g.steps(1), vec![Rgb(0, 0, 0)]);
        assert_eq!(
            g.steps(4),
            vec![Rgb(0, 0, 0), Rgb(30, 30, 30), Rgb(60, 60, 60), Rgb(90, 90, 90)]
        );
    }

    #[test]
    fn test_scale_and_luma() {
        assert_eq!(Rgb(200, 100, 50).scale(0.5), Rgb(100, 50, 25));
        assert_eq!(Rgb(255, 255, 255).luma(), 255);
        assert_eq!(Rgb(0, 0, 0).luma(), 0);
    }
}
