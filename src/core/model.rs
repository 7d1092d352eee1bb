#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(value: u32) -> Self {
        Color {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_components() {
        let color = Color::from_hex(0x14532d);
        assert_eq!(color, Color { r: 0x14, g: 0x53, b: 0x2d });
        assert_eq!(color.to_hex_string(), "#14532d");
        assert_eq!(Color::from_hex(0x0000ff).to_hex_string(), "#0000ff");
    }
}
