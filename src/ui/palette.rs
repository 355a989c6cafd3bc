use crate::types::Cell;

/// Display colour for an individual or a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Swatch {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// Individual colours, looked up by identity modulo the table size
pub const PALETTE: [Swatch; 10] = [
    Swatch { name: "orange", rgb: (0xFF, 0x57, 0x33) },
    Swatch { name: "green", rgb: (0x33, 0xFF, 0x57) },
    Swatch { name: "blue", rgb: (0x33, 0x57, 0xFF) },
    Swatch { name: "yellow", rgb: (0xF1, 0xC4, 0x0F) },
    Swatch { name: "purple", rgb: (0x9B, 0x59, 0xB6) },
    Swatch { name: "turquoise", rgb: (0x1A, 0xBC, 0x9C) },
    Swatch { name: "carrot", rgb: (0xE6, 0x7E, 0x22) },
    Swatch { name: "red", rgb: (0xE7, 0x4C, 0x3C) },
    Swatch { name: "dark_mauve", rgb: (0x8E, 0x44, 0xAD) },
    Swatch { name: "dark_blue_gray", rgb: (0x34, 0x49, 0x5E) },
];

/// Colour of individual `id`; wraps round past the end of the table
pub fn individual_color(id: usize) -> Swatch {
    PALETTE[id % PALETTE.len()]
}

pub fn cell_color(cell: Cell) -> Swatch {
    match cell {
        Cell::Open => Swatch { name: "white", rgb: (255, 255, 255) },
        Cell::Wall => Swatch { name: "black", rgb: (0, 0, 0) },
        Cell::Start => Swatch { name: "green", rgb: (0, 255, 0) },
        Cell::End => Swatch { name: "red", rgb: (255, 0, 0) },
    }
}
