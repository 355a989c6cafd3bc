//! Text rendering helpers. Drawing surfaces live outside the crate; these
//! only map cells and individuals to colours and characters.

pub mod ascii;
pub mod palette;

pub use ascii::{render, render_grid};
pub use palette::{cell_color, individual_color, Swatch, PALETTE};
