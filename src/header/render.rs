//! Text rendering of the header artifact.

use std::fmt;

use crate::image::RGB_CHANNELS;

/// Everything needed to render one header file.
///
/// `data` must hold exactly `size * size * 3` bytes.
#[derive(Debug, Clone)]
pub struct HeaderArtifact<'a> {
    /// Basename of the source image.
    pub source_name: &'a str,
    /// Source `(width, height)` before normalization.
    pub original_dims: (u32, u32),
    /// Edge length of the normalized image.
    pub size: u32,
    /// Include-guard token.
    pub guard: &'a str,
    /// Identifier of the byte array.
    pub array_name: &'a str,
    /// Values per data line.
    pub values_per_line: usize,
    /// Flattened pixel bytes.
    pub data: &'a [u8],
}

impl fmt::Display for HeaderArtifact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (orig_w, orig_h) = self.original_dims;
        let size = self.size;

        writeln!(
            f,
            "/* Auto-generated from {} ({orig_w}x{orig_h} -> {size}x{size}) */",
            self.source_name
        )?;
        writeln!(f, "#ifndef {}", self.guard)?;
        writeln!(f, "#define {}", self.guard)?;
        writeln!(f)?;
        writeln!(f, "#define IMG_WIDTH  {size}")?;
        writeln!(f, "#define IMG_HEIGHT {size}")?;
        writeln!(f, "#define IMG_CHANNELS {RGB_CHANNELS}")?;
        writeln!(f)?;
        writeln!(
            f,
            "static const unsigned char {}[{}] = {{",
            self.array_name,
            self.data.len()
        )?;

        let lines = self.data.chunks(self.values_per_line.max(1));
        let last = lines.len().saturating_sub(1);
        for (index, chunk) in lines.enumerate() {
            f.write_str("    ")?;
            for (i, value) in chunk.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{value:>3}")?;
            }
            if index < last {
                f.write_str(",")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(f, "#endif")
    }
}

/// Render `artifact` into a string, ready to be written in one go.
#[must_use]
pub fn render_header(artifact: &HeaderArtifact<'_>) -> String {
    artifact.to_string()
}
