//! Bundled assets
//!
//! Text-art bitmaps compiled into the binary and resolved by identifier.

use crate::{CollapseBarError, Result};

const THUMBNAIL: &str = include_str!("../assets/thumbnail.txt");

/// Identifier of the header image
pub const THUMBNAIL_ID: &str = "thumbnail";

/// A rectangular grid of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    pixels: Vec<Vec<char>>,
}

impl Bitmap {
    /// Parse text art; ragged lines are padded with spaces
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        if lines.is_empty() || width == 0 {
            return Err(CollapseBarError::AssetError(
                "bitmap has no pixels".to_string(),
            ));
        }

        let pixels = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        Ok(Self { width, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    /// Height in rows when scaled to fill `width` columns with the aspect preserved
    pub fn fill_width_rows(&self, width: u16) -> u16 {
        let rows = (self.height() * width as usize + self.width / 2) / self.width;
        rows.clamp(1, u16::MAX as usize) as u16
    }

    /// Scale to fill `width`, then center-crop (or pad) the height to `rows`
    pub fn render_fill_width(&self, width: u16, rows: u16) -> Vec<String> {
        if width == 0 || rows == 0 {
            return Vec::new();
        }

        let natural = self.fill_width_rows(width) as usize;
        let rows = rows as usize;
        let crop_top = natural.saturating_sub(rows) / 2;

        (0..rows)
            .map(|line| {
                let scaled_row = crop_top + line;
                if scaled_row >= natural {
                    return " ".repeat(width as usize);
                }
                let src_y = (scaled_row * self.height() / natural).min(self.height() - 1);
                (0..width as usize)
                    .map(|x| {
                        let src_x = (x * self.width / width as usize).min(self.width - 1);
                        self.pixels[src_y][src_x]
                    })
                    .collect()
            })
            .collect()
    }
}

/// Resolve a bundled bitmap by identifier
pub fn load(id: &str) -> Result<Bitmap> {
    match id {
        THUMBNAIL_ID => Bitmap::parse(THUMBNAIL),
        other => Err(CollapseBarError::AssetError(format!(
            "no bundled asset named '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Bitmap {
        Bitmap::parse("ab\ncd").unwrap()
    }

    #[test]
    fn test_thumbnail_is_bundled() {
        let bitmap = load(THUMBNAIL_ID).expect("thumbnail present");
        assert!(bitmap.width() > 0);
        assert!(bitmap.height() > 0);
    }

    #[test]
    fn test_unknown_asset_is_an_error() {
        assert!(matches!(load("cover"), Err(CollapseBarError::AssetError(_))));
    }

    #[test]
    fn test_parse_pads_ragged_lines() {
        let bitmap = Bitmap::parse("abc\nd").unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.render_fill_width(3, 2), vec!["abc", "d  "]);
    }

    #[test]
    fn test_empty_bitmap_rejected() {
        assert!(Bitmap::parse("").is_err());
    }

    #[test]
    fn test_fill_width_scales_both_axes() {
        let bitmap = checker();
        assert_eq!(bitmap.fill_width_rows(4), 4);
        assert_eq!(
            bitmap.render_fill_width(4, 4),
            vec!["aabb", "aabb", "ccdd", "ccdd"]
        );
    }

    #[test]
    fn test_fill_width_center_crops_height() {
        let bitmap = Bitmap::parse("a\nb\nc\nd").unwrap();
        // natural height at width 1 is 4 rows; keep the middle two
        assert_eq!(bitmap.render_fill_width(1, 2), vec!["b", "c"]);
    }

    #[test]
    fn test_fill_width_pads_short_images() {
        let bitmap = checker();
        let lines = bitmap.render_fill_width(2, 3);
        assert_eq!(lines, vec!["ab", "cd", "  "]);
    }
}
