//! The Transformer trait and local implementation.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, RgbImage};
use rand::Rng;
use tracing::debug;

use crate::error::TransformError;
use crate::kind::FilterKind;

/// Applies a named transform to an image file.
///
/// The orchestration core sequences load → transform → save through this
/// trait and stays agnostic to the pixel math behind each kind.
pub trait Transformer: Send + Sync {
    /// Apply `kind` to the image at `input` and return the saved output path.
    fn apply(&self, kind: FilterKind, input: &Path) -> Result<PathBuf, TransformError>;
}

/// Edge-emphasis convolution kernel used by [`FilterKind::Contour`].
const CONTOUR_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// Luminance cutoff used by [`FilterKind::Segment`].
const SEGMENT_THRESHOLD: u8 = 128;

/// Fraction of pixels turned to pepper (and, separately, to salt).
const NOISE_RATIO: f64 = 0.05;

/// A transformer that runs all filters locally with the `image` crate.
///
/// Output lands next to the input as `{stem}_{slug}.jpg`. Inputs are
/// per-request files in per-request directories, so derived names cannot
/// collide across concurrent messages.
#[derive(Debug, Clone, Default)]
pub struct LocalTransformer;

impl LocalTransformer {
    /// Create a new local transformer.
    pub fn new() -> Self {
        Self
    }

    fn output_path(input: &Path, kind: FilterKind) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        input.with_file_name(format!("{}_{}.jpg", stem, kind.slug()))
    }

    fn transform(image: DynamicImage, kind: FilterKind) -> DynamicImage {
        match kind {
            FilterKind::Blur => image.blur(5.0),
            FilterKind::Contour => image.grayscale().filter3x3(&CONTOUR_KERNEL),
            FilterKind::Rotate => image.rotate90(),
            FilterKind::RotateTwice => image.rotate90().rotate90(),
            FilterKind::Segment => {
                let mut gray = image.to_luma8();
                for pixel in gray.pixels_mut() {
                    pixel.0[0] = if pixel.0[0] >= SEGMENT_THRESHOLD { 255 } else { 0 };
                }
                DynamicImage::ImageLuma8(gray)
            }
            FilterKind::SaltAndPepper => {
                let mut rgb = image.to_rgb8();
                let mut rng = rand::thread_rng();
                for pixel in rgb.pixels_mut() {
                    let roll: f64 = rng.gen();
                    if roll < NOISE_RATIO {
                        pixel.0 = [0, 0, 0];
                    } else if roll > 1.0 - NOISE_RATIO {
                        pixel.0 = [255, 255, 255];
                    }
                }
                DynamicImage::ImageRgb8(rgb)
            }
            FilterKind::Concat => {
                let rgb = image.to_rgb8();
                let (width, height) = rgb.dimensions();
                let mut canvas = RgbImage::new(width * 2, height);
                image::imageops::replace(&mut canvas, &rgb, 0, 0);
                image::imageops::replace(&mut canvas, &rgb, width as i64, 0);
                DynamicImage::ImageRgb8(canvas)
            }
        }
    }
}

impl Transformer for LocalTransformer {
    fn apply(&self, kind: FilterKind, input: &Path) -> Result<PathBuf, TransformError> {
        let image = image::open(input)?;
        let (width, height) = image.dimensions();
        debug!(
            "Applying {} to {} ({}x{})",
            kind,
            input.display(),
            width,
            height
        );

        let transformed = Self::transform(image, kind);

        let output = Self::output_path(input, kind);
        // JPEG output; drop any alpha channel before encoding.
        transformed.to_rgb8().save(&output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checkerboard(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([200, 30, 90])
            } else {
                Rgb([10, 220, 40])
            }
        }))
    }

    fn write_input(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        checkerboard(8, 6).to_rgb8().save(&path).unwrap();
        path
    }

    #[test]
    fn test_apply_all_kinds_produce_output() {
        let dir = tempfile::tempdir().unwrap();
        let transformer = LocalTransformer::new();

        for kind in FilterKind::ALL {
            let input = write_input(dir.path(), &format!("{}.jpg", kind.slug()));
            let output = transformer.apply(kind, &input).unwrap();
            assert!(output.exists(), "no output for {}", kind);
            assert_ne!(output, input);
        }
    }

    #[test]
    fn test_rotate_changes_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "in.jpg");

        let output = LocalTransformer::new()
            .apply(FilterKind::Rotate, &input)
            .unwrap();
        let rotated = image::open(output).unwrap();
        assert_eq!(rotated.dimensions(), (6, 8));
    }

    #[test]
    fn test_concat_doubles_width() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "in.jpg");

        let output = LocalTransformer::new()
            .apply(FilterKind::Concat, &input)
            .unwrap();
        let concatenated = image::open(output).unwrap();
        assert_eq!(concatenated.dimensions(), (16, 6));
    }

    #[test]
    fn test_rotate_twice_equals_two_rotations() {
        let source = checkerboard(8, 6);

        let twice = LocalTransformer::transform(source.clone(), FilterKind::RotateTwice);
        let chained = LocalTransformer::transform(
            LocalTransformer::transform(source, FilterKind::Rotate),
            FilterKind::Rotate,
        );

        assert_eq!(twice.to_rgb8().into_raw(), chained.to_rgb8().into_raw());
    }

    #[test]
    fn test_segment_is_binary() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "in.jpg");

        let output = LocalTransformer::new()
            .apply(FilterKind::Segment, &input)
            .unwrap();
        let segmented = image::open(output).unwrap().to_luma8();
        // JPEG round-trip smears values slightly; check they cluster at the rails.
        for pixel in segmented.pixels() {
            assert!(pixel.0[0] < 64 || pixel.0[0] > 192);
        }
    }

    #[test]
    fn test_unreadable_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("not_an_image.jpg");
        std::fs::write(&input, b"definitely not jpeg").unwrap();

        let result = LocalTransformer::new().apply(FilterKind::Blur, &input);
        assert!(matches!(result, Err(TransformError::Image(_))));
    }
}
