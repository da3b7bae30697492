use std::path::{Path, PathBuf};

use image::RgbaImage;
use pc_model::FurTextureParams;
use pc_model::geometry::paint_fur_normals;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("pixel buffer does not match {width}x{height}")]
    SizeMismatch { width: u32, height: u32 },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Paints the fur normal map exactly as the figure would and saves it as PNG.
pub fn export_fur_texture(params: &FurTextureParams, path: &Path) -> Result<(), ExportError> {
    let params = params.sanitized();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let pixels = paint_fur_normals(params.width, params.height, params.stroke_count, &mut rng);

    let image = RgbaImage::from_raw(params.width, params.height, pixels).ok_or(
        ExportError::SizeMismatch {
            width: params.width,
            height: params.height,
        },
    )?;
    image.save(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        width = params.width,
        height = params.height,
        seed = params.seed,
        "fur normal map exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FurTextureParams {
        FurTextureParams {
            width: 24,
            height: 12,
            stroke_count: 40,
            seed: 3,
            ..FurTextureParams::default()
        }
    }

    #[test]
    fn export_writes_a_matching_png() {
        let path = std::env::temp_dir().join(format!("pc-viewer-{}-fur.png", std::process::id()));
        export_fur_texture(&params(), &path).unwrap();

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (24, 12));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(written.into_raw(), paint_fur_normals(24, 12, 40, &mut rng));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = std::env::temp_dir()
            .join("pc-viewer-no-such-dir")
            .join("nested")
            .join("fur.png");
        let err = export_fur_texture(&params(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
