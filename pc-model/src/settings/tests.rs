use super::*;

#[test]
fn sanitized_keeps_sane_params() {
    let params = FurTextureParams::default();
    assert_eq!(params.sanitized(), params);
}

#[test]
fn sanitized_bounds_every_field() {
    let params = FurTextureParams {
        width: 0,
        height: u32::MAX,
        stroke_count: u32::MAX,
        seed: 3,
        tiling: f32::NAN,
    }
    .sanitized();
    assert_eq!(params.width, 1);
    assert_eq!(params.height, MAX_FUR_TEXTURE_SIZE);
    assert_eq!(params.stroke_count, MAX_FUR_STROKES);
    assert_eq!(params.seed, 3);
    assert_eq!(params.tiling, 1.0);

    let negative = FurTextureParams {
        tiling: -2.0,
        ..FurTextureParams::default()
    };
    assert_eq!(negative.sanitized().tiling, 1.0);
}
