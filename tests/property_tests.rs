mod common;

use common::{create_temp_directory, touch_files};
use image::DynamicImage;
use proptest::prelude::*;
use seq2gif::{coerce_gif_extension, resolve_inputs, CropSpec, Frame, ResizeSpec, Seq2GifError};
use std::path::{Path, PathBuf};

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, max_global_rejects: 8192, ..ProptestConfig::default() })]

    #[test]
    fn explicit_inputs_keep_caller_order(
        names in prop::collection::hash_set("[a-z]{1,8}\\.png", 2..6)
    ) {
        let temp_dir = create_temp_directory();
        let names: Vec<String> = names.into_iter().collect();
        let paths = touch_files(temp_dir.path(), &names);
        let inputs: Vec<String> = paths.iter().map(|p| p.to_string_lossy().into_owned()).collect();

        let resolved = resolve_inputs(&inputs).unwrap();
        prop_assert_eq!(resolved, paths);
    }

    #[test]
    fn pattern_inputs_come_back_sorted(
        names in prop::collection::hash_set("[a-z0-9_]{1,8}\\.png", 1..6)
    ) {
        let temp_dir = create_temp_directory();
        let names: Vec<String> = names.into_iter().collect();
        let mut expected = touch_files(temp_dir.path(), &names);
        expected.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        let pattern = temp_dir.path().join("*.png").to_string_lossy().into_owned();
        let resolved = resolve_inputs(&[pattern]).unwrap();
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn single_plain_input_always_fails(name in "[a-z]{1,12}\\.png") {
        let result = resolve_inputs(&[name]);
        prop_assert!(matches!(result, Err(Seq2GifError::InsufficientInput(_))));
    }

    #[test]
    fn output_always_ends_in_gif(stem in "[a-zA-Z0-9_-]{1,12}", ext in prop::option::of("[a-zA-Z]{1,4}")) {
        let file = match &ext {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem.clone(),
        };
        let coerced = coerce_gif_extension(&Path::new("/out").join(file));
        prop_assert_eq!(coerced.extension().and_then(|e| e.to_str()), Some("gif"));
        prop_assert_eq!(coerced.parent(), Some(Path::new("/out")));
    }

    #[test]
    fn degenerate_crop_always_rejected(x in 0u32..1000, y in 0u32..1000, w in 0u32..50, h in 0u32..50) {
        prop_assume!(w == 0 || h == 0);
        let tokens = [x, y, w, h].map(|v| v.to_string());
        prop_assert!(matches!(CropSpec::parse(&tokens), Err(Seq2GifError::InvalidGeometry(_))));
    }

    #[test]
    fn crop_result_always_matches_box(
        width in 1u32..200, height in 1u32..200,
        x in 0u32..300, y in 0u32..300, w in 1u32..200, h in 1u32..200
    ) {
        let frame = Frame::new(DynamicImage::new_rgb8(width, height), PathBuf::from("f.png"));
        let cropped = frame.crop(&CropSpec::new(x, y, w, h).unwrap()).unwrap();
        prop_assert_eq!(cropped.dimensions(), (w, h));
    }

    #[test]
    fn width_resize_preserves_aspect_ratio(width in 10u32..2000, height in 10u32..2000, new_width in 1u32..2000) {
        let (w, h) = ResizeSpec::Width(new_width).target_dimensions(width, height);
        prop_assert_eq!(w, new_width);
        let expected = (height as f64 * (new_width as f64 / width as f64)).round().max(1.0) as u32;
        prop_assert_eq!(h, expected);
    }

    #[test]
    fn percent_resize_scales_both_axes(width in 1u32..4000, height in 1u32..4000, percent in 1u32..400) {
        let (w, h) = ResizeSpec::Percent(percent as f64).target_dimensions(width, height);
        let factor = percent as f64 / 100.0;
        prop_assert_eq!(w, (width as f64 * factor).round().max(1.0) as u32);
        prop_assert_eq!(h, (height as f64 * factor).round().max(1.0) as u32);
    }
}
