use image::{ImageBuffer, Rgb};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `count` PNG frames named `number_1.png`, `number_2.png`, ...
#[allow(dead_code)]
pub fn create_test_sequence(dir: &Path, count: usize, width: u32, height: u32) -> Vec<PathBuf> {
    (1..=count)
        .map(|n| {
            let path = dir.join(format!("number_{}.png", n));
            let shade = (n * 70 % 256) as u8;
            let img = ImageBuffer::from_fn(width, height, |x, y| {
                Rgb([shade, (x % 256) as u8, (y % 256) as u8])
            });
            img.save(&path).unwrap();
            path
        })
        .collect()
}

/// Creates empty files; enough for path resolution, not for decoding.
#[allow(dead_code)]
pub fn touch_files(dir: &Path, names: &[String]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::File::create(&path).unwrap();
            path
        })
        .collect()
}

#[allow(dead_code)]
pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

#[allow(dead_code)]
pub fn gif_frame_count(path: &Path) -> usize {
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;

    let reader = std::io::BufReader::new(std::fs::File::open(path).unwrap());
    GifDecoder::new(reader)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
        .len()
}
