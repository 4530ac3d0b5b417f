use std::io::Read;

use ggez::audio::{self, SoundSource};
use ggez::graphics::{Image, ImageFormat, Rect};
use ggez::{Context, GameError, GameResult};
use image::RgbaImage;
use log::warn;

/// How transparency is derived for a loaded sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorKey {
    /// Keep the image fully opaque.
    Opaque,
    /// Treat every pixel matching the top-left pixel as transparent.
    TopLeftPixel,
    /// Treat every pixel matching the given RGB value as transparent.
    Rgb([u8; 3]),
}

/// Images and sounds loaded once at startup.
pub struct Assets {
    pub fist_image: Image,
    pub chimp_image: Image,
    pub punch_sound: Sound,
    pub whiff_sound: Sound,
}

/// Load a sprite from the resource directory, returning the GPU image and its
/// bounding rect. Colorkeyed pixels are cleared to transparent before upload.
pub fn load_image(ctx: &mut Context, name: &str, colorkey: ColorKey) -> GameResult<(Image, Rect)> {
    let mut bytes = Vec::new();
    ctx.fs.open(name)?.read_to_end(&mut bytes)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|why| GameError::ResourceLoadError(format!("cannot load image {name}: {why}")))?
        .to_rgba8();
    let rgba = apply_colorkey(decoded, colorkey);
    let (width, height) = rgba.dimensions();
    let image = Image::from_pixels(
        ctx,
        rgba.as_raw(),
        ImageFormat::Rgba8UnormSrgb,
        width,
        height,
    );
    Ok((image, Rect::new(0.0, 0.0, width as f32, height as f32)))
}

fn apply_colorkey(mut rgba: RgbaImage, colorkey: ColorKey) -> RgbaImage {
    let key = match colorkey {
        ColorKey::Opaque => return rgba,
        ColorKey::TopLeftPixel => {
            let corner = rgba.get_pixel(0, 0);
            [corner[0], corner[1], corner[2]]
        }
        ColorKey::Rgb(rgb) => rgb,
    };
    for pixel in rgba.pixels_mut() {
        if pixel.0[..3] == key {
            pixel.0[3] = 0;
        }
    }
    rgba
}

/// A playable sound effect, or a stand-in when audio is unavailable.
pub enum Sound {
    Sample(audio::Source),
    Silent,
}

impl Sound {
    pub fn play(&mut self, ctx: &Context) -> GameResult {
        match self {
            Sound::Sample(source) => {
                source.play();
                Ok(())
            }
            Sound::Silent => Ok(()),
        }
    }
}

/// Load a sound from the resource directory. A missing or corrupt file is
/// fatal; an unavailable audio subsystem degrades to a silent no-op handle.
pub fn load_sound(ctx: &mut Context, name: &str) -> GameResult<Sound> {
    match audio::Source::new(ctx, name) {
        Ok(source) => Ok(Sound::Sample(source)),
        Err(GameError::AudioError(why)) => {
            warn!("sound disabled, {name} will not play: {why}");
            Ok(Sound::Silent)
        }
        Err(why) => Err(why),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checkered(key: [u8; 3], other: [u8; 3]) -> RgbaImage {
        RgbaImage::from_fn(4, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([key[0], key[1], key[2], 255])
            } else {
                Rgba([other[0], other[1], other[2], 255])
            }
        })
    }

    #[test]
    fn top_left_colorkey_clears_matching_pixels() {
        let rgba = apply_colorkey(checkered([255, 0, 255], [9, 9, 9]), ColorKey::TopLeftPixel);
        assert_eq!(rgba.get_pixel(0, 0).0[3], 0);
        assert_eq!(rgba.get_pixel(2, 0).0[3], 0);
        assert_eq!(rgba.get_pixel(1, 0).0[3], 255);
    }

    #[test]
    fn explicit_colorkey_clears_only_that_color() {
        let rgba = apply_colorkey(checkered([1, 2, 3], [9, 9, 9]), ColorKey::Rgb([9, 9, 9]));
        assert_eq!(rgba.get_pixel(0, 0).0[3], 255);
        assert_eq!(rgba.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn opaque_leaves_the_image_untouched() {
        let rgba = apply_colorkey(checkered([1, 2, 3], [9, 9, 9]), ColorKey::Opaque);
        assert!(rgba.pixels().all(|p| p.0[3] == 255));
    }
}
