//! Built-in icon: a filled green circle on a transparent square.

/// Edge length of the default icon in pixels.
pub(crate) const DEFAULT_ICON_SIZE: u32 = 22;

/// Fill color of the default icon, `#2ead33`, as RGBA.
pub(crate) const DEFAULT_ICON_COLOR: [u8; 4] = [0x2e, 0xad, 0x33, 0xff];

/// RGBA pixels of the default icon, row-major, `DEFAULT_ICON_SIZE` square.
pub(crate) fn default_icon_rgba() -> Vec<u8> {
    let size = DEFAULT_ICON_SIZE as usize;
    let half = DEFAULT_ICON_SIZE as f32 / 2.0;
    let radius_sq = half * half;

    let mut pixels = vec![0u8; size * size * 4];
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - half + 0.5;
            let dy = y as f32 - half + 0.5;
            if dx * dx + dy * dy <= radius_sq {
                let offset = (y * size + x) * 4;
                pixels[offset..offset + 4].copy_from_slice(&DEFAULT_ICON_COLOR);
            }
        }
    }
    pixels
}
