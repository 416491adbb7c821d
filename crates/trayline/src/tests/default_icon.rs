use crate::default_icon::{DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE, default_icon_rgba};

fn pixel(pixels: &[u8], x: u32, y: u32) -> &[u8] {
    let offset = ((y * DEFAULT_ICON_SIZE + x) * 4) as usize;
    &pixels[offset..offset + 4]
}

/// WHAT: Default icon is a filled circle on transparent corners
/// WHY: The tray must show something before the parent sends an icon
#[test]
fn given_default_icon_when_rendered_then_circle_on_transparent() {
    // Given/When: The default icon pixels
    let pixels = default_icon_rgba();

    // Then: Correct size, green center, transparent corners
    assert_eq!(pixels.len(), (DEFAULT_ICON_SIZE * DEFAULT_ICON_SIZE * 4) as usize);
    let mid = DEFAULT_ICON_SIZE / 2;
    assert_eq!(pixel(&pixels, mid, mid), DEFAULT_ICON_COLOR);
    assert_eq!(pixel(&pixels, 0, 0), [0, 0, 0, 0]);
    assert_eq!(pixel(&pixels, DEFAULT_ICON_SIZE - 1, DEFAULT_ICON_SIZE - 1), [0, 0, 0, 0]);
}

/// WHAT: The circle is symmetric
/// WHY: An off-by-one would show as a lopsided icon
#[test]
fn given_default_icon_when_mirrored_then_identical() {
    // Given: The default icon pixels
    let pixels = default_icon_rgba();
    let last = DEFAULT_ICON_SIZE - 1;

    // When/Then: Every pixel matches its horizontal and vertical mirror
    for y in 0..DEFAULT_ICON_SIZE {
        for x in 0..DEFAULT_ICON_SIZE {
            assert_eq!(pixel(&pixels, x, y), pixel(&pixels, last - x, y));
            assert_eq!(pixel(&pixels, x, y), pixel(&pixels, x, last - y));
        }
    }
}
