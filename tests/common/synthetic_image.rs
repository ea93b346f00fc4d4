/// Generates black disks on a white background, packed RGB8.
///
/// A pixel belongs to a disk when its squared distance to the centre is at
/// most `r²`.
pub fn disks_rgb(width: usize, height: usize, disks: &[(i64, i64, i64)]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![255u8; 3 * width * height];
    for y in 0..height {
        for x in 0..width {
            let inside = disks.iter().any(|&(cx, cy, r)| {
                let dx = x as i64 - cx;
                let dy = y as i64 - cy;
                dx * dx + dy * dy <= r * r
            });
            if inside {
                let i = 3 * (y * width + x);
                img[i..i + 3].fill(0);
            }
        }
    }
    img
}

/// Copies a packed RGB8 buffer into rows of `stride` bytes, padding with junk.
pub fn with_stride(packed: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    assert!(stride >= 3 * width, "stride must cover a row");
    let mut out = vec![0xAB; stride * height];
    for y in 0..height {
        out[y * stride..y * stride + 3 * width]
            .copy_from_slice(&packed[y * 3 * width..(y + 1) * 3 * width]);
    }
    out
}
