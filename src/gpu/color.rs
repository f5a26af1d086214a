/// Convert an 8-bit sRGB color to the float RGBA a render target expects.
///
/// sRGB surfaces encode on write, so their inputs must be linear.
pub fn to_rgba(rgb: [u8; 3], srgb_target: bool) -> [f32; 4] {
    let channel = |c: u8| {
        let c = f32::from(c) / 255.0;
        if !srgb_target {
            c
        } else if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 1.0]
}

/// Clear color for the render pass
pub fn to_clear_color(rgb: [u8; 3], srgb_target: bool) -> wgpu::Color {
    let [r, g, b, a] = to_rgba(rgb, srgb_target);
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: f64::from(a),
    }
}
