// anchors sampled from the cividis colormap at 0, 1/4, 1/2, 3/4 and 1
const CIVIDIS: [[u8; 3]; 5] = [
    [0, 34, 78],
    [54, 69, 108],
    [124, 123, 120],
    [188, 175, 111],
    [254, 232, 56],
];

/// Map `t` in `[0, 1]` to an RGB color of the cividis colormap.
///
/// Values outside the range are clamped, NaN maps to the lowest color.
pub fn cividis(t: f32) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let pos = t * (CIVIDIS.len() - 1) as f32;
    let i = (pos.floor() as usize).min(CIVIDIS.len() - 2);
    let frac = pos - i as f32;

    let (a, b) = (CIVIDIS[i], CIVIDIS[i + 1]);
    let mut rgb = [0u8; 3];
    for c in 0..3 {
        let v = a[c] as f32 + (b[c] as f32 - a[c] as f32) * frac;
        rgb[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::cividis;

    #[test]
    fn cividis_endpoints() {
        assert_eq!(cividis(0.0), [0, 34, 78]);
        assert_eq!(cividis(1.0), [254, 232, 56]);
        assert_eq!(cividis(-1.0), cividis(0.0));
        assert_eq!(cividis(2.0), cividis(1.0));
        assert_eq!(cividis(f32::NAN), cividis(0.0));
    }

    #[test]
    fn cividis_brightens() {
        let luma = |rgb: [u8; 3]| rgb.iter().map(|&c| c as u32).sum::<u32>();
        let samples = (0..=10).map(|i| luma(cividis(i as f32 / 10.0))).collect::<Vec<_>>();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }
}
