/// Fixed chart colours handed out before any are generated.
pub const BASE_PALETTE: [&str; 8] = [
    "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40", "#8bc34a", "#e91e63",
];

const GENERATED_SATURATION: u8 = 70;
const GENERATED_LIGHTNESS: u8 = 55;

/// Colour tokens for `n` chart slices.
///
/// Up to the palette size this is a prefix of [`BASE_PALETTE`]; beyond it the
/// whole palette is followed by hues spread evenly around the colour wheel.
pub fn colors(n: usize) -> Vec<String> {
    if n <= BASE_PALETTE.len() {
        return BASE_PALETTE[..n].iter().map(|c| c.to_string()).collect();
    }
    let extra = n - BASE_PALETTE.len();
    let step = 360.0 / extra as f64;
    BASE_PALETTE
        .iter()
        .map(|c| c.to_string())
        .chain((0..extra).map(|i| {
            let hue = (step * i as f64).floor() as u32;
            format!("hsl({hue} {GENERATED_SATURATION}% {GENERATED_LIGHTNESS}%)")
        }))
        .collect()
}
