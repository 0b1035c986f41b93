//! Averaging a set of colors into one.

use super::hex::HexColor;

/// Color reported when there is nothing to mix.
pub const EMPTY_MIX: (u8, u8, u8) = (0xcc, 0xcc, 0xcc);

/// Per-channel arithmetic mean, rounded half up.
pub fn mix<'a, I>(colors: I) -> HexColor
where
    I: IntoIterator<Item = &'a HexColor>,
{
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for color in colors {
        let (r, g, b) = color.rgb();
        sums[0] += u64::from(r);
        sums[1] += u64::from(g);
        sums[2] += u64::from(b);
        count += 1;
    }

    if count == 0 {
        let (r, g, b) = EMPTY_MIX;
        return HexColor::from_rgb(r, g, b);
    }

    // floor(sum / n + 1/2) without floats; the mean never exceeds 255
    let avg = |sum: u64| ((2 * sum + count) / (2 * count)) as u8;
    HexColor::from_rgb(avg(sums[0]), avg(sums[1]), avg(sums[2]))
}
