//! RGB pixel values and region color selection

use crate::io::configuration::{CHANNEL_MAX, REGION_CHANNEL_MAX, REGION_CHANNEL_MIN};
use rand::Rng;
use std::fmt;

/// A pixel made of three 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel, also the arbitration priority of a region color
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Boundary marks; permanent obstacles for the colorer
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Blank grid background
    pub const WHITE: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    /// Create a pixel from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Whether this pixel is a boundary mark
    pub const fn is_black(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Pack into `0x00RRGGBB` so a whole pixel fits one atomic word
    pub const fn pack(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Inverse of [`Rgb::pack`]; the top byte is ignored
    pub const fn unpack(word: u32) -> Self {
        Self {
            red: (word >> 16) as u8,
            green: (word >> 8) as u8,
            blue: word as u8,
        }
    }

    /// Draw a region color with every channel uniform in `[1, 253]`
    ///
    /// Never black, never the blank background. Two draws may coincide.
    pub fn random_region<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: rng.random_range(REGION_CHANNEL_MIN..=REGION_CHANNEL_MAX),
            green: rng.random_range(REGION_CHANNEL_MIN..=REGION_CHANNEL_MAX),
            blue: rng.random_range(REGION_CHANNEL_MIN..=REGION_CHANNEL_MAX),
        }
    }

    /// Channels as an array, in `image` crate order
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        let [red, green, blue] = channels;
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}
