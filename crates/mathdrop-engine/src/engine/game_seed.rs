use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 128-bit seed for every random draw a session makes.
///
/// Shape selection, placement colors and challenge operands all come from one
/// [`Pcg32`] stream initialized from this seed, so two sessions built from the
/// same seed and fed the same cell selections play out identically.
///
/// The textual form (used by `Display`, `FromStr` and serde) is a 32-digit
/// hexadecimal string, most significant byte first.
///
/// # Example
///
/// ```
/// use mathdrop_engine::{GameSession, GameSeed, Position};
///
/// let seed: GameSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut a = GameSession::with_seed(seed);
/// let mut b = GameSession::with_seed(seed);
///
/// assert_eq!(
///     a.attempt_drop(Position::new(5, 5)),
///     b.attempt_drop(Position::new(5, 5)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates the random number generator this seed describes.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.to_bytes())
    }
}

impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.to_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed {input:?}: expected 32 hexadecimal digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        // `from_str_radix` accepts a leading sign, which is not hex.
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_big_endian_hex() {
        let seed = GameSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(seed.to_bytes()[0], 0x01);
        assert_eq!(GameSeed::from_bytes([0; 16]).to_string(), "0".repeat(32));
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: GameSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "0123456789abcdef0123456789abcde",
            "0123456789abcdef0123456789abcdef0",
            "ghijklmnopqrstuvwxyzghijklmnopqr",
            "+123456789abcdef0123456789abcdef",
        ] {
            let err = input.parse::<GameSeed>().unwrap_err();
            assert!(err.to_string().contains("invalid hex"), "{input}");
        }
    }

    #[test]
    fn test_serde_string_form() {
        let seed: GameSeed = rand::rng().random();
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{seed}\""));
        let back: GameSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);

        assert!(serde_json::from_str::<GameSeed>("\"abc\"").is_err());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = GameSeed::from_bytes([7; 16]);
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..20 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }
}
