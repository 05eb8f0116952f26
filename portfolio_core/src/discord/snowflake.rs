use std::{fmt, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;

use super::error::ProfileError;

/// Discord epoch, the first second of 2015, in unix milliseconds.
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

const TIMESTAMP_SHIFT: u32 = 22;

static VALID_SNOWFLAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{17,20}$").expect("snowflake regex"));

/// A validated Discord identifier.
///
/// Up to 20 decimal digits may exceed `u64::MAX`, so the value is held as a
/// `u128` and every timestamp computation stays in exact integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snowflake {
    raw: String,
    value: u128,
}

impl Snowflake {
    pub fn parse(id: &str) -> Result<Self, ProfileError> {
        if !VALID_SNOWFLAKE.is_match(id) {
            return Err(ProfileError::InvalidSnowflake);
        }

        let value = id
            .parse::<u128>()
            .map_err(|_| ProfileError::InvalidSnowflake)?;

        Ok(Self {
            raw: id.to_string(),
            value,
        })
    }

    /// Milliseconds since the unix epoch encoded in the top 42 bits.
    pub fn timestamp_millis(&self) -> i64 {
        ((self.value >> TIMESTAMP_SHIFT) as i64) + DISCORD_EPOCH_MS
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_millis()).unwrap_or_default()
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use chrono::SecondsFormat;

    use super::*;

    #[test]
    fn test_known_snowflake_timestamp() {
        let snowflake = Snowflake::parse("175928847299117063").unwrap();

        assert_eq!(snowflake.timestamp_millis(), 1_462_015_105_796);
        assert_eq!(
            snowflake
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            "2016-04-30T11:18:25.796Z"
        );
    }

    #[test]
    fn test_decoding_does_not_lose_precision() {
        // 2^53 + 1 cannot be represented as an f64
        let id = ((1u128 << 53) + 1).to_string();
        let padded = format!("{:0>17}", id);
        let snowflake = Snowflake::parse(&padded).unwrap();

        assert_eq!(
            snowflake.timestamp_millis(),
            (((1u128 << 53) + 1) >> 22) as i64 + DISCORD_EPOCH_MS
        );
    }

    #[test]
    fn test_created_at_is_monotonic() {
        let ids = [
            "10000000000000000",
            "175928847299117063",
            "175928847303311360",
            "1141729666160402565",
            "18446744073709551615",
            "99999999999999999999",
        ];

        let dates: Vec<_> = ids
            .iter()
            .map(|id| Snowflake::parse(id).unwrap().created_at())
            .collect();

        for pair in dates.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        for id in [
            "abc",
            "",
            "1234567890123456",
            "123456789012345678901",
            "12345678901234567a",
            " 123456789012345678",
            "-123456789012345678",
            "١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦٧٨",
            "１２３４５６７８９０１２３４５６７８",
        ] {
            assert!(
                matches!(Snowflake::parse(id), Err(ProfileError::InvalidSnowflake)),
                "{id} should be rejected"
            );
        }

        assert!(Snowflake::parse("12345678901234567").is_ok());
        assert!(Snowflake::parse("12345678901234567890").is_ok());
    }
}
