//! Parsing of command-line enhancement arguments.

use anyhow::{bail, Context, Result};
use gear_core::{FlameLine, PotentialEntry, PotentialRank, StatKey};

/// Parse `STAT=VALUE`, e.g. `luk=40` or `intLuk=36`.
pub fn parse_flame(text: &str) -> Result<FlameLine> {
    let Some((stat, value)) = text.split_once('=') else {
        bail!("flame `{text}` must look like STAT=VALUE");
    };
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid flame value in `{text}`"))?;
    Ok(FlameLine::new(stat.trim(), value))
}

/// Parse `LINE[:RANK][=VALUE]`, e.g. `a_luk`, `a_luk:legendary` or
/// `w_boss:unique=35`.
pub fn parse_potential(text: &str) -> Result<PotentialEntry> {
    let (head, value) = match text.split_once('=') {
        Some((head, value)) => {
            let value: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("invalid potential value in `{text}`"))?;
            (head, Some(value))
        }
        None => (text, None),
    };
    let (line_id, rank) = match head.split_once(':') {
        Some((line_id, rank)) => (line_id, Some(rank.trim().parse::<PotentialRank>()?)),
        None => (head, None),
    };
    if line_id.trim().is_empty() {
        bail!("potential `{text}` has no line id");
    }

    let mut entry = PotentialEntry::new(line_id.trim());
    if let Some(rank) = rank {
        entry = entry.with_rank(rank);
    }
    entry.value = value;
    Ok(entry)
}

/// Parse a comma-separated list of stat codes, e.g. `luk,watk,bossDmg`.
pub fn parse_stat_keys(text: &str) -> Result<Vec<StatKey>> {
    text.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| code.parse::<StatKey>().map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flame() {
        assert_eq!(parse_flame("luk=40").unwrap(), FlameLine::new("luk", 40.0));
        assert_eq!(parse_flame(" allStat = 6 ").unwrap(), FlameLine::new("allStat", 6.0));
        assert!(parse_flame("luk").is_err());
        assert!(parse_flame("luk=lots").is_err());
    }

    #[test]
    fn test_parse_potential() {
        let plain = parse_potential("a_luk").unwrap();
        assert_eq!(plain, PotentialEntry::new("a_luk"));

        let ranked = parse_potential("a_luk:legendary").unwrap();
        assert_eq!(ranked.potential_rank(), Some(PotentialRank::Legendary));
        assert_eq!(ranked.value, None);

        let valued = parse_potential("w_boss:Unique=35").unwrap();
        assert_eq!(valued.line_id, "w_boss");
        assert_eq!(valued.potential_rank(), Some(PotentialRank::Unique));
        assert_eq!(valued.value, Some(35.0));

        let value_only = parse_potential("w_boss=40").unwrap();
        assert_eq!(value_only.rank, None);
        assert_eq!(value_only.value, Some(40.0));
    }

    #[test]
    fn test_parse_potential_errors() {
        assert!(parse_potential(":epic").is_err());
        assert!(parse_potential("a_luk:mythic").is_err());
        assert!(parse_potential("a_luk=x").is_err());
    }

    #[test]
    fn test_parse_stat_keys() {
        assert_eq!(
            parse_stat_keys("luk, watk,bossDmg").unwrap(),
            vec![StatKey::Luck, StatKey::WeaponAttack, StatKey::BossDamage]
        );
        assert!(parse_stat_keys("").unwrap().is_empty());
        assert!(parse_stat_keys("luk,mana").is_err());
    }
}
