//! Fuzzy ranking for the list filter.

use frizbee::{Config, match_list};

/// Dataset size above which frizbee's prefilter and typo limits kick in.
pub(crate) const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Builds fuzzy matching options for the provided query and dataset size.
pub(crate) fn config_for_query(query: &str, dataset_len: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}

	config.sort = false;

	config
}

/// Indices of `haystacks` matching `query`, best score first.
///
/// Equal scores keep their original order. A blank query matches everything
/// in order.
pub(crate) fn rank(query: &str, haystacks: &[&str]) -> Vec<usize> {
	let trimmed = query.trim();
	if trimmed.is_empty() {
		return (0..haystacks.len()).collect();
	}

	let config = config_for_query(trimmed, haystacks.len());
	let mut matches: Vec<(usize, u16)> = match_list(trimmed, haystacks, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.index as usize, entry.score))
		.collect();
	matches.sort_by(|(a_index, a_score), (b_index, b_score)| {
		b_score.cmp(a_score).then_with(|| a_index.cmp(b_index))
	});
	matches.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const VERSIONS: [&str; 3] = ["8.3.6", "8.2.27", "8.1.31"];

	#[test]
	fn blank_query_keeps_everything_in_order() {
		assert_eq!(rank("  ", &VERSIONS), vec![0, 1, 2]);
	}

	#[test]
	fn closest_version_ranks_first() {
		let ranked = rank("8.1", &VERSIONS);
		assert_eq!(ranked.first(), Some(&2));
	}

	#[test]
	fn full_version_ranks_first() {
		let ranked = rank("8.2.27", &VERSIONS);
		assert_eq!(ranked.first(), Some(&1));
	}

	#[test]
	fn enables_prefilter_for_large_datasets() {
		let config = config_for_query("example", PREFILTER_ENABLE_THRESHOLD);
		assert!(config.prefilter);
		assert_eq!(config.max_typos, Some(2));
	}

	#[test]
	fn disables_prefilter_for_small_datasets() {
		let config = config_for_query("example", PREFILTER_ENABLE_THRESHOLD - 1);
		assert!(!config.prefilter);
		assert_eq!(config.max_typos, None);
	}
}
