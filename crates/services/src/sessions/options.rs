use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use rankquiz_core::model::RankEntry;

use crate::error::SessionError;

/// Every question offers one correct label and three distractors.
pub const OPTION_COUNT: usize = 4;

/// Build the multiple-choice set for one question.
///
/// Distractors are drawn uniformly without replacement from the distinct
/// labels of the remaining catalog. Deduplication is by label, not entry id:
/// two entries sharing a label would otherwise yield two identical options.
/// The combined set is shuffled so the correct answer's position carries no
/// signal.
///
/// # Errors
///
/// Returns [`SessionError::InsufficientOptions`] when the catalog holds fewer
/// than [`OPTION_COUNT`] distinct labels. Session start validates this up
/// front, so a caller that only uses session-vetted catalogs never sees it.
pub fn build_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct_label: &str,
    entries: &[RankEntry],
) -> Result<Vec<String>, SessionError> {
    let mut seen = HashSet::new();
    let mut distractors: Vec<&str> = Vec::new();
    for entry in entries {
        let label = entry.rank.as_str();
        if label != correct_label && seen.insert(label) {
            distractors.push(label);
        }
    }

    if distractors.len() < OPTION_COUNT - 1 {
        return Err(SessionError::InsufficientOptions {
            distinct: distractors.len() + 1,
        });
    }

    distractors.shuffle(rng);
    distractors.truncate(OPTION_COUNT - 1);

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(correct_label.to_string());
    options.shuffle(rng);

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rankquiz_core::model::RankId;

    fn entry(id: u32, label: &str) -> RankEntry {
        RankEntry::new(RankId::new(id), label, "", "", "")
    }

    fn catalog(labels: &[&str]) -> Vec<RankEntry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| entry(u32::try_from(i).unwrap() + 1, label))
            .collect()
    }

    #[test]
    fn options_contain_correct_label_and_three_distractors() {
        let entries = catalog(&["Captain", "Major", "Colonel", "Lieutenant", "General"]);
        let mut rng = StdRng::seed_from_u64(7);

        let options = build_options(&mut rng, "Captain", &entries).unwrap();

        assert_eq!(options.len(), OPTION_COUNT);
        assert_eq!(options.iter().filter(|o| *o == "Captain").count(), 1);
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), OPTION_COUNT);
        for option in &options {
            assert!(entries.iter().any(|e| &e.rank == option));
        }
    }

    #[test]
    fn duplicate_labels_count_once() {
        // Five entries but only four distinct labels; still enough.
        let entries = catalog(&["Captain", "Major", "Major", "Colonel", "General"]);
        let mut rng = StdRng::seed_from_u64(1);

        let options = build_options(&mut rng, "Captain", &entries).unwrap();
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), OPTION_COUNT);
    }

    #[test]
    fn too_few_distinct_labels_is_an_error() {
        let entries = catalog(&["Captain", "Major", "Major"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = build_options(&mut rng, "Captain", &entries).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InsufficientOptions { distinct: 2 }
        ));
    }

    #[test]
    fn exactly_four_labels_uses_them_all() {
        let entries = catalog(&["Captain", "Major", "Colonel", "General"]);
        let mut rng = StdRng::seed_from_u64(3);

        let mut options = build_options(&mut rng, "Captain", &entries).unwrap();
        options.sort();
        assert_eq!(options, vec!["Captain", "Colonel", "General", "Major"]);
    }
}
