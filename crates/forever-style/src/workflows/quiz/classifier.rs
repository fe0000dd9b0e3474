use super::domain::StyleCategory;

/// Pick the dominant style among the recorded answers.
///
/// Categories are tallied in the order they first appear in `answers`. The
/// running winner is only replaced by a strictly greater count, so on a tie
/// the category that showed up first wins. Returns `None` for no answers.
pub fn classify_style(answers: &[StyleCategory]) -> Option<StyleCategory> {
    let mut tallies: Vec<(StyleCategory, usize)> = Vec::new();
    for answer in answers {
        match tallies.iter_mut().find(|(category, _)| category == answer) {
            Some((_, count)) => *count += 1,
            None => tallies.push((*answer, 1)),
        }
    }

    tallies
        .into_iter()
        .reduce(|winner, candidate| {
            if candidate.1 > winner.1 {
                candidate
            } else {
                winner
            }
        })
        .map(|(category, _)| category)
}
