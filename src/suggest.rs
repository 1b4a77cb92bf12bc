/// "Did you mean" suggestions for unresolved command tokens.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Minimum score ratio between 1st and 2nd candidate to suggest at all.
/// Below this, the match is too ambiguous to single one name out.
const SUGGEST_RATIO: f32 = 1.5;

/// Pick the registered name closest to an unknown command token.
///
/// Returns `None` when nothing matches, or when two candidates score
/// too close together to make a confident suggestion.
#[must_use]
pub fn closest_command<'a, I>(names: I, input: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if input.is_empty() {
        return None;
    }

    let pattern = Pattern::parse(input, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = names
        .into_iter()
        .filter_map(|name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|s| (name, s))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    match scored.as_slice() {
        [] => None,
        [(name, _)] => Some((*name).to_owned()),
        [(best, best_score), (_, second_score), ..] => {
            let ratio = *best_score as f32 / (*second_score as f32).max(1.0);
            (ratio >= SUGGEST_RATIO).then(|| (*best).to_owned())
        }
    }
}
