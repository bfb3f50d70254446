use super::offsets::GlobalSpan;

// Greedy by ascending start, longer first; a span survives only if none of
// its tokens is already taken. Stable sort keeps input order on full ties.
pub fn resolve_overlaps(candidates: &[GlobalSpan]) -> Vec<GlobalSpan> {
    let mut ordered = candidates
        .iter()
        .filter(|span| !span.is_empty())
        .collect::<Vec<&GlobalSpan>>();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.len().cmp(&a.len())));

    let token_bound = ordered.iter().map(|span| span.end).max().unwrap_or(0);
    let mut consumed = vec![false; token_bound];
    let mut kept = Vec::new();

    for span in ordered {
        let covered = &mut consumed[span.start..span.end];
        if covered.iter().any(|taken| *taken) {
            continue;
        }
        covered.fill(true);
        kept.push(span.clone());
    }

    kept
}
