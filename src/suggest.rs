/// Edit distance between two ASCII-ish names (bytewise).
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        core::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Up to three candidates within distance 2 of `needle`, closest first.
#[must_use]
pub fn best_suggestions<'a>(needle: &str, hay: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = hay.into_iter().map(|h| (levenshtein(needle, h), h)).collect();
    scored.sort_by_key(|(d, _)| *d);
    scored.into_iter().filter(|(d, _)| *d <= 2).take(3).map(|(_, s)| s.to_string()).collect()
}
