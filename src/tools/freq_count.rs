use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Returns a frequency count of the input data, sorted by symbol so that callers never depend on
/// hash iteration order. Every count is positive.
pub fn freqs<T: Hash + Ord + Clone>(data: &[T]) -> Vec<(T, u32)> {
    // Counting through a hash map is faster than a BTreeMap for long inputs with few symbols.
    let mut counts: FxHashMap<&T, u32> = FxHashMap::default();
    data.iter().for_each(|sym| *counts.entry(sym).or_insert(0) += 1);

    let mut table = counts
        .into_iter()
        .map(|(sym, count)| (sym.clone(), count))
        .collect::<Vec<(T, u32)>>();
    table.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    table
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn freqs_sorted_test() {
        let data = "abracadabra".chars().collect::<Vec<char>>();
        assert_eq!(
            freqs(&data),
            vec![('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]
        );
    }

    #[test]
    fn freqs_empty_test() {
        let data: Vec<String> = vec![];
        assert!(freqs(&data).is_empty());
    }
}
