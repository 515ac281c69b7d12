//! 图序列判定
//!
//! 一个非负整数序列若是某个简单图的度数序列，则称为图序列。

/// Havel–Hakimi 判定
///
/// 每轮降序排列，出现负数或大于 `len - 1` 的项即失败；全为 0 即成功；
/// 否则移除最大项 d，并将其后 d 项各减 1。序列长度每轮严格减少。
pub fn is_graphical_sequence(sequence: &[i64]) -> bool {
    let mut seq = sequence.to_vec();
    loop {
        seq.sort_unstable_by(|a, b| b.cmp(a));
        let max_degree = seq.len() as i64 - 1;
        if seq.iter().any(|&d| d < 0 || d > max_degree) {
            return false;
        }
        if seq.iter().all(|&d| d == 0) {
            return true;
        }
        let first = seq.remove(0) as usize;
        for d in seq.iter_mut().take(first) {
            *d -= 1;
        }
    }
}

/// Erdős–Gallai 判定
///
/// 降序序列 d 是图序列当且仅当总和为偶数，且对每个 k 有
/// `d_1 + ... + d_k <= k(k-1) + Σ_{i>k} min(d_i, k)`。
pub fn satisfies_erdos_gallai(sequence: &[i64]) -> bool {
    if sequence.iter().any(|&d| d < 0) {
        return false;
    }
    let mut seq = sequence.to_vec();
    seq.sort_unstable_by(|a, b| b.cmp(a));
    if seq.iter().sum::<i64>() % 2 != 0 {
        return false;
    }

    let mut prefix = 0;
    for (idx, &d) in seq.iter().enumerate() {
        let k = idx as i64 + 1;
        prefix += d;
        let tail: i64 = seq[idx + 1..].iter().map(|&x| x.min(k)).sum();
        if prefix > k * (k - 1) + tail {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Graphlike};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_known_sequences() {
        assert!(is_graphical_sequence(&[3, 3, 3, 3]));
        assert!(is_graphical_sequence(&[4, 4, 4, 4, 4]));
        assert!(is_graphical_sequence(&[2, 2, 2]));
        assert!(is_graphical_sequence(&[0, 0]));
        assert!(is_graphical_sequence(&[]));

        assert!(!is_graphical_sequence(&[5, 1, 1, 1, 1]));
        assert!(!is_graphical_sequence(&[-1, 2, 2]));
        assert!(!is_graphical_sequence(&[3, 3, 1, 1]));
        assert!(!is_graphical_sequence(&[1, 1, 1]));
        assert!(!is_graphical_sequence(&[1]));
    }

    #[test]
    fn test_input_is_not_modified() {
        let seq = vec![1, 2, 1];
        assert!(is_graphical_sequence(&seq));
        assert_eq!(seq, vec![1, 2, 1]);
    }

    #[test]
    fn test_erdos_gallai_agrees_with_havel_hakimi() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let len: usize = rng.gen_range(0..9);
            let seq: Vec<i64> = (0..len).map(|_| rng.gen_range(-1..9)).collect();
            assert_eq!(
                is_graphical_sequence(&seq),
                satisfies_erdos_gallai(&seq),
                "序列 {:?}",
                seq
            );
        }
    }

    #[test]
    fn test_degree_sequence_of_random_graph_is_graphical() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n: i64 = rng.gen_range(1..10);
            let mut g = Graph::new();
            g.add_vertices(0..n);
            for a in 0..n {
                for b in (a + 1)..n {
                    if rng.gen_bool(0.4) {
                        g.add_edge(Graph::edge_form(a, b)).unwrap();
                    }
                }
            }
            let seq: Vec<i64> = g
                .degree_sequence()
                .into_iter()
                .map(|d| d as i64)
                .collect();
            assert!(is_graphical_sequence(&seq), "序列 {:?}", seq);
        }
    }
}
