//! Dense ranking.

/// Dense ranks for `values`, highest first, returned in input order.
///
/// Equal values share a rank and the next distinct value gets `previous + 1`,
/// so `[10, 10, 7]` ranks as `[1, 1, 2]`.
pub fn dense_rank_desc(values: &[f64]) -> Vec<u32> {
    let mut distinct: Vec<f64> = values.to_vec();
    distinct.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    distinct.dedup();

    values
        .iter()
        .map(|v| {
            let idx = distinct.iter().position(|d| d == v).unwrap_or(distinct.len());
            idx as u32 + 1
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_share_rank_without_gaps() {
        assert_eq!(dense_rank_desc(&[10.0, 10.0, 7.0]), vec![1, 1, 2]);
        assert_eq!(dense_rank_desc(&[7.0, 10.0, 3.0, 10.0, 7.0]), vec![2, 1, 3, 1, 2]);
    }

    #[test]
    fn all_equal_is_rank_one() {
        assert_eq!(dense_rank_desc(&[0.0, 0.0, 0.0]), vec![1, 1, 1]);
        assert!(dense_rank_desc(&[]).is_empty());
    }
}
