/// Fraction of predictions matching the labels.
pub fn accuracy(labels: &[u8], predictions: &[u8]) -> f64 {
    debug_assert_eq!(labels.len(), predictions.len());
    if labels.is_empty() {
        return 0.0;
    }
    let hits = labels
        .iter()
        .zip(predictions)
        .filter(|(label, pred)| label == pred)
        .count();
    hits as f64 / labels.len() as f64
}

/// Area under the ROC curve by pairwise comparison, counting 0.5 for tied
/// scores. `None` when only one class is present.
pub fn roc_auc(labels: &[u8], scores: &[f64]) -> Option<f64> {
    debug_assert_eq!(labels.len(), scores.len());
    let positives: Vec<f64> = labels
        .iter()
        .zip(scores)
        .filter(|(&label, _)| label == 1)
        .map(|(_, &s)| s)
        .collect();
    let negatives: Vec<f64> = labels
        .iter()
        .zip(scores)
        .filter(|(&label, _)| label == 0)
        .map(|(_, &s)| s)
        .collect();
    if positives.is_empty() || negatives.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for &p in &positives {
        for &n in &negatives {
            if p > n {
                sum += 1.0;
            } else if p == n {
                sum += 0.5;
            }
        }
    }
    Some(sum / (positives.len() * negatives.len()) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_matches() {
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn perfectly_ranked_scores_give_auc_one() {
        let labels = [0, 0, 1, 1];
        let scores = [0.1, 0.2, 0.8, 0.9];
        assert_eq!(roc_auc(&labels, &scores), Some(1.0));
    }

    #[test]
    fn constant_scores_give_auc_half() {
        let labels = [0, 1, 0, 1];
        let scores = [0.5, 0.5, 0.5, 0.5];
        assert_eq!(roc_auc(&labels, &scores), Some(0.5));
    }

    #[test]
    fn single_class_has_no_auc() {
        assert_eq!(roc_auc(&[1, 1], &[0.3, 0.4]), None);
    }
}
