use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A stratified train/test partition of `(speed, label)` pairs.
#[derive(Debug, Clone)]
pub struct TrainTest {
    pub train_speeds: Vec<f64>,
    pub train_labels: Vec<u8>,
    pub test_speeds: Vec<f64>,
    pub test_labels: Vec<u8>,
}

/// Deterministic stratified split: indices are shuffled per class with a
/// seeded RNG and roughly `test_fraction` of each class goes to the test
/// set, leaving at least one training sample per represented class.
pub fn stratified_split(
    speeds: &[f64],
    labels: &[u8],
    test_fraction: f64,
    seed: u64,
) -> TrainTest {
    debug_assert_eq!(speeds.len(), labels.len());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut split = TrainTest {
        train_speeds: Vec::new(),
        train_labels: Vec::new(),
        test_speeds: Vec::new(),
        test_labels: Vec::new(),
    };

    for class in [0u8, 1u8] {
        let mut indices: Vec<usize> = (0..labels.len()).filter(|&i| labels[i] == class).collect();
        if indices.is_empty() {
            continue;
        }
        indices.shuffle(&mut rng);

        let mut test_count = (indices.len() as f64 * test_fraction).round() as usize;
        if test_count >= indices.len() {
            test_count = indices.len() - 1;
        }

        for (pos, &i) in indices.iter().enumerate() {
            if pos < test_count {
                split.test_speeds.push(speeds[i]);
                split.test_labels.push(labels[i]);
            } else {
                split.train_speeds.push(speeds[i]);
                split.train_labels.push(labels[i]);
            }
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> (Vec<f64>, Vec<u8>) {
        let speeds: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let labels: Vec<u8> = (0..20).map(|i| if i < 10 { 0 } else { 1 }).collect();
        (speeds, labels)
    }

    #[test]
    fn sizes_add_up_and_both_classes_survive() {
        let (speeds, labels) = dataset();
        let split = stratified_split(&speeds, &labels, 0.2, 42);

        assert_eq!(split.train_speeds.len() + split.test_speeds.len(), 20);
        assert_eq!(split.test_labels.len(), 4);
        assert!(split.train_labels.contains(&0) && split.train_labels.contains(&1));
        assert!(split.test_labels.contains(&0) && split.test_labels.contains(&1));
    }

    #[test]
    fn same_seed_gives_the_same_partition() {
        let (speeds, labels) = dataset();
        let a = stratified_split(&speeds, &labels, 0.2, 7);
        let b = stratified_split(&speeds, &labels, 0.2, 7);
        assert_eq!(a.test_speeds, b.test_speeds);
        assert_eq!(a.train_speeds, b.train_speeds);
    }

    #[test]
    fn tiny_class_keeps_a_training_sample() {
        let speeds = vec![1.0, 2.0, 15.0];
        let labels = vec![0, 0, 1];
        let split = stratified_split(&speeds, &labels, 0.9, 1);
        assert!(split.train_labels.contains(&1));
    }
}
