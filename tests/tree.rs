use rand::prelude::*;
use residual_trees::prelude::*;


fn step_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0], vec![0.0]),
        Sample::new(vec![1.0], vec![0.0]),
        Sample::new(vec![2.0], vec![10.0]),
        Sample::new(vec![3.0], vec![10.0]),
    ]
}


fn random_samples(n_sample: usize, seed: u64) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_sample).map(|_| {
            let x = vec![rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
            let y = vec![
                3.0 * x[0] + rng.gen::<f64>(),
                (x[1] * 6.0).floor(),
            ];
            Sample::new(x, y)
        })
        .collect()
}


/// Walk the tree with the training samples and check
/// the invariants every node must satisfy.
fn check_node(
    node: &Node,
    samples: Vec<&Sample>,
    min_leaf_size: usize,
    strict_improvement: bool,
)
{
    assert!(!samples.is_empty());
    assert!(node.error() >= 0.0);

    let mean = mean(samples.iter().copied()).unwrap();
    for (p, m) in node.prediction().iter().zip(&mean) {
        assert!((p - m).abs() < 1e-9, "prediction {p} != mean {m}");
    }

    let (Some(splitter), Some((left, right))) = (node.splitter(), node.children())
    else {
        return;
    };

    let (lsamples, rsamples): (Vec<&Sample>, Vec<&Sample>) = samples.iter()
        .copied()
        .partition(|s| splitter.split(s.input()) == LeftRight::Left);
    assert!(lsamples.len() >= min_leaf_size);
    assert!(rsamples.len() >= min_leaf_size);

    if strict_improvement {
        let n = samples.len() as f64;
        let joint = (lsamples.len() as f64 / n) * left.error()
            + (rsamples.len() as f64 / n) * right.error();
        assert!(joint < node.error(), "{joint} >= {}", node.error());
    }

    check_node(left, lsamples, min_leaf_size, strict_improvement);
    check_node(right, rsamples, min_leaf_size, strict_improvement);
}


#[test]
fn exhaustive_splits_step_at_midpoint() {
    let samples = step_samples();
    let tree = TreeBuilder::new()
        .min_leaf_size(1)
        .strategy(SplitStrategy::Exhaustive)
        .build(&samples)
        .unwrap();

    let root = tree.root();
    let splitter = root.splitter().unwrap();
    assert_eq!(splitter.feature, 0);
    assert_eq!(splitter.threshold, 1.5);

    let (left, right) = root.children().unwrap();
    assert!(left.is_leaf() && right.is_leaf());
    assert_eq!(left.prediction(), &[0.0]);
    assert_eq!(right.prediction(), &[10.0]);

    assert_eq!(tree.predict(&[0.5]), vec![0.0]);
    assert_eq!(tree.predict(&[2.5]), vec![10.0]);
    assert_eq!(tree.leaves(), 2);
    assert_eq!(tree.depth(), 1);
}


#[test]
fn huge_feature_values_still_split() {
    let samples = vec![
        Sample::new(vec![1.0e308], vec![0.0]),
        Sample::new(vec![1.1e308], vec![0.0]),
        Sample::new(vec![1.5e308], vec![10.0]),
        Sample::new(vec![1.6e308], vec![10.0]),
    ];
    let tree = TreeBuilder::new()
        .min_leaf_size(1)
        .build(&samples)
        .unwrap();

    let splitter = tree.root().splitter().unwrap();
    assert!(splitter.threshold.is_finite());
    assert!((splitter.threshold / 1.3e308 - 1.0).abs() < 1e-12);
    assert_eq!(tree.predict(&[1.05e308]), vec![0.0]);
    assert_eq!(tree.predict(&[1.55e308]), vec![10.0]);
}


#[test]
fn leaves_hold_the_mean_of_their_samples() {
    let samples = random_samples(200, 1);
    let tree = TreeBuilder::new()
        .max_depth(6)
        .min_leaf_size(3)
        .build(&samples)
        .unwrap();

    let mut groups = vec![Vec::new(); tree.leaves()];
    for sample in &samples {
        groups[tree.leaf_index(sample.input())].push(sample);
    }

    for group in groups {
        assert!(!group.is_empty());
        let expected = mean(group.iter().copied()).unwrap();
        let actual = tree.predict_ref(group[0].input());
        for (a, e) in actual.iter().zip(&expected) {
            assert!((a - e).abs() < 1e-9);
        }
    }
}


#[test]
fn exhaustive_tree_invariants() {
    let samples = random_samples(150, 2);
    let tree = TreeBuilder::new()
        .max_depth(5)
        .min_leaf_size(4)
        .build(&samples)
        .unwrap();

    assert!(tree.depth() <= 5);
    check_node(tree.root(), samples.iter().collect(), 4, true);
}


#[test]
fn randomized_tree_invariants() {
    let samples = random_samples(150, 3);
    let tree = TreeBuilder::new()
        .max_depth(7)
        .min_leaf_size(5)
        .strategy(SplitStrategy::Randomized)
        .seed(99)
        .build(&samples)
        .unwrap();

    assert!(tree.depth() <= 7);
    assert!(!tree.root().is_leaf());
    check_node(tree.root(), samples.iter().collect(), 5, false);
}


#[test]
fn randomized_tree_is_reproducible() {
    let samples = random_samples(80, 4);
    let builder = TreeBuilder::new()
        .max_depth(4)
        .strategy(SplitStrategy::Randomized)
        .seed(5);

    let a = builder.build(&samples).unwrap();
    let b = builder.build(&samples).unwrap();
    assert_eq!(a, b);
}


#[test]
fn degenerate_configurations_give_a_single_leaf() {
    let samples = random_samples(40, 5);

    let tree = TreeBuilder::new()
        .max_depth(0)
        .build(&samples)
        .unwrap();
    assert!(tree.root().is_leaf());

    let tree = TreeBuilder::new()
        .max_depth(10)
        .min_leaf_size(20)
        .build(&samples)
        .unwrap();
    assert!(tree.root().is_leaf());

    let tree = TreeBuilder::new()
        .min_leaf_size(20)
        .strategy(SplitStrategy::Randomized)
        .build(&samples)
        .unwrap();
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().prediction(), &mean(&samples).unwrap()[..]);
}


#[test]
fn constant_targets_are_not_split() {
    let samples = (0..10)
        .map(|i| Sample::new(vec![i as f64], vec![3.0]))
        .collect::<Vec<_>>();
    let tree = TreeBuilder::new().build(&samples).unwrap();
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().error(), 0.0);
}


#[test]
fn predict_is_idempotent() {
    let samples = random_samples(60, 6);
    let tree = TreeBuilder::new().build(&samples).unwrap();
    let input = [0.3, 0.6, 0.9];
    assert_eq!(tree.predict(&input), tree.predict(&input));
    assert_eq!(tree.predict(&input).len(), 2);
}


#[test]
fn malformed_samples_are_rejected() {
    let builder = TreeBuilder::new();

    assert!(matches!(builder.build(&[]), Err(TreeError::EmptySample)));

    let samples = vec![
        Sample::new(vec![0.0, 1.0], vec![0.0]),
        Sample::new(vec![1.0], vec![1.0]),
    ];
    assert!(matches!(
        builder.build(&samples),
        Err(TreeError::InputLength { index: 1, expected: 2, found: 1 })
    ));

    let samples = vec![
        Sample::new(vec![0.0], vec![0.0]),
        Sample::new(vec![1.0], vec![1.0, 2.0]),
    ];
    assert!(matches!(
        builder.build(&samples),
        Err(TreeError::OutputLength { index: 1, .. })
    ));
}


#[test]
#[should_panic]
fn short_input_panics() {
    let tree = TreeBuilder::new()
        .min_leaf_size(1)
        .build(&step_samples())
        .unwrap();
    let _ = tree.predict(&[]);
}


#[test]
fn dot_file() {
    let tree = TreeBuilder::new()
        .min_leaf_size(1)
        .build(&step_samples())
        .unwrap();

    let path = std::env::temp_dir()
        .join(format!("residual_trees_{}.dot", std::process::id()));
    tree.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("graph RegressionTree {"));
    assert!(dot.contains("x[0] < 1.50 ?"));
    assert!(dot.contains("[10.00]"));
}
