use ndarray::{Array1, Array3, Axis};

use radial_basis::{BasisConfiguration, RadialBasisEvaluator, RadialBasisFunction};

#[test]
fn parallel_matches_sequential() {
    let configurations = [
        BasisConfiguration::cosine(0.0, 5.0, 10).unwrap(),
        BasisConfiguration::gaussian(0.0, 5.0, 10).unwrap(),
    ];

    // large enough to use the parallel code path
    let distances = Array3::from_shape_fn((20, 30, 40), |(i, j, k)| {
        0.01 * (i as f64) + 0.1 * (j as f64) + 0.003 * (k as f64)
    });

    for configuration in configurations {
        let evaluator = RadialBasisEvaluator::new(configuration);
        let basis = configuration.create();

        let (values, gradients) = evaluator.evaluate_with_gradients(distances.view().into_dyn()).unwrap();
        assert_eq!(values.shape(), [20, 30, 40, 10]);
        assert_eq!(evaluator.evaluate(distances.view().into_dyn()).unwrap(), values);

        let values = values.into_shape_with_order((distances.len(), 10)).unwrap();
        let gradients = gradients.into_shape_with_order((distances.len(), 10)).unwrap();

        let mut expected_values = Array1::zeros(10);
        let mut expected_gradients = Array1::zeros(10);
        for (i, &distance) in distances.iter().enumerate() {
            basis.compute(distance, expected_values.view_mut(), Some(expected_gradients.view_mut()));
            assert_eq!(values.index_axis(Axis(0), i), expected_values);
            assert_eq!(gradients.index_axis(Axis(0), i), expected_gradients);
        }
    }
}

#[test]
fn shared_between_threads() {
    let evaluator = RadialBasisEvaluator::new(BasisConfiguration::cosine(0.0, 3.0, 6).unwrap());
    let distances = Array1::from_shape_fn(100, |i| 0.03 * i as f64).into_dyn();
    let reference = evaluator.evaluate(distances.view()).unwrap();

    std::thread::scope(|scope| {
        let handles = (0..4).map(|_| {
            scope.spawn(|| evaluator.evaluate(distances.view()).unwrap())
        }).collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
