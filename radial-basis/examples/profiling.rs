use ndarray::ArrayD;

use radial_basis::{BasisConfiguration, RadialBasisEvaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // enable collection of profiling data
    time_graph::enable_data_collection(true);
    // clear any existing collected data
    time_graph::clear_collected_data();

    // run the calculation
    let _values = evaluate_basis()?;

    // get the call graph and display it
    let graph = time_graph::get_full_graph();
    // (this requires the "table" feature for the time_graph crate)
    println!("{}", graph.as_short_table());

    // also available for saving profiling data to the disk & future analysis
    // (this requires the "json" feature for the time_graph crate)
    println!("{}", graph.as_json());

    Ok(())
}

/// Evaluate a gaussian basis with gradients on a large batch of distances
fn evaluate_basis() -> Result<ArrayD<f64>, Box<dyn std::error::Error>> {
    let distances = ArrayD::from_shape_fn(ndarray::IxDyn(&[100, 64, 64]), |index| {
        0.05 * ((index[0] * 31 + index[1] * 7 + index[2]) % 100) as f64
    });

    let values = time_graph::spanned!("Full calculation", {
        let evaluator = RadialBasisEvaluator::new(BasisConfiguration::gaussian(0.0, 5.0, 16)?);
        let (values, _gradients) = evaluator.evaluate_with_gradients(distances.view())?;
        values
    });

    Ok(values)
}
