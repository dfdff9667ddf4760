use radial_basis::{CartesianGrid, RadialBasisEvaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pass the basis configuration as JSON
    let parameters = r#"{
        "kind": {"type": "Cosine"},
        "min_radius": 0.0,
        "max_radius": 2.5,
        "number_of_basis": 5
    }"#;
    let evaluator = RadialBasisEvaluator::from_json(parameters)?;

    // sample the basis functions on a cube around the origin, this gives one
    // scalar field for each basis function
    let grid = CartesianGrid::new(3.0, 31)?;
    let field = evaluator.evaluate_on_grid(&grid)?;
    println!("field shape: {:?}", field.shape());

    // the positions of the grid points, to be used together with the field
    // values for plotting
    let points = grid.points();
    let values = field.into_shape_with_order((points.nrows(), evaluator.size()))?;
    for (point, values) in points.rows().into_iter().zip(values.rows()).step_by(997) {
        println!("{:>6.2} {:>6.2} {:>6.2}  ->  {:.4}", point[0], point[1], point[2], values);
    }

    Ok(())
}
