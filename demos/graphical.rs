// Example walkthrough of the graphical method on a small production
// planning problem:
// A workshop makes two products: chairs and tables
// - Each chair uses 1 hour of cutting and 1 hour of assembly, profit $3
// - Each table uses 1 hour of cutting and 3 hours of assembly, profit $2
// - 4 cutting hours and 6 assembly hours available
//
// Maximize: 3*x1 + 2*x2
// Subject to:
//   x1 + x2 <= 4    (cutting hours)
//   x1 + 3*x2 <= 6  (assembly hours)
//   x1, x2 >= 0     (non-negativity)

use graphlp::{
    convex_hull, solve_graphical_2d, Constraint, ConstraintType, ObjectiveFunction,
    OptimizationProblem, OptimizationType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let objective = ObjectiveFunction::new(OptimizationType::Maximize, vec![3.0, 2.0]);
    let problem = OptimizationProblem::new(objective)
        .add_constraint(Constraint::new(
            ConstraintType::LessThanOrEqual,
            vec![1.0, 1.0],
            4.0,
        ))
        .add_constraint(Constraint::new(
            ConstraintType::LessThanOrEqual,
            vec![1.0, 3.0],
            6.0,
        ));

    let solution = solve_graphical_2d(&problem)?;

    println!("=== Production Planning Problem ===\n");
    println!("Status: {}", solution.status);

    println!("\nFeasible vertices (x1, x2) -> Z:");
    for vertex in &solution.vertices {
        println!(
            "  ({:6.2}, {:6.2}) -> {:6.2}",
            vertex.x(),
            vertex.y(),
            vertex.objective
        );
    }

    let outline = convex_hull(
        &solution
            .vertices
            .iter()
            .map(|v| (v.x(), v.y()))
            .collect::<Vec<_>>(),
    );
    println!("\nFeasible region outline (counter-clockwise):");
    for (x, y) in &outline {
        println!("  ({x:6.2}, {y:6.2})");
    }

    if let Some(optimal) = &solution.optimal {
        println!(
            "\nOptimal plan: {} chairs, {} tables, profit ${}",
            optimal.x(),
            optimal.y(),
            optimal.objective
        );
    }

    Ok(())
}
