use linmat::{multiply, Matrix};

fn main() -> linmat::Result<()> {
    env_logger::init();

    let a = Matrix::new(vec![vec![2, 2, 2], vec![2, 2, 2]])?;
    let b = Matrix::new(vec![vec![2, 2], vec![2, 2], vec![2, 2]])?;
    let c = Matrix::new(vec![vec![2, 2], vec![2, 2]])?;

    print!("{}", multiply(&[(&a).into(), (&b).into()])?);
    println!();

    // A single row of B acts as a 1x2 operand.
    let row = b.get_row(1)?;
    print!("{}", multiply(&[(&row).into(), (&c).into()])?);

    Ok(())
}
