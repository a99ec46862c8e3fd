//! Build two large sparse matrices, write them out, read them back and multiply

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smf::{read_matrix, write_matrix, MatrixShape, Operation, SparseMatrix};
use std::time::Instant;

fn main() -> smf::Result<()> {
    let size = 200_000;
    let nnz = 1_000_000;
    println!("Matrix dimensions: {size} x {size}, {nnz} random writes each");

    let mut rng = StdRng::seed_from_u64(1);
    let start = Instant::now();
    let a = build(&mut rng, size, nnz)?;
    let b = build(&mut rng, size, nnz)?;
    println!("Built operands in {:?}", start.elapsed());

    let dir = std::env::temp_dir();
    let (left, right) = (dir.join("smf_left.txt"), dir.join("smf_right.txt"));
    let start = Instant::now();
    write_matrix(&left, &a)?;
    write_matrix(&right, &b)?;
    println!("Wrote {} and {} in {:?}", left.display(), right.display(), start.elapsed());

    let start = Instant::now();
    let a = read_matrix(&left)?;
    let b = read_matrix(&right)?;
    println!("Read back in {:?}", start.elapsed());

    let start = Instant::now();
    let product = Operation::Multiply.apply(&a, &b)?;
    println!(
        "Product has {} nonzero entries (density {:.2e}), computed in {:?}",
        product.nnz(),
        product.density(),
        start.elapsed()
    );
    Ok(())
}

fn build(rng: &mut StdRng, size: usize, nnz: usize) -> smf::Result<SparseMatrix> {
    let mut matrix = SparseMatrix::new(size, size);
    for _ in 0..nnz {
        let value = rng.gen_range(-50..=50);
        matrix.set_element(rng.gen_range(0..size), rng.gen_range(0..size), value)?;
    }
    Ok(matrix)
}
