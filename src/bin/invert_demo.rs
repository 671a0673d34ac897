use fixed_matrix::matrix::matrix::Matrix;

fn main() {
    let matrix = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.0, 0.0, -1.0, 0.0],
        vec![0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.0, 2.0, 2.0, 2.0, -2.0, 1.0, 3.0],
        vec![1.0, 3.0, 5.0, 7.0, 0.0, -1.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        vec![9.0, -2.0, 0.0, 0.0, 0.0, 2.0, 0.0],
    ])
    .expect("literal is rectangular");

    println!("[ ] Matrix is\n{}", matrix);

    match matrix.inverse() {
        Ok(inverse) => {
            println!("[ ] Inversion is\n{}", inverse);
            println!("[ ] Multiplied is\n{}", inverse.multiply(&matrix));
            println!("[ ] or\n{}", matrix.multiply(&inverse));
        }
        Err(error) => println!("[!] {}", error),
    }
}
