use dense_proximity::utils::data_structures::Matrix;

#[test]
fn test_matrix_get_set() {
    let mut matrix: Matrix<i64> = Matrix::new(3, 3, 7);

    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.get(1, 2), 7);

    matrix.set(1, 2, 42);
    assert_eq!(matrix.get(1, 2), 42);
    assert_eq!(matrix[(1, 2)], 42);
    assert_eq!(matrix.get(2, 1), 7);
}

#[test]
fn test_matrix_fill() {
    let mut matrix: Matrix<i64> = Matrix::new(2, 4, 0);

    matrix.fill(5);

    for row in 0..2 {
        for col in 0..4 {
            assert_eq!(matrix.get(row, col), 5);
        }
    }
}

#[test]
fn test_matrix_reduce_value() {
    let mut matrix: Matrix<i64> = Matrix::new(2, 2, 10);

    assert!(matrix.reduce_value(0, 0, 4));
    assert_eq!(matrix.get(0, 0), 4);

    // larger values never overwrite
    assert!(!matrix.reduce_value(0, 0, 9));
    assert_eq!(matrix.get(0, 0), 4);
}

#[test]
fn test_matrix_rows_and_equality() {
    let mut matrix: Matrix<i64> = Matrix::new(2, 3, 0);
    matrix.set(1, 0, 1);
    matrix.set(1, 1, 2);
    matrix.set(1, 2, 3);

    assert_eq!(matrix.row(1), &[1, 2, 3]);

    let copy = matrix.clone();
    assert!(copy == matrix);

    let mut other = matrix.clone();
    other.set(0, 0, 9);
    assert!(other != matrix);
}

#[test]
fn test_matrix_clone_from() {
    let mut matrix: Matrix<i64> = Matrix::new(2, 2, 1);
    let mut target: Matrix<i64> = Matrix::new(2, 2, 0);

    matrix.set(0, 1, 8);
    target.clone_from(&matrix);

    assert_eq!(target.get(0, 1), 8);
    assert!(target == matrix);
}
