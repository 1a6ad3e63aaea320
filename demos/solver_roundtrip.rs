use road_spline::{solve, BandMatrix, Vector};

fn main() {
    let mut a = BandMatrix::new(5);
    a.set(0, 0, 1.0);
    a.set(1, 0, 1.0);
    a.set(1, 1, 8.0);
    a.set(1, 2, 3.0);
    a.set(2, 1, 3.0);
    a.set(2, 2, 8.0);
    a.set(2, 3, 1.0);
    a.set(3, 2, 1.0);
    a.set(3, 3, 8.0);
    a.set(3, 4, 3.0);
    a.set(4, 4, 1.0);

    let mut b = Vector::new(5);
    b.set(1, -8.0);
    b.set(2, -10.0);
    b.set(3, 10.0);

    println!("A =\n{}", a);
    println!("b = {}", b);

    let x = solve(&a, &b).unwrap();
    println!("x = {}", x);

    let check = a.multiply(&x);
    println!("A*x = {}", check);
    println!("round trip equal: {:?}", check.compare(&b));
}
