use road_spline::Spline;

fn main() {
    // collinear control points; the natural spline keeps the line straight
    let mut spline = Spline::new();
    spline.add_point(1.0, 1.0);
    spline.add_point(3.0, 4.0);
    spline.add_point(5.0, 7.0);

    assert!(spline.fit());

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let pt = spline.evaluate(t).unwrap();
        println!("t={:.1} -> {}", t, pt);
    }
}
